//! Test assertions for session state.

use crate::core::{ModuleId, ModuleStatus};
use crate::session::Session;

/// Asserts that `module` has the expected status.
pub fn assert_module_status(session: &Session, module: ModuleId, expected: ModuleStatus) {
    let actual = session.get_status(module);
    assert_eq!(
        actual, expected,
        "Expected {module} to be {expected}, got {actual}"
    );
}

/// Asserts that `module` is completed and has a stored output.
pub fn assert_module_completed(session: &Session, module: ModuleId) {
    assert_module_status(session, module, ModuleStatus::Completed);
    assert!(
        session.get_output(module).is_some(),
        "Expected {module} to have an output"
    );
}

/// Asserts that the output of `module` contains `key`.
pub fn assert_output_contains(session: &Session, module: ModuleId, key: &str) {
    let output = session.get_output(module);
    assert!(
        output.is_some_and(|o| o.get(key).is_some()),
        "Expected output of {module} to contain key '{key}'. Keys: {:?}",
        output.map(|o| o.as_map().keys().collect::<Vec<_>>())
    );
}

/// Asserts that `module` has no stored output.
pub fn assert_no_output(session: &Session, module: ModuleId) {
    assert!(
        session.get_output(module).is_none(),
        "Expected {module} to have no output"
    );
}
