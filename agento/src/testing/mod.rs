//! Testing utilities for agento sessions.
//!
//! This module provides:
//! - Fixtures for sample outputs, prepared sessions and fast stages
//! - Assertions over session state

mod assertions;
mod fixtures;

pub use assertions::{
    assert_module_completed, assert_module_status, assert_no_output, assert_output_contains,
};
pub use fixtures::{instant_criteria_stage, sample_criteria_output, TestSession};
