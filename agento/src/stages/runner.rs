//! Drives a stage against a session.

use super::{Stage, StageInput, StageReport};
use crate::core::{ModuleId, ModuleOutput, ModuleStatus};
use crate::errors::Result;
use crate::session::{Session, SessionHandle};
use tracing::{info, warn};

/// Runs stages and records their results in a session.
///
/// A run marks the module `in_progress`, then either stores logs and output
/// (which completes the module) or marks it `failed` and logs the error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageRunner;

impl StageRunner {
    /// Runs `stage` on an exclusively borrowed session.
    ///
    /// Without an explicit `input`, the stage receives the module's pending
    /// input or its predecessor's output.
    ///
    /// # Errors
    ///
    /// Returns the stage's error after recording the failure.
    pub async fn run(
        session: &mut Session,
        stage: &dyn Stage,
        input: Option<StageInput>,
    ) -> Result<ModuleOutput> {
        let module = stage.module_id();
        let input = Self::begin(session, module, input);
        let result = stage.run(input).await;
        Self::finish(session, module, result)
    }

    /// Runs `stage` on a shared session without holding its lock while the
    /// stage works.
    ///
    /// # Errors
    ///
    /// Returns the stage's error after recording the failure.
    pub async fn run_shared(
        handle: &SessionHandle,
        stage: &dyn Stage,
        input: Option<StageInput>,
    ) -> Result<ModuleOutput> {
        let module = stage.module_id();
        let input = Self::begin(&mut handle.write(), module, input);
        let result = stage.run(input).await;
        Self::finish(&mut handle.write(), module, result)
    }

    fn begin(session: &mut Session, module: ModuleId, input: Option<StageInput>) -> StageInput {
        info!(session_id = %session.id(), module = %module, "stage started");
        session.set_status(module, ModuleStatus::InProgress);
        input.unwrap_or_else(|| StageInput {
            goal: None,
            previous: session.input_for(module),
        })
    }

    fn finish(
        session: &mut Session,
        module: ModuleId,
        result: Result<StageReport>,
    ) -> Result<ModuleOutput> {
        match result {
            Ok(StageReport { output, logs }) => {
                info!(session_id = %session.id(), module = %module, "stage completed");
                session.save_logs(module, logs.standard, logs.verbose);
                session.save_output(module, output.clone());
                Ok(output)
            }
            Err(err) => {
                warn!(session_id = %session.id(), module = %module, error = %err, "stage failed");
                session.set_status(module, ModuleStatus::Failed);
                session.save_logs(module, err.user_message(), format!("{err:?}"));
                Err(err)
            }
        }
    }
}
