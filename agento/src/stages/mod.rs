//! Stage trait and implementations.
//!
//! A stage is the work behind one pipeline module. Only module 1 has an
//! implementation so far, and it is a stub that fabricates its output.

mod criteria;
mod runner;

pub use criteria::{run_module_1, CriteriaOutput, CriteriaStage};
pub use runner::StageRunner;

use crate::core::{LogPair, ModuleId, ModuleOutput};
use crate::errors::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// What a stage receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageInput {
    /// The user's goal, for stages that start from one.
    pub goal: Option<String>,
    /// The previous module's output (or an uploaded replacement).
    pub previous: Option<ModuleOutput>,
}

impl StageInput {
    /// Input carrying only a goal.
    #[must_use]
    pub fn goal(goal: impl Into<String>) -> Self {
        Self {
            goal: Some(goal.into()),
            previous: None,
        }
    }

    /// Input carrying only an upstream output.
    #[must_use]
    pub const fn from_output(previous: ModuleOutput) -> Self {
        Self {
            goal: None,
            previous: Some(previous),
        }
    }
}

/// What a successful stage run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    /// The module output.
    pub output: ModuleOutput,
    /// Logs of the run.
    pub logs: LogPair,
}

impl StageReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(output: ModuleOutput, logs: LogPair) -> Self {
        Self { output, logs }
    }
}

/// Trait for pipeline stages.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// The module this stage implements.
    fn module_id(&self) -> ModuleId;

    /// Executes the stage.
    async fn run(&self, input: StageInput) -> Result<StageReport>;
}

/// A stage backed by a synchronous closure.
pub struct FnStage<F>
where
    F: Fn(&StageInput) -> Result<StageReport> + Send + Sync,
{
    module: ModuleId,
    func: F,
}

impl<F> FnStage<F>
where
    F: Fn(&StageInput) -> Result<StageReport> + Send + Sync,
{
    /// Creates a new function-based stage.
    pub const fn new(module: ModuleId, func: F) -> Self {
        Self { module, func }
    }
}

impl<F> Debug for FnStage<F>
where
    F: Fn(&StageInput) -> Result<StageReport> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStage")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> Stage for FnStage<F>
where
    F: Fn(&StageInput) -> Result<StageReport> + Send + Sync,
{
    fn module_id(&self) -> ModuleId {
        self.module
    }

    async fn run(&self, input: StageInput) -> Result<StageReport> {
        (self.func)(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AgentoError;

    #[tokio::test]
    async fn test_fn_stage() {
        let stage = FnStage::new(ModuleId::Module2, |input: &StageInput| {
            let previous = input.previous.clone().unwrap_or_default();
            Ok(StageReport::new(previous, LogPair::new("echo", "")))
        });

        assert_eq!(stage.module_id(), ModuleId::Module2);

        let input = StageInput::from_output(ModuleOutput::new().with("k", serde_json::json!(1)));
        let report = stage.run(input).await.unwrap();
        assert_eq!(report.output.get("k"), Some(&serde_json::json!(1)));
        assert_eq!(report.logs.standard, "echo");
    }

    #[tokio::test]
    async fn test_fn_stage_error() {
        let stage = FnStage::new(ModuleId::Module3, |_: &StageInput| {
            Err(AgentoError::stage_failed(ModuleId::Module3, "not implemented"))
        });

        let err = stage.run(StageInput::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Stage 'module3' failed: not implemented");
    }

    #[test]
    fn test_stage_input_constructors() {
        assert_eq!(StageInput::goal("g").goal.as_deref(), Some("g"));
        assert!(StageInput::goal("g").previous.is_none());
        assert!(StageInput::from_output(ModuleOutput::new()).goal.is_none());
    }
}
