//! Tagged state transitions.

use crate::core::{LogPair, ModuleId, ModuleOutput, ModuleStatus};

/// A single write against [`PipelineState`](super::PipelineState).
///
/// Every mutation of the state goes through one of these variants so that
/// compound effects (an output save also completing the module) happen in a
/// single step.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    /// Stores an output and marks the module `completed`.
    OutputSaved {
        /// The producing module.
        module: ModuleId,
        /// The produced record.
        output: ModuleOutput,
    },
    /// Replaces the module's status.
    StatusChanged {
        /// The module.
        module: ModuleId,
        /// The new status.
        status: ModuleStatus,
    },
    /// Replaces the module's logs.
    LogsSaved {
        /// The module.
        module: ModuleId,
        /// The new log pair.
        logs: LogPair,
    },
}

impl StateUpdate {
    /// Returns the module the update targets.
    #[must_use]
    pub const fn module(&self) -> ModuleId {
        match self {
            Self::OutputSaved { module, .. }
            | Self::StatusChanged { module, .. }
            | Self::LogsSaved { module, .. } => *module,
        }
    }

    /// Event name emitted for this update.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::OutputSaved { .. } => "module.output_saved",
            Self::StatusChanged { .. } => "module.status_changed",
            Self::LogsSaved { .. } => "module.logs_saved",
        }
    }

    /// Event payload describing the update without copying output bodies.
    #[must_use]
    pub fn event_data(&self) -> serde_json::Value {
        match self {
            Self::OutputSaved { module, output } => serde_json::json!({
                "module": module.as_str(),
                "fields": output.len(),
                "status": ModuleStatus::Completed.as_str(),
            }),
            Self::StatusChanged { module, status } => serde_json::json!({
                "module": module.as_str(),
                "status": status.as_str(),
            }),
            Self::LogsSaved { module, logs } => serde_json::json!({
                "module": module.as_str(),
                "standard_len": logs.standard.len(),
                "verbose_len": logs.verbose.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_module_and_event_type() {
        let update = StateUpdate::StatusChanged {
            module: ModuleId::Module3,
            status: ModuleStatus::Failed,
        };
        assert_eq!(update.module(), ModuleId::Module3);
        assert_eq!(update.event_type(), "module.status_changed");
        assert_eq!(
            update.event_data(),
            serde_json::json!({"module": "module3", "status": "failed"})
        );
    }

    #[test]
    fn test_output_saved_event_reports_completion() {
        let update = StateUpdate::OutputSaved {
            module: ModuleId::Module1,
            output: ModuleOutput::new().with("goal", serde_json::json!("x")),
        };
        let data = update.event_data();
        assert_eq!(data["status"], "completed");
        assert_eq!(data["fields"], 1);
    }
}
