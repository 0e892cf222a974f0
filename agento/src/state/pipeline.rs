//! Per-session pipeline state: outputs, statuses and logs.

use super::{Sequencer, StateUpdate};
use crate::core::{LogPair, ModuleId, ModuleOutput, ModuleStatus};
use crate::errors::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Outputs, statuses and logs for every module of one session.
///
/// Modules without an explicit status read as `not_started`, and modules
/// without logs read as an empty [`LogPair`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    outputs: BTreeMap<ModuleId, ModuleOutput>,
    statuses: BTreeMap<ModuleId, ModuleStatus>,
    logs: BTreeMap<ModuleId, LogPair>,
}

impl PipelineState {
    /// Creates a state with every module at its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tagged update.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::OutputSaved { module, output } => {
                self.outputs.insert(module, output);
                self.statuses.insert(module, ModuleStatus::Completed);
            }
            StateUpdate::StatusChanged { module, status } => {
                self.statuses.insert(module, status);
            }
            StateUpdate::LogsSaved { module, logs } => {
                self.logs.insert(module, logs);
            }
        }
    }

    // Output store

    /// Stores `output` for `module`, overwriting any prior value, and marks
    /// the module `completed`.
    pub fn save_output(&mut self, module: ModuleId, output: ModuleOutput) {
        self.apply(StateUpdate::OutputSaved { module, output });
    }

    /// Returns the stored output, if any.
    #[must_use]
    pub fn get_output(&self, module: ModuleId) -> Option<&ModuleOutput> {
        self.outputs.get(&module)
    }

    // Status tracker

    /// Sets the status of `module`.
    pub fn set_status(&mut self, module: ModuleId, status: ModuleStatus) {
        self.apply(StateUpdate::StatusChanged { module, status });
    }

    /// Sets the status from its wire name.
    ///
    /// Text outside the status enumeration is ignored and leaves the current
    /// status untouched. Returns whether the status was applied.
    pub fn set_status_str(&mut self, module: ModuleId, status: &str) -> bool {
        let Some(status) = Self::parse_status(module, status) else {
            return false;
        };
        self.set_status(module, status);
        true
    }

    /// Parses status text from the presentation layer, logging and
    /// discarding anything outside the status enumeration.
    pub(crate) fn parse_status(module: ModuleId, status: &str) -> Option<ModuleStatus> {
        let parsed = status.parse::<ModuleStatus>().ok();
        if parsed.is_none() {
            debug!(module = %module, status, "ignoring unknown module status");
        }
        parsed
    }

    /// Returns the status of `module`, `not_started` if never set.
    #[must_use]
    pub fn get_status(&self, module: ModuleId) -> ModuleStatus {
        self.statuses.get(&module).copied().unwrap_or_default()
    }

    /// Returns `(module, status)` for every module in pipeline order.
    pub fn statuses(&self) -> impl Iterator<Item = (ModuleId, ModuleStatus)> + '_ {
        ModuleId::ALL
            .into_iter()
            .map(|module| (module, self.get_status(module)))
    }

    /// Counts modules currently `completed`.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.statuses()
            .filter(|(_, status)| *status == ModuleStatus::Completed)
            .count()
    }

    // Log store

    /// Replaces the logs of `module`.
    pub fn save_logs(
        &mut self,
        module: ModuleId,
        standard: impl Into<String>,
        verbose: impl Into<String>,
    ) {
        self.apply(StateUpdate::LogsSaved {
            module,
            logs: LogPair::new(standard, verbose),
        });
    }

    /// Returns the logs of `module`, or two empty strings if none were saved.
    #[must_use]
    pub fn get_logs(&self, module: ModuleId) -> LogPair {
        self.logs.get(&module).cloned().unwrap_or_default()
    }

    // Sequencing

    /// Returns the output stored for the module before `module`.
    ///
    /// `None` for the first module or when the predecessor has no output.
    /// The predecessor's status is not checked.
    #[must_use]
    pub fn previous_output(&self, module: ModuleId) -> Option<&ModuleOutput> {
        Sequencer::predecessor(module).and_then(|prev| self.get_output(prev))
    }

    /// Name-based form of [`previous_output`](Self::previous_output).
    ///
    /// # Errors
    ///
    /// Returns `UnknownModule` if `name` is not a module id. The first module
    /// yields `Ok(None)`.
    pub fn previous_output_by_name(&self, name: &str) -> Result<Option<&ModuleOutput>> {
        let module = name.parse::<ModuleId>()?;
        Ok(self.previous_output(module))
    }
}
