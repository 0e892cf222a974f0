//! Test fixtures for sessions and stages.

use crate::config::AgentoConfig;
use crate::core::{ModuleId, ModuleOutput, ModuleStatus};
use crate::events::CollectingEventSink;
use crate::session::Session;
use crate::stages::{CriteriaOutput, CriteriaStage};
use std::sync::Arc;
use std::time::Duration;

/// The module 1 record for the goal `"launch product"`.
#[must_use]
pub fn sample_criteria_output() -> ModuleOutput {
    let mut output = ModuleOutput::new();
    let record = CriteriaOutput::placeholder("launch product", 5, 2);
    output.insert("goal", serde_json::json!(record.goal));
    output.insert("success_criteria", serde_json::json!(record.success_criteria));
    output.insert("selected_criteria", serde_json::json!(record.selected_criteria));
    output
}

/// A criteria stage that does not wait.
#[must_use]
pub fn instant_criteria_stage() -> CriteriaStage {
    CriteriaStage::new().with_delay(Duration::ZERO)
}

/// Builds sessions in a prepared state.
#[derive(Debug, Default)]
pub struct TestSession {
    config: AgentoConfig,
    outputs: Vec<(ModuleId, ModuleOutput)>,
    statuses: Vec<(ModuleId, ModuleStatus)>,
}

impl TestSession {
    /// Creates a builder for a default session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives the session an API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(key);
        self
    }

    /// Stores an output for `module`.
    #[must_use]
    pub fn with_output(mut self, module: ModuleId, output: ModuleOutput) -> Self {
        self.outputs.push((module, output));
        self
    }

    /// Sets a status for `module`, applied after outputs.
    #[must_use]
    pub fn with_status(mut self, module: ModuleId, status: ModuleStatus) -> Self {
        self.statuses.push((module, status));
        self
    }

    /// Builds the session with a collecting event sink, cleared of the
    /// set-up events.
    #[must_use]
    pub fn build(self) -> (Session, Arc<CollectingEventSink>) {
        let sink = Arc::new(CollectingEventSink::new());
        let mut session = Session::new(&self.config).with_event_sink(sink.clone());
        for (module, output) in self.outputs {
            session.save_output(module, output);
        }
        for (module, status) in self.statuses {
            session.set_status(module, status);
        }
        sink.clear();
        (session, sink)
    }
}
