//! The per-session context object.

use crate::config::{AgentoConfig, ApiKey};
use crate::core::{LogPair, ModuleId, ModuleOutput, ModuleStatus};
use crate::errors::{AgentoError, Result};
use crate::events::{EventSink, NoOpEventSink};
use crate::state::{PipelineState, Sequencer, StateUpdate};
use crate::utils::{now_utc, Timestamp};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything one user session owns.
///
/// A `Session` is passed explicitly to whatever drives the pipeline; there
/// is no ambient session. All state writes are reported to the session's
/// [`EventSink`].
pub struct Session {
    id: Uuid,
    created_at: Timestamp,
    api_key: Option<ApiKey>,
    pipeline_config: Map<String, Value>,
    state: PipelineState,
    pending_inputs: BTreeMap<ModuleId, ModuleOutput>,
    event_sink: Arc<dyn EventSink>,
}

impl Session {
    /// Creates a session with default state and the config's API key.
    #[must_use]
    pub fn new(config: &AgentoConfig) -> Self {
        Self::with_id(Uuid::new_v4(), config)
    }

    /// Creates a session with a caller-chosen id.
    #[must_use]
    pub fn with_id(id: Uuid, config: &AgentoConfig) -> Self {
        debug!(session_id = %id, "session created");
        Self {
            id,
            created_at: now_utc(),
            api_key: config.api_key.clone(),
            pipeline_config: Map::new(),
            state: PipelineState::new(),
            pending_inputs: BTreeMap::new(),
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Returns the session id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns when the session was created.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Read access to the pipeline state.
    #[must_use]
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Applies a tagged update and reports it.
    ///
    /// A newly saved output supersedes whatever was forwarded from the same
    /// module earlier, so the successor's pending input is dropped.
    pub fn apply(&mut self, update: StateUpdate) {
        let event_type = update.event_type();
        let data = update.event_data();
        info!(
            session_id = %self.id,
            module = %update.module(),
            event_type,
            "applying state update"
        );
        if let StateUpdate::OutputSaved { module, .. } = &update {
            self.drop_forwarded_input(*module);
        }
        self.state.apply(update);
        self.event_sink.try_emit(event_type, Some(data));
    }

    /// Stores an output and completes the module.
    pub fn save_output(&mut self, module: ModuleId, output: ModuleOutput) {
        self.apply(StateUpdate::OutputSaved { module, output });
    }

    /// Returns the stored output of `module`.
    #[must_use]
    pub fn get_output(&self, module: ModuleId) -> Option<&ModuleOutput> {
        self.state.get_output(module)
    }

    /// Sets the status of `module`.
    pub fn set_status(&mut self, module: ModuleId, status: ModuleStatus) {
        self.apply(StateUpdate::StatusChanged { module, status });
    }

    /// Sets the status from its wire name; unknown names are ignored.
    pub fn set_status_str(&mut self, module: ModuleId, status: &str) -> bool {
        let Some(status) = PipelineState::parse_status(module, status) else {
            return false;
        };
        self.set_status(module, status);
        true
    }

    /// Returns the status of `module`.
    #[must_use]
    pub fn get_status(&self, module: ModuleId) -> ModuleStatus {
        self.state.get_status(module)
    }

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

    /// Returns the logs of `module`.
    #[must_use]
    pub fn get_logs(&self, module: ModuleId) -> LogPair {
        self.state.get_logs(module)
    }

    /// Returns the predecessor's stored output.
    #[must_use]
    pub fn previous_output(&self, module: ModuleId) -> Option<&ModuleOutput> {
        self.state.previous_output(module)
    }

    /// Name-based predecessor lookup.
    ///
    /// # Errors
    ///
    /// Returns `UnknownModule` for a name outside `module1..module6`.
    pub fn previous_output_by_name(&self, name: &str) -> Result<Option<&ModuleOutput>> {
        self.state.previous_output_by_name(name)
    }

    /// Hands `module`'s output to the next module as its pending input.
    ///
    /// # Errors
    ///
    /// Returns `NoSuccessor` for the last module and `MissingOutput` when
    /// `module` has nothing stored.
    pub fn forward_output(&mut self, module: ModuleId) -> Result<ModuleId> {
        let next = Sequencer::successor(module).ok_or(AgentoError::NoSuccessor(module))?;
        let output = self
            .state
            .get_output(module)
            .cloned()
            .ok_or(AgentoError::MissingOutput(module))?;

        self.pending_inputs.insert(next, output);
        info!(session_id = %self.id, from = %module, to = %next, "output forwarded");
        self.event_sink.try_emit(
            "module.output_forwarded",
            Some(serde_json::json!({"from": module.as_str(), "to": next.as_str()})),
        );
        Ok(next)
    }

    fn drop_forwarded_input(&mut self, module: ModuleId) {
        let Some(next) = Sequencer::successor(module) else {
            return;
        };
        if self.pending_inputs.remove(&next).is_some() {
            debug!(session_id = %self.id, module = %next, "stale pending input dropped");
        }
    }

    /// Returns the input explicitly forwarded or uploaded for `module`.
    #[must_use]
    pub fn pending_input(&self, module: ModuleId) -> Option<&ModuleOutput> {
        self.pending_inputs.get(&module)
    }

    /// Sets the input for `module`, e.g. from an uploaded file.
    pub fn set_pending_input(&mut self, module: ModuleId, input: ModuleOutput) {
        self.pending_inputs.insert(module, input);
    }

    /// The input a run of `module` should consume: a pending input if one
    /// was forwarded or uploaded since the predecessor last saved, otherwise
    /// the predecessor's output.
    #[must_use]
    pub fn input_for(&self, module: ModuleId) -> Option<ModuleOutput> {
        self.pending_inputs
            .get(&module)
            .or_else(|| self.state.previous_output(module))
            .cloned()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns true if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sets the API key. Returns false (and clears the key) for blank input.
    pub fn set_api_key(&mut self, key: impl Into<String>) -> bool {
        self.api_key = ApiKey::new(key);
        let set = self.api_key.is_some();
        self.event_sink.try_emit(
            "session.api_key_set",
            Some(serde_json::json!({"present": set})),
        );
        set
    }

    /// Removes the API key.
    pub fn clear_api_key(&mut self) {
        self.api_key = None;
        self.event_sink.try_emit(
            "session.api_key_set",
            Some(serde_json::json!({"present": false})),
        );
    }

    /// Free-form pipeline configuration for this session.
    #[must_use]
    pub const fn pipeline_config(&self) -> &Map<String, Value> {
        &self.pipeline_config
    }

    /// Sets one pipeline configuration entry.
    pub fn set_config_value(&mut self, key: impl Into<String>, value: Value) {
        self.pipeline_config.insert(key.into(), value);
    }

    /// Drops all outputs, statuses, logs and pending inputs.
    pub fn reset(&mut self) {
        self.state = PipelineState::new();
        self.pending_inputs.clear();
        info!(session_id = %self.id, "session state reset");
        self.event_sink.try_emit("session.reset", None);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("api_key", &self.api_key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
