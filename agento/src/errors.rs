//! Error types for the agento session core.
//!
//! The taxonomy is deliberately small: parse failures for module and status
//! names, rejected uploads, forwarding misuse, stage failures and I/O.

use crate::core::ModuleId;
use std::collections::HashMap;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AgentoError>;

/// The main error type for agento operations.
#[derive(Debug, Error)]
pub enum AgentoError {
    /// A module name outside `module1..module6`.
    #[error("Unknown module: '{0}'")]
    UnknownModule(String),

    /// A status name outside the lifecycle enumeration.
    #[error("Unknown module status: '{0}'")]
    UnknownStatus(String),

    /// Uploaded content is not a usable JSON object.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Uploaded content is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Forwarding was requested for a module with no stored output.
    #[error("Module '{0}' has no output to forward")]
    MissingOutput(ModuleId),

    /// Forwarding was requested for the last module.
    #[error("Module '{0}' is the last stage and has no successor")]
    NoSuccessor(ModuleId),

    /// A stage returned an error.
    #[error("Stage '{module}' failed: {reason}")]
    StageFailed {
        /// The failing module.
        module: ModuleId,
        /// What went wrong.
        reason: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentoError {
    /// Creates a stage failure.
    #[must_use]
    pub fn stage_failed(module: ModuleId, reason: impl Into<String>) -> Self {
        Self::StageFailed {
            module,
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used in events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownModule(_) => "unknown_module",
            Self::UnknownStatus(_) => "unknown_status",
            Self::InvalidJson(_) => "invalid_json",
            Self::InvalidUtf8(_) => "invalid_utf8",
            Self::MissingOutput(_) => "missing_output",
            Self::NoSuccessor(_) => "no_successor",
            Self::StageFailed { .. } => "stage_failed",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }

    /// Message suitable for showing to the user of the dashboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidJson(detail) => format!("❌ Invalid JSON file: {detail}"),
            Self::InvalidUtf8(detail) => format!("❌ Error reading file: {detail}"),
            Self::Io(err) => format!("❌ Error reading file: {err}"),
            other => format!("❌ {other}"),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!(self.kind()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));

        match self {
            Self::MissingOutput(module) | Self::NoSuccessor(module) => {
                map.insert("module".to_string(), serde_json::json!(module.as_str()));
            }
            Self::StageFailed { module, reason } => {
                map.insert("module".to_string(), serde_json::json!(module.as_str()));
                map.insert("reason".to_string(), serde_json::json!(reason));
            }
            _ => {}
        }

        map
    }
}
