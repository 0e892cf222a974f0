//! Standard and verbose log text for a module run.

use serde::{Deserialize, Serialize};

/// Log text recorded for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPair {
    /// Condensed log shown by default.
    pub standard: String,
    /// Full log offered for download.
    pub verbose: String,
}

impl LogPair {
    /// Creates a log pair.
    #[must_use]
    pub fn new(standard: impl Into<String>, verbose: impl Into<String>) -> Self {
        Self {
            standard: standard.into(),
            verbose: verbose.into(),
        }
    }

    /// Returns true if both logs are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.verbose.is_empty()
    }
}
