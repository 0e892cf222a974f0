//! Process configuration for agento.
//!
//! Values come from the environment:
//!
//! | Variable                | Meaning                               | Default |
//! |-------------------------|---------------------------------------|---------|
//! | `OPENAI_API_KEY`        | credential for the planning stages    | unset   |
//! | `AGENTO_STAGE_DELAY_MS` | simulated work time of stub stages    | `100`   |
//! | `AGENTO_OUTPUT_DIR`     | directory for stage output files      | `.`     |

use crate::errors::{AgentoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the stub stage delay in milliseconds.
pub const STAGE_DELAY_VAR: &str = "AGENTO_STAGE_DELAY_MS";
/// Environment variable holding the output directory.
pub const OUTPUT_DIR_VAR: &str = "AGENTO_OUTPUT_DIR";

const DEFAULT_STAGE_DELAY_MS: u64 = 100;

/// An opaque API credential. Never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, returning `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Returns the raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Configuration shared by every session of a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentoConfig {
    /// Initial API key given to new sessions.
    pub api_key: Option<ApiKey>,
    /// How long stub stages pretend to work.
    pub stage_delay: Duration,
    /// Where stage output files are written.
    pub output_dir: PathBuf,
}

impl Default for AgentoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            stage_delay: Duration::from_millis(DEFAULT_STAGE_DELAY_MS),
            output_dir: PathBuf::from("."),
        }
    }
}

impl AgentoConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api_key: lookup(API_KEY_VAR).and_then(ApiKey::new),
            ..Self::default()
        };

        if let Some(raw) = lookup(STAGE_DELAY_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                AgentoError::Config(format!(
                    "{STAGE_DELAY_VAR}='{raw}' is not a millisecond count: {e}"
                ))
            })?;
            config.stage_delay = Duration::from_millis(millis);
        }

        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    /// Sets the stub stage delay.
    #[must_use]
    pub const fn with_stage_delay(mut self, delay: Duration) -> Self {
        self.stage_delay = delay;
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
