//! Module lifecycle status.

use crate::errors::AgentoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyph shown for a status string that is not a known variant.
pub const UNKNOWN_STATUS_GLYPH: &str = "❓";

/// The lifecycle state of a pipeline module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Module has not been run in this session.
    #[default]
    NotStarted,
    /// Module is currently running.
    InProgress,
    /// Module produced an output.
    Completed,
    /// Module run failed.
    Failed,
}

impl ModuleStatus {
    /// Every status variant.
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Failed,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Returns the dashboard glyph for this status.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::NotStarted => "⭕",
            Self::InProgress => "🔄",
            Self::Completed => "✅",
            Self::Failed => "❌",
        }
    }

    /// Glyph for arbitrary status text, falling back to [`UNKNOWN_STATUS_GLYPH`].
    #[must_use]
    pub fn glyph_for(text: &str) -> &'static str {
        text.parse::<Self>()
            .map_or(UNKNOWN_STATUS_GLYPH, |status| status.glyph())
    }

    /// Returns true once the module has finished, successfully or not.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleStatus {
    type Err = AgentoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AgentoError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_status_default() {
        assert_eq!(ModuleStatus::default(), ModuleStatus::NotStarted);
    }

    #[test]
    fn test_module_status_display() {
        assert_eq!(ModuleStatus::NotStarted.to_string(), "not_started");
        assert_eq!(ModuleStatus::InProgress.to_string(), "in_progress");
        assert_eq!(ModuleStatus::Completed.to_string(), "completed");
        assert_eq!(ModuleStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_module_status_parse() {
        assert_eq!("completed".parse::<ModuleStatus>().unwrap(), ModuleStatus::Completed);
        assert!(matches!(
            "bogus".parse::<ModuleStatus>(),
            Err(AgentoError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_module_status_glyphs() {
        assert_eq!(ModuleStatus::Completed.glyph(), "✅");
        assert_eq!(ModuleStatus::glyph_for("in_progress"), "🔄");
        assert_eq!(ModuleStatus::glyph_for("exploded"), UNKNOWN_STATUS_GLYPH);
    }

    #[test]
    fn test_module_status_is_terminal() {
        assert!(ModuleStatus::Completed.is_terminal());
        assert!(ModuleStatus::Failed.is_terminal());
        assert!(!ModuleStatus::NotStarted.is_terminal());
        assert!(!ModuleStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_module_status_serialize() {
        let json = serde_json::to_string(&ModuleStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);

        let deserialized: ModuleStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ModuleStatus::InProgress);
    }
}
