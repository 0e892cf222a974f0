//! Dashboard view model.
//!
//! The presentation layer reads everything it shows from a [`Dashboard`]
//! built from a session; rendering widgets is its own business. `Display`
//! gives a plain-text rendering for terminals.

use crate::core::{ModuleId, ModuleStatus};
use crate::session::Session;
use serde::Serialize;
use std::fmt;

/// Warning shown while no API key is configured.
pub const API_KEY_WARNING: &str =
    "⚠️ Please configure your OpenAI API key in the API Configuration page to begin.";

/// One module tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleTile {
    /// The module.
    pub module: ModuleId,
    /// Title such as `"Module 1"`.
    pub title: String,
    /// What the module does.
    pub description: &'static str,
    /// Current status.
    pub status: ModuleStatus,
    /// Status glyph.
    pub glyph: &'static str,
}

/// Summary of one session's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Number of modules in the pipeline.
    pub total_modules: usize,
    /// Number of modules `completed`.
    pub completed: usize,
    /// Whether an API key is configured.
    pub api_key_set: bool,
    /// Tiles in pipeline order.
    pub tiles: Vec<ModuleTile>,
}

impl Dashboard {
    /// Builds the dashboard for `session`.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let state = session.state();
        let tiles = state
            .statuses()
            .map(|(module, status)| ModuleTile {
                module,
                title: module.title(),
                description: module.description(),
                status,
                glyph: status.glyph(),
            })
            .collect();

        Self {
            total_modules: ModuleId::COUNT,
            completed: state.completed_count(),
            api_key_set: session.has_api_key(),
            tiles,
        }
    }

    /// Completion as `"<completed>/<total>"`.
    #[must_use]
    pub fn progress(&self) -> String {
        format!("{}/{}", self.completed, self.total_modules)
    }

    /// API key tile text.
    #[must_use]
    pub const fn api_key_status(&self) -> &'static str {
        if self.api_key_set {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
    }

    /// Warning to show, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<&'static str> {
        if self.api_key_set {
            None
        } else {
            Some(API_KEY_WARNING)
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agento - Multi-Agent Planning System")?;
        writeln!(f, "Total Modules: {}", self.total_modules)?;
        writeln!(f, "Completed: {}", self.progress())?;
        writeln!(f, "API Key Status: {}", self.api_key_status())?;
        writeln!(f)?;
        for tile in &self.tiles {
            writeln!(
                f,
                "{} {:<9} {:<24} {}",
                tile.glyph, tile.title, tile.description, tile.status
            )?;
        }
        if let Some(warning) = self.warning() {
            writeln!(f)?;
            writeln!(f, "{warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentoConfig;
    use crate::core::ModuleOutput;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_dashboard() {
        let session = Session::new(&AgentoConfig::default());
        let dashboard = Dashboard::from_session(&session);

        assert_eq!(dashboard.total_modules, 6);
        assert_eq!(dashboard.progress(), "0/6");
        assert_eq!(dashboard.api_key_status(), "❌ Not Set");
        assert_eq!(dashboard.warning(), Some(API_KEY_WARNING));
        assert_eq!(dashboard.tiles.len(), 6);
        assert!(dashboard.tiles.iter().all(|t| t.status == ModuleStatus::NotStarted));
        assert_eq!(dashboard.tiles[3].description, "Revision Identification");
    }

    #[test]
    fn test_dashboard_tracks_session() {
        let mut session = Session::new(&AgentoConfig::new().with_api_key("sk-1"));
        session.save_output(ModuleId::Module1, ModuleOutput::new());
        session.set_status(ModuleId::Module2, ModuleStatus::InProgress);

        let dashboard = Dashboard::from_session(&session);

        assert_eq!(dashboard.progress(), "1/6");
        assert!(dashboard.warning().is_none());
        assert_eq!(dashboard.tiles[0].glyph, "✅");
        assert_eq!(dashboard.tiles[1].glyph, "🔄");
        assert_eq!(dashboard.tiles[2].glyph, "⭕");
    }

    #[test]
    fn test_dashboard_display() {
        let session = Session::new(&AgentoConfig::default());
        let text = Dashboard::from_session(&session).to_string();

        assert!(text.contains("Completed: 0/6"));
        assert!(text.contains("Module 6"));
        assert!(text.contains("Report Generation"));
        assert!(text.trim_end().ends_with(API_KEY_WARNING));
    }

    #[test]
    fn test_dashboard_serializes() {
        let session = Session::new(&AgentoConfig::default());
        let value = serde_json::to_value(Dashboard::from_session(&session)).unwrap();
        assert_eq!(value["tiles"][0]["module"], "module1");
        assert_eq!(value["tiles"][0]["status"], "not_started");
    }
}
