//! Pipeline module identifiers.

use crate::errors::AgentoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed pipeline stages.
///
/// Variants are declared in pipeline order, so the derived `Ord` matches
/// the position of each module in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleId {
    /// Criteria generation.
    #[serde(rename = "module1")]
    Module1,
    /// Plan generation.
    #[serde(rename = "module2")]
    Module2,
    /// Plan expansion.
    #[serde(rename = "module3")]
    Module3,
    /// Revision identification.
    #[serde(rename = "module4")]
    Module4,
    /// Revision implementation.
    #[serde(rename = "module5")]
    Module5,
    /// Report generation.
    #[serde(rename = "module6")]
    Module6,
}

impl ModuleId {
    /// Every module, in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Module1,
        Self::Module2,
        Self::Module3,
        Self::Module4,
        Self::Module5,
        Self::Module6,
    ];

    /// Number of modules in the pipeline.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the wire name (`"module1"` .. `"module6"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Module1 => "module1",
            Self::Module2 => "module2",
            Self::Module3 => "module3",
            Self::Module4 => "module4",
            Self::Module5 => "module5",
            Self::Module6 => "module6",
        }
    }

    /// Returns the 1-based pipeline position.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index() + 1
    }

    /// Returns the 0-based pipeline position.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Module1 => 0,
            Self::Module2 => 1,
            Self::Module3 => 2,
            Self::Module4 => 3,
            Self::Module5 => 4,
            Self::Module6 => 5,
        }
    }

    /// Looks up a module by its 0-based position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short human title, e.g. `"Module 1"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Module {}", self.number())
    }

    /// What the stage does.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Module1 => "Criteria Generation",
            Self::Module2 => "Plan Generation",
            Self::Module3 => "Plan Expansion",
            Self::Module4 => "Revision Identification",
            Self::Module5 => "Revision Implementation",
            Self::Module6 => "Report Generation",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = AgentoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AgentoError::UnknownModule(s.to_string()))
    }
}
