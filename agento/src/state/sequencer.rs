//! Fixed linear ordering of the pipeline modules.

use crate::core::ModuleId;

/// Resolves neighbours in the fixed `module1 .. module6` sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer;

impl Sequencer {
    /// The pipeline order.
    pub const ORDER: [ModuleId; ModuleId::COUNT] = ModuleId::ALL;

    /// The first module in the pipeline.
    #[must_use]
    pub const fn first() -> ModuleId {
        Self::ORDER[0]
    }

    /// The last module in the pipeline.
    #[must_use]
    pub const fn last() -> ModuleId {
        Self::ORDER[ModuleId::COUNT - 1]
    }

    /// Returns the module before `module`, `None` for the first.
    #[must_use]
    pub fn predecessor(module: ModuleId) -> Option<ModuleId> {
        module
            .index()
            .checked_sub(1)
            .and_then(ModuleId::from_index)
    }

    /// Returns the module after `module`, `None` for the last.
    #[must_use]
    pub fn successor(module: ModuleId) -> Option<ModuleId> {
        ModuleId::from_index(module.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(Sequencer::first(), ModuleId::Module1);
        assert_eq!(Sequencer::last(), ModuleId::Module6);
    }

    #[test]
    fn test_predecessor() {
        assert_eq!(Sequencer::predecessor(ModuleId::Module1), None);
        assert_eq!(Sequencer::predecessor(ModuleId::Module2), Some(ModuleId::Module1));
        assert_eq!(Sequencer::predecessor(ModuleId::Module6), Some(ModuleId::Module5));
    }

    #[test]
    fn test_successor() {
        assert_eq!(Sequencer::successor(ModuleId::Module1), Some(ModuleId::Module2));
        assert_eq!(Sequencer::successor(ModuleId::Module6), None);
    }

    #[test]
    fn test_neighbours_are_inverse() {
        for module in Sequencer::ORDER {
            if let Some(next) = Sequencer::successor(module) {
                assert_eq!(Sequencer::predecessor(next), Some(module));
            }
        }
    }
}
