//! Session pipeline state.
//!
//! This module provides:
//! - The output store, status tracker and log store in [`PipelineState`]
//! - Tagged [`StateUpdate`]s through which every write flows
//! - The [`Sequencer`] resolving predecessor and successor modules

mod pipeline;
mod sequencer;
#[cfg(test)]
mod state_tests;
mod update;

pub use pipeline::PipelineState;
pub use sequencer::Sequencer;
pub use update::StateUpdate;
