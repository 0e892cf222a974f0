//! Explicit per-session context.
//!
//! A [`Session`] owns one [`PipelineState`](crate::state::PipelineState)
//! plus the session's API key and configuration. Hosts serving several
//! users keep sessions in a [`SessionRegistry`].

mod context;
mod registry;

pub use context::Session;
pub use registry::{SessionHandle, SessionRegistry};
