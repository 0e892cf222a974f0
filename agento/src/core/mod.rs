//! Core domain model types for agento.
//!
//! This module contains the fundamental types used throughout the crate:
//! - Module identifiers and lifecycle status
//! - The opaque module output record
//! - Per-module log pairs

mod logs;
mod module_id;
mod output;
mod status;

pub use logs::LogPair;
pub use module_id::ModuleId;
pub use output::ModuleOutput;
pub use status::{ModuleStatus, UNKNOWN_STATUS_GLYPH};
