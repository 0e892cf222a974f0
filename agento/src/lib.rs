//! # Agento
//!
//! Session core for the Agento multi-stage planning pipeline.
//!
//! Agento turns a goal into a refined plan through six modules, run in a
//! fixed order. This crate holds what a front-end needs around them:
//!
//! - **Session state**: per-module outputs, statuses and logs
//! - **Sequencing**: each module reads its predecessor's output
//! - **Stages**: the stage trait, a placeholder module 1 and a runner
//! - **Files**: JSON/text downloads and JSON uploads
//! - **Dashboard**: the view model a UI renders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agento::prelude::*;
//!
//! let mut session = Session::new(&AgentoConfig::from_env()?);
//! StageRunner::run(&mut session, &CriteriaStage::new(), Some(StageInput::goal("launch product"))).await?;
//!
//! assert_eq!(session.get_status(ModuleId::Module1), ModuleStatus::Completed);
//! let input_for_module2 = session.previous_output(ModuleId::Module2);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod files;
pub mod observability;
pub mod session;
pub mod stages;
pub mod state;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{AgentoConfig, ApiKey};
    pub use crate::core::{LogPair, ModuleId, ModuleOutput, ModuleStatus};
    pub use crate::dashboard::{Dashboard, ModuleTile};
    pub use crate::errors::{AgentoError, Result};
    pub use crate::events::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::files::{download_json, download_text, upload_json, Download};
    pub use crate::session::{Session, SessionHandle, SessionRegistry};
    pub use crate::stages::{
        run_module_1, CriteriaOutput, CriteriaStage, Stage, StageInput, StageReport, StageRunner,
    };
    pub use crate::state::{PipelineState, Sequencer, StateUpdate};
}
