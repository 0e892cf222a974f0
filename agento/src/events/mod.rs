//! Event sinks for session observability.
//!
//! Every [`Session`](crate::session::Session) owns a sink and reports each
//! state write through it. There is no process-wide sink.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
