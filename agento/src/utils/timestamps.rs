//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// Represents a timestamp that can be serialized/deserialized.
pub type Timestamp = DateTime<Utc>;

/// Format used in generated file names: `YYYY-MM-DD_HH-MM-SS`.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Returns the current UTC timestamp.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Returns the current UTC time as an ISO 8601 string with microseconds,
/// e.g. `2026-10-19T08:15:00.123456+00:00`.
#[must_use]
pub fn iso_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
}

/// Renders `ts` in [`FILE_STAMP_FORMAT`].
#[must_use]
pub fn file_stamp(ts: &Timestamp) -> String {
    ts.format(FILE_STAMP_FORMAT).to_string()
}
