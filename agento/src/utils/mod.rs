//! Utility functions.

mod timestamps;

pub use timestamps::{file_stamp, iso_timestamp, now_utc, Timestamp, FILE_STAMP_FORMAT};
