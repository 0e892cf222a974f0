//! Parsing of uploaded JSON files.

use crate::core::ModuleOutput;
use crate::errors::{AgentoError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Parses uploaded bytes into a module output.
///
/// Rejected uploads change nothing; the error's
/// [`user_message`](AgentoError::user_message) is meant for display.
///
/// # Errors
///
/// Returns `InvalidUtf8` for non UTF-8 bytes and `InvalidJson` for malformed
/// JSON or JSON that is not an object.
pub fn upload_json(bytes: &[u8]) -> Result<ModuleOutput> {
    let result = parse_upload(bytes);
    match &result {
        Ok(output) => info!(fields = output.len(), "upload accepted"),
        Err(err) => warn!(error = %err, "upload rejected"),
    }
    result
}

fn parse_upload(bytes: &[u8]) -> Result<ModuleOutput> {
    let text = std::str::from_utf8(bytes).map_err(|e| AgentoError::InvalidUtf8(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| AgentoError::InvalidJson(e.to_string()))?;
    ModuleOutput::try_from(value)
}

/// Reads and parses a JSON file from disk.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise as [`upload_json`].
pub fn read_json_file(path: &Path) -> Result<ModuleOutput> {
    let bytes = fs::read(path)?;
    upload_json(&bytes)
}
