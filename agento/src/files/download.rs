//! Download payloads for module outputs and logs.

use crate::errors::Result;
use crate::utils::{file_stamp, now_utc, Timestamp};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// MIME type of JSON downloads.
pub const JSON_MIME: &str = "application/json";
/// MIME type of text downloads.
pub const TEXT_MIME: &str = "text/plain";

/// A file the presentation layer offers for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Button label.
    pub label: String,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub mime: &'static str,
    /// File contents.
    pub body: String,
}

impl Download {
    /// Writes the body to `dir/file_name` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body)?;
        debug!(path = %path.display(), bytes = self.body.len(), "download written");
        Ok(path)
    }
}

fn default_label(file_name: &str) -> String {
    format!("📥 Download {file_name}")
}

/// Pretty-prints JSON with two-space indentation, keeping non-ASCII text.
///
/// # Errors
///
/// Returns `Serialization` if `data` cannot be represented as JSON.
pub fn format_json_for_display<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Builds a JSON download of `data`.
///
/// # Errors
///
/// Returns `Serialization` if `data` cannot be represented as JSON.
pub fn download_json<T: Serialize + ?Sized>(data: &T, file_name: &str) -> Result<Download> {
    Ok(Download {
        label: default_label(file_name),
        file_name: file_name.to_string(),
        mime: JSON_MIME,
        body: format_json_for_display(data)?,
    })
}

/// Builds a plain-text download, labelled `label` or the default label.
#[must_use]
pub fn download_text(content: &str, file_name: &str, label: Option<&str>) -> Download {
    Download {
        label: label.map_or_else(|| default_label(file_name), str::to_string),
        file_name: file_name.to_string(),
        mime: TEXT_MIME,
        body: content.to_string(),
    }
}

/// Returns `<base>_<YYYY-MM-DD_HH-MM-SS>.<extension>` for the current time.
#[must_use]
pub fn create_file_name(base_name: &str, extension: &str) -> String {
    create_file_name_at(base_name, extension, &now_utc())
}

/// Like [`create_file_name`] with an explicit timestamp.
#[must_use]
pub fn create_file_name_at(base_name: &str, extension: &str, at: &Timestamp) -> String {
    format!("{base_name}_{}.{extension}", file_stamp(at))
}
