//! JSON and text file handling for the dashboard.
//!
//! Downloads are returned as [`Download`] payloads for the presentation
//! layer to serve; uploads are parsed into [`ModuleOutput`](crate::core::ModuleOutput)s.

mod download;
mod upload;

pub use download::{
    create_file_name, create_file_name_at, download_json, download_text, format_json_for_display,
    Download, JSON_MIME, TEXT_MIME,
};
pub use upload::{read_json_file, upload_json};
