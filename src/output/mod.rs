//! Output writers for derived documents.
//!
//! This module handles:
//! - JSON documents (flattened locations, report summaries)
//! - Text renderings for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_json, read_locations, read_summary, write_json};
pub use text::{render_location_tree, render_report_summary, render_trip_statuses};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
