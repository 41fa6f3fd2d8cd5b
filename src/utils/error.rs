//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while turning raw JSON into typed records
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field '{field}' in record {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid trip dates for '{trip}': {source}")]
    InvalidDates {
        trip: String,
        #[source]
        source: DateRangeError,
    },
}

/// Errors that can occur while flattening a location hierarchy
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Duplicate location id: {0}")]
    DuplicateId(String),

    #[error("Cycle detected in parent references: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    #[error("Location {id} references missing parent {parent_id}")]
    Orphan { id: String, parent_id: String },
}

/// Errors that can occur while parsing a date interval literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Date range is empty")]
    Empty,

    #[error("Date range has no {0} bound")]
    Unbounded(&'static str),

    #[error("Malformed date range literal: {0}")]
    Malformed(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Date range starts on {start} but ends on {end}")]
    Inverted {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
