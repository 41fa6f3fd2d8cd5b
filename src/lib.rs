//! Hearth
//!
//! Data-shaping utilities for household records:
//! - flattening a location hierarchy into an indented display list
//! - summarizing travel expense reports by category and payer
//! - reading trip date ranges and deriving trip status
//!
//! This crate provides the core implementation for the `hearth` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install hearth
//! hearth --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod hierarchy;
pub mod output;
pub mod parser;
pub mod trips;
pub mod utils;
