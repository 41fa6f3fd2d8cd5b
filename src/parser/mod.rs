//! Record parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON exports into typed records
//! - Coercing amounts, ids and flags
//! - Defining input record and output document shapes

pub mod records;
pub mod schema;

// Re-export main types
pub use records::{coerce_amount, parse_amount, parse_locations, parse_report};
pub use schema::{
    Category, Expense, FlattenedLocation, LocationRecord, LocationsDocument, Report,
    SummaryDocument, Trip,
};
