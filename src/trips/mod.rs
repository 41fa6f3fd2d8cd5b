//! Trip dates and status.
//!
//! This module handles:
//! - Parsing and formatting the interval literal stored for a trip's dates
//! - Deriving whether a trip is planned, in progress or completed

pub mod date_range;
pub mod status;

// Re-export main types and functions
pub use date_range::{parse_date_range, DateRange};
pub use status::{trip_status, TripStatus};
