//! Trip status derived from dates.

use super::date_range::DateRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a trip stands relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive a trip's status for `today`
///
/// The first and last day of the range both count as in progress.
pub fn trip_status(range: &DateRange, today: chrono::NaiveDate) -> TripStatus {
    if today < range.start {
        TripStatus::Planned
    } else if today > range.end {
        TripStatus::Completed
    } else {
        TripStatus::InProgress
    }
}
