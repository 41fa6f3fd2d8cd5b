//! Trip date ranges stored as interval literals.
//!
//! The backing column holds a discrete date interval whose canonical text
//! form is lower-inclusive, upper-exclusive:
//!
//! `[2024-03-01,2024-03-06)` means March 1st through March 5th.
//!
//! Internally a range is always kept with both ends inclusive.

use crate::utils::error::DateRangeError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,

    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

/// Unchecked wire form, validated through `DateRange::new`
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range, rejecting one that ends before it starts
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Canonical `[start,end)` literal with an exclusive upper bound
    pub fn to_literal(&self) -> String {
        let upper = self
            .end
            .checked_add_days(Days::new(1))
            .unwrap_or(self.end);
        format!(
            "[{},{})",
            self.start.format(DATE_FORMAT),
            upper.format(DATE_FORMAT)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl std::str::FromStr for DateRange {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_range(s)
    }
}

/// Parse an interval literal into an inclusive range
///
/// **Public** - used by the record parser for trip dates
///
/// Accepts `[a,b)`, `[a,b]`, `(a,b)` and `(a,b]`, optionally wrapped in
/// double quotes, with optional whitespace and quoted bounds.
///
/// # Errors
/// * `DateRangeError::Empty` - the literal `empty`
/// * `DateRangeError::Unbounded` - a missing lower or upper bound
/// * `DateRangeError::Malformed` - brackets or separator missing
/// * `DateRangeError::InvalidDate` - a bound is not an ISO date
/// * `DateRangeError::Inverted` - nothing left after normalizing the bounds
pub fn parse_date_range(literal: &str) -> Result<DateRange, DateRangeError> {
    let trimmed = literal.trim().trim_matches('"').trim();

    if trimmed.eq_ignore_ascii_case("empty") {
        return Err(DateRangeError::Empty);
    }

    let mut chars = trimmed.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return Err(DateRangeError::Malformed(literal.to_string()));
    };

    let lower_inclusive = match open {
        '[' => true,
        '(' => false,
        _ => return Err(DateRangeError::Malformed(literal.to_string())),
    };
    let upper_inclusive = match close {
        ']' => true,
        ')' => false,
        _ => return Err(DateRangeError::Malformed(literal.to_string())),
    };

    let (lower, upper) = chars
        .as_str()
        .split_once(',')
        .ok_or_else(|| DateRangeError::Malformed(literal.to_string()))?;

    let mut start = parse_bound(lower, "lower")?;
    let mut end = parse_bound(upper, "upper")?;

    if !lower_inclusive {
        start = start
            .succ_opt()
            .ok_or_else(|| DateRangeError::InvalidDate(lower.trim().to_string()))?;
    }
    if !upper_inclusive {
        end = end
            .pred_opt()
            .ok_or_else(|| DateRangeError::InvalidDate(upper.trim().to_string()))?;
    }

    DateRange::new(start, end)
}

/// Parse one side of the interval
///
/// **Private** - internal helper for parse_date_range
fn parse_bound(raw: &str, side: &'static str) -> Result<NaiveDate, DateRangeError> {
    let value = raw.trim().trim_matches('"');
    if value.is_empty() || value.eq_ignore_ascii_case("infinity") || value == "-infinity" {
        return Err(DateRangeError::Unbounded(side));
    }

    // Timestamp bounds ("2024-03-01 00:00:00+00") keep only their date part
    let date_part = value.split([' ', 'T']).next().unwrap_or(value);

    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}
