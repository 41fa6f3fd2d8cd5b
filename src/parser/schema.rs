//! Typed record shapes and output document definitions.
//!
//! Input records are produced by the boundary parser from loosely-typed JSON.
//! Output documents are what we write to disk; they carry a schema version
//! to allow future evolution.

use crate::aggregator::ReportSummary;
use crate::trips::{trip_status, DateRange, TripStatus};
use crate::utils::config::{SCHEMA_VERSION, UNCATEGORIZED_LABEL};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A storage location as exported from the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,

    pub name: String,

    /// Absent for roots
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Remaining columns of the source row, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationRecord {
    /// Create a record with no extra columns
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
            extra: Map::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A location placed in display order with its depth and indented name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedLocation {
    pub id: String,

    /// Indentation prefix + child marker + original name
    pub name: String,

    /// Name as it appeared in the source record
    pub original_name: String,

    #[serde(default)]
    pub parent_id: Option<String>,

    /// Depth from the nearest root (root = 0)
    pub level: usize,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Expense category as linked from an expense row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A single expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Coerced amount (unparseable input counts as 0)
    pub amount: Decimal,

    /// Paid personally and pending reimbursement
    pub is_reimbursable: bool,

    #[serde(default)]
    pub receipt_url: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,
}

impl Expense {
    /// Category name, or the placeholder label when missing or blank
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    pub fn has_receipt(&self) -> bool {
        self.receipt_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// A trip with its expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub dates: Option<DateRange>,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Trip {
    /// Status relative to `today`, if the trip has dates
    pub fn status(&self, today: chrono::NaiveDate) -> Option<TripStatus> {
        self.dates.as_ref().map(|range| trip_status(range, today))
    }
}

/// An expense report: an ordered list of trips
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub trips: Vec<Trip>,
}

/// Flattened locations as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the document was generated
    pub generated_at: String,

    pub locations: Vec<FlattenedLocation>,
}

/// Report summary as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the document was generated
    pub generated_at: String,

    /// Number of trips the summary was built from
    pub trip_count: usize,

    pub report: ReportSummary,
}

impl LocationsDocument {
    /// Wrap flattened locations with the current schema version and timestamp
    pub fn new(locations: Vec<FlattenedLocation>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            locations,
        }
    }
}

impl SummaryDocument {
    /// Wrap a report summary with the current schema version and timestamp
    pub fn new(report: &Report, summary: ReportSummary) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            trip_count: report.trips.len(),
            report: summary,
        }
    }
}
