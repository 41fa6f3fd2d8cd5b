//! Configuration and constants for the library and CLI.

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Label used for expenses without a linked category
pub const UNCATEGORIZED_LABEL: &str = "Sin Categoría";

/// One indentation step in flattened location names (two non-breaking spaces)
pub const INDENT_UNIT: &str = "\u{a0}\u{a0}";

/// Marker placed before every non-root location name
pub const CHILD_MARKER: &str = "↳ ";

// Field names for record parsing (exports from different backends nest rows differently)
pub const LOCATION_LIST_FIELDS: &[&str] = &["locations", "data", "rows", "items"];
pub const TRIP_LIST_FIELDS: &[&str] = &["trips", "data", "rows"];
pub const EXPENSE_LIST_FIELDS: &[&str] = &["expenses", "expense_items"];
pub const CATEGORY_FIELDS: &[&str] = &["category", "categories", "expense_categories"];

/// How forgiving the boundary parser and the flattener are with bad data.
///
/// The default is lenient: orphaned locations are dropped, unparseable
/// amounts count as zero and malformed rows are skipped. Cycles and
/// duplicate ids are rejected regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Fail when a location references a parent that is not in the input
    #[serde(default)]
    pub reject_orphans: bool,

    /// Fail when an expense amount cannot be parsed as a number
    #[serde(default)]
    pub reject_invalid_amounts: bool,

    /// Fail on rows missing required fields or carrying unreadable trip dates
    #[serde(default)]
    pub reject_malformed_records: bool,
}

impl ValidationPolicy {
    /// Everything rejected
    pub fn strict() -> Self {
        Self {
            reject_orphans: true,
            reject_invalid_amounts: true,
            reject_malformed_records: true,
        }
    }

    pub fn is_lenient(&self) -> bool {
        !self.reject_orphans && !self.reject_invalid_amounts && !self.reject_malformed_records
    }
}

/// Load a validation policy from a TOML file
///
/// # Example
/// ```ignore
/// // policy.toml
/// // reject_orphans = true
/// let policy = load_policy("policy.toml")?;
/// ```
pub fn load_policy(path: impl AsRef<Path>) -> Result<ValidationPolicy, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let policy: ValidationPolicy = toml::from_str(&contents)?;
    Ok(policy)
}
