use crate::utils::config::ValidationPolicy;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Arguments for the flatten command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FlattenArgs {
    /// JSON export of location rows
    pub input: PathBuf,

    /// Output path for the flattened JSON document (optional)
    pub output: Option<PathBuf>,

    /// How to treat orphans and malformed rows
    pub policy: ValidationPolicy,

    /// Print the indented tree to stdout
    pub print_tree: bool,
}

impl Default for FlattenArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("locations.json"),
            output: Some(PathBuf::from("artifacts/locations.json")),
            policy: ValidationPolicy::default(),
            print_tree: false,
        }
    }
}

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// JSON export of the report (trips with expenses)
    pub input: PathBuf,

    /// Output path for the summary JSON document (optional)
    pub output: Option<PathBuf>,

    /// How to treat unparseable amounts and malformed rows
    pub policy: ValidationPolicy,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of categories in the printed share chart
    pub top_categories: usize,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("report.json"),
            output: Some(PathBuf::from("artifacts/summary.json")),
            policy: ValidationPolicy::default(),
            print_summary: false,
            top_categories: 10,
        }
    }
}

/// Arguments for the trips command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TripsArgs {
    /// JSON export of the report (trips with dates)
    pub input: PathBuf,

    /// Reference day for status derivation
    pub today: NaiveDate,

    /// How to treat unreadable dates and malformed rows
    pub policy: ValidationPolicy,
}

impl Default for TripsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("report.json"),
            today: chrono::Local::now().date_naive(),
            policy: ValidationPolicy::default(),
        }
    }
}
