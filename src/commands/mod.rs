//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod flatten;
pub mod models;
pub mod summarize;
pub mod trips;
pub mod utils;

// Re-export main command functions
pub use flatten::{execute_flatten, validate_flatten_args};
pub use models::{FlattenArgs, SummarizeArgs, TripsArgs};
pub use summarize::{execute_summarize, validate_summarize_args};
pub use trips::execute_trips;
pub use utils::{display_version, load_input_json, resolve_policy, validate_summary_file};
