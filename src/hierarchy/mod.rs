//! Location hierarchy flattening.
//!
//! Turns a flat set of parent-referencing location records into the
//! depth-ordered, indented list a linear selection control displays.

pub mod collation;
pub mod flatten;

// Re-export main functions
pub use collation::collate;
pub use flatten::{display_name, flatten, flatten_locations};
