//! Flatten command implementation.
//!
//! The flatten command:
//! 1. Loads a JSON export of location rows
//! 2. Parses it into typed records
//! 3. Flattens the hierarchy into display order
//! 4. Writes the flattened document and/or prints the tree

use crate::commands::models::FlattenArgs;
use crate::commands::utils::load_input_json;
use crate::hierarchy::flatten_locations;
use crate::output::{render_location_tree, write_json};
use crate::parser::{parse_locations, LocationsDocument};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the flatten command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or invalid input JSON
/// * Malformed rows, orphans (strict policy), cycles, duplicate ids
/// * File write errors
pub fn execute_flatten(args: FlattenArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Flattening locations from: {}", args.input.display());

    let raw = load_input_json(&args.input)?;
    let locations =
        parse_locations(&raw, &args.policy).context("Failed to parse location rows")?;

    let flattened =
        flatten_locations(&locations, &args.policy).context("Failed to flatten locations")?;
    info!(
        "Flattened {} of {} locations",
        flattened.len(),
        locations.len()
    );

    if args.print_tree {
        println!("{}", render_location_tree(&flattened));
    }

    if let Some(output) = &args.output {
        let document = LocationsDocument::new(flattened);
        write_json(&document, output).context("Failed to write locations JSON")?;
        info!("✓ Locations written to: {}", output.display());
    }

    info!(
        "Flatten completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Validate flatten arguments
///
/// **Public** - can be called before execute_flatten for early validation
pub fn validate_flatten_args(args: &FlattenArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.is_none() && !args.print_tree {
        anyhow::bail!("Nothing to do: give an output path or ask to print the tree");
    }

    Ok(())
}
