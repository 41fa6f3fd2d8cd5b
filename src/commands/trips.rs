//! Trips command implementation.
//!
//! Lists every trip of a report with its dates and its status on a given day.

use crate::commands::models::TripsArgs;
use crate::commands::utils::load_input_json;
use crate::output::render_trip_statuses;
use crate::parser::parse_report;
use anyhow::{Context, Result};
use log::info;

/// Execute the trips command
///
/// **Public** - main entry point called from main.rs
pub fn execute_trips(args: TripsArgs) -> Result<()> {
    info!(
        "Listing trips from {} as of {}",
        args.input.display(),
        args.today
    );

    let raw = load_input_json(&args.input)?;
    let report = parse_report(&raw, &args.policy).context("Failed to parse report")?;

    if report.trips.is_empty() {
        println!("No trips found");
        return Ok(());
    }

    println!("{}", render_trip_statuses(&report, args.today));
    Ok(())
}
