//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Loads a JSON export of a report
//! 2. Parses trips and expenses, coercing amounts
//! 3. Aggregates the report by category and payer
//! 4. Writes the summary document
//! 5. Optionally prints a text summary

use crate::aggregator::{calculate_trip_totals, summarize_report};
use crate::commands::models::SummarizeArgs;
use crate::commands::utils::load_input_json;
use crate::output::{render_report_summary, write_json};
use crate::parser::{parse_report, SummaryDocument};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or invalid input JSON
/// * Invalid amounts or malformed rows (strict policy)
/// * File write errors
pub fn execute_summarize(args: SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Summarizing report from: {}", args.input.display());

    let raw = load_input_json(&args.input)?;
    let report = parse_report(&raw, &args.policy).context("Failed to parse report")?;

    let summary = summarize_report(&report);
    debug!(
        "Summary: {} categories, {:.2} total",
        summary.ordered_keys.len(),
        summary.grand_total()
    );

    if args.print_summary {
        let trips = calculate_trip_totals(&report);
        println!();
        println!("{}", render_report_summary(&summary, &trips, args.top_categories));
        println!();
    }

    if let Some(output) = &args.output {
        let document = SummaryDocument::new(&report, summary);
        write_json(&document, output).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", output.display());
    }

    info!(
        "Summarize completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_summarize_args(args: &SummarizeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: give an output path or ask for a summary");
    }

    if args.top_categories == 0 {
        anyhow::bail!("top_categories must be greater than 0");
    }

    if args.top_categories > 1000 {
        anyhow::bail!("top_categories is too large (max 1000)");
    }

    Ok(())
}
