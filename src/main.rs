//! Hearth CLI
//!
//! Runs the household data-shaping utilities over JSON exports.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hearth::commands::{
    display_version, execute_flatten, execute_summarize, execute_trips, resolve_policy,
    validate_flatten_args, validate_summarize_args, validate_summary_file, FlattenArgs,
    SummarizeArgs, TripsArgs,
};

/// Hearth - location trees and travel expense summaries
#[derive(Parser, Debug)]
#[command(name = "hearth")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten a location hierarchy into display order
    Flatten {
        /// JSON export of location rows
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the flattened JSON (e.g. artifacts/locations.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject orphans, malformed rows and invalid amounts
        #[arg(long)]
        strict: bool,

        /// TOML file with a validation policy
        #[arg(long, env = "HEARTH_POLICY")]
        config: Option<PathBuf>,

        /// Print the indented tree to stdout
        #[arg(long)]
        print: bool,
    },

    /// Summarize an expense report by category
    Summarize {
        /// JSON export of the report
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the summary JSON (e.g. artifacts/summary.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject orphans, malformed rows and invalid amounts
        #[arg(long)]
        strict: bool,

        /// TOML file with a validation policy
        #[arg(long, env = "HEARTH_POLICY")]
        config: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of categories in the printed share chart
        #[arg(long, default_value = "10")]
        top_categories: usize,
    },

    /// List trips with their status
    Trips {
        /// JSON export of the report
        #[arg(short, long)]
        input: PathBuf,

        /// Reference day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,

        /// Reject malformed rows and unreadable dates
        #[arg(long)]
        strict: bool,

        /// TOML file with a validation policy
        #[arg(long, env = "HEARTH_POLICY")]
        config: Option<PathBuf>,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Flatten {
            input,
            output,
            strict,
            config,
            print,
        } => {
            let args = FlattenArgs {
                input,
                output,
                policy: resolve_policy(config.as_deref(), strict)?,
                print_tree: print,
            };

            validate_flatten_args(&args)?;
            execute_flatten(args)?;
        }

        Commands::Summarize {
            input,
            output,
            strict,
            config,
            summary,
            top_categories,
        } => {
            let args = SummarizeArgs {
                input,
                output,
                policy: resolve_policy(config.as_deref(), strict)?,
                print_summary: summary,
                top_categories,
            };

            validate_summarize_args(&args)?;
            execute_summarize(args)?;
        }

        Commands::Trips {
            input,
            today,
            strict,
            config,
        } => {
            let mut args = TripsArgs {
                input,
                policy: resolve_policy(config.as_deref(), strict)?,
                ..Default::default()
            };

            if let Some(day) = today {
                args.today = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                    .with_context(|| format!("Invalid --today date: {}", day))?;
            }

            execute_trips(args)?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
