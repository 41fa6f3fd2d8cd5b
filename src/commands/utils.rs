use crate::output::read_summary;
use crate::utils::config::{load_policy, ValidationPolicy, SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::debug;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// Read an input file as loosely-typed JSON
pub fn load_input_json(path: &Path) -> Result<serde_json::Value> {
    debug!("Loading input: {}", path.display());

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Input file {} is not valid JSON", path.display()))
}

/// Build the validation policy from an optional TOML file and the strict flag
///
/// `--strict` wins over anything the file says.
pub fn resolve_policy(config: Option<&Path>, strict: bool) -> Result<ValidationPolicy> {
    if strict {
        return Ok(ValidationPolicy::strict());
    }

    match config {
        Some(path) => load_policy(path)
            .with_context(|| format!("Failed to load policy from {}", path.display())),
        None => Ok(ValidationPolicy::default()),
    }
}

/// Validate a summary JSON file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let document = read_summary(&file_path)?;
    let report = &document.report;

    let category_total: Decimal = report.summary.values().map(|t| t.total).sum();
    if category_total != report.grand_total() {
        anyhow::bail!(
            "Category totals ({:.2}) do not add up to propio + empresa ({:.2})",
            category_total,
            report.grand_total()
        );
    }

    println!("✓ Valid summary JSON");
    println!("  Version: {}", document.version);
    println!("  Generated: {}", document.generated_at);
    println!("  Trips: {}", document.trip_count);
    println!("  Categories: {}", report.ordered_keys.len());
    println!("  Total Propio: {:.2}", report.total_propio);
    println!("  Total Empresa: {:.2}", report.total_empresa);
    println!("  Receipts: {}", report.receipts.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Hearth v{}", env!("CARGO_PKG_VERSION"));
    println!("Document Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Location trees and travel expense summaries for household records.");
}
