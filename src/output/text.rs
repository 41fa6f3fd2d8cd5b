//! Plain-text renderings for terminal output.

use crate::aggregator::{calculate_category_shares, ReportSummary, TripTotals};
use crate::parser::schema::{FlattenedLocation, Report};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 30;
const BAR_WIDTH: usize = 30;

/// Render the category table, category shares and per-trip totals
///
/// # Arguments
/// * `summary` - Aggregated report
/// * `trips` - Per-trip totals (may be empty to skip that section)
/// * `max_lines` - Maximum number of categories in the share chart
pub fn render_report_summary(
    summary: &ReportSummary,
    trips: &[TripTotals],
    max_lines: usize,
) -> String {
    let mut lines = Vec::new();

    lines.push("  EXPENSES BY CATEGORY".to_string());
    lines.push(format!(
        "  {:<width$} {:>12} {:>12} {:>12}",
        "Category",
        "PROPIO",
        "EMPRESA",
        "TOTAL",
        width = LABEL_WIDTH
    ));
    lines.push(format!("  {}", "-".repeat(LABEL_WIDTH + 39)));

    for (category, totals) in summary.iter_ordered() {
        lines.push(format!(
            "  {:<width$} {:>12.2} {:>12.2} {:>12.2}",
            truncate_label(category, LABEL_WIDTH),
            totals.propio,
            totals.empresa,
            totals.total,
            width = LABEL_WIDTH
        ));
    }

    lines.push(format!("  {}", "-".repeat(LABEL_WIDTH + 39)));
    lines.push(format!(
        "  {:<width$} {:>12.2} {:>12.2} {:>12.2}",
        "Total",
        summary.total_propio,
        summary.total_empresa,
        summary.grand_total(),
        width = LABEL_WIDTH
    ));
    lines.push(format!("  Receipts attached: {}", summary.receipts.len()));

    let shares = calculate_category_shares(summary, max_lines);
    if !shares.is_empty() {
        lines.push(String::new());
        lines.push("  TOP CATEGORIES".to_string());
        for share in &shares {
            let filled = (share.percentage * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0);
            lines.push(format!(
                "  {:<width$} {:<bar$} {:>5.1}%",
                truncate_label(&share.category, LABEL_WIDTH),
                "#".repeat(filled.min(BAR_WIDTH)),
                share.percentage,
                width = LABEL_WIDTH,
                bar = BAR_WIDTH
            ));
        }
        if summary.ordered_keys.len() > shares.len() {
            lines.push(format!(
                "   (Showing top {} of {} categories)",
                shares.len(),
                summary.ordered_keys.len()
            ));
        }
    }

    if !trips.is_empty() {
        lines.push(String::new());
        lines.push("  TRIPS".to_string());
        for trip in trips {
            lines.push(format!(
                "  {:<width$} {:>12.2} {:>12.2} {:>12.2}  ({} expenses, {} receipts)",
                truncate_label(&trip.trip_name, LABEL_WIDTH),
                trip.propio,
                trip.empresa,
                trip.total,
                trip.expense_count,
                trip.receipt_count,
                width = LABEL_WIDTH
            ));
        }
    }

    lines.join("\n")
}

/// Render flattened locations one per line
pub fn render_location_tree(locations: &[FlattenedLocation]) -> String {
    locations
        .iter()
        .map(|location| format!("{}  [{}]", location.name, location.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render each trip with its dates and status relative to `today`
pub fn render_trip_statuses(report: &Report, today: NaiveDate) -> String {
    report
        .trips
        .iter()
        .map(|trip| match (&trip.dates, trip.status(today)) {
            (Some(range), Some(status)) => format!(
                "  {:<width$} {}  ({} days)  {}",
                truncate_label(&trip.name, LABEL_WIDTH),
                range,
                range.days(),
                status,
                width = LABEL_WIDTH
            ),
            _ => format!(
                "  {:<width$} no dates",
                truncate_label(&trip.name, LABEL_WIDTH),
                width = LABEL_WIDTH
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut a label to `max` characters, marking the cut with `...`
fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let kept: String = label.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
