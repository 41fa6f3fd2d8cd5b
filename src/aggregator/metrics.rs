//! Derived figures for summary printouts.
//!
//! Category shares rank categories by how much of the report they account
//! for; trip totals give the per-trip split the category view hides.

use super::report::ReportSummary;
use crate::parser::schema::Report;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// One category's slice of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,

    pub total: Decimal,

    /// Percentage of the grand total, to two places
    pub percentage: Decimal,
}

/// Rank categories by total, largest first
///
/// **Public** - used by the text summary
///
/// # Arguments
/// * `summary` - Aggregated report
/// * `top_n` - Maximum number of categories to return
///
/// Ties keep `ordered_keys` order.
pub fn calculate_category_shares(summary: &ReportSummary, top_n: usize) -> Vec<CategoryShare> {
    let grand_total = summary.grand_total();

    let mut shares: Vec<CategoryShare> = summary
        .iter_ordered()
        .map(|(category, totals)| CategoryShare {
            category: category.to_string(),
            total: totals.total,
            percentage: percentage_of(totals.total, grand_total),
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total));
    shares.truncate(top_n);

    debug!("Calculated {} category shares", shares.len());
    shares
}

/// Spending of a single trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripTotals {
    pub trip_name: String,
    pub propio: Decimal,
    pub empresa: Decimal,
    pub total: Decimal,
    pub expense_count: usize,
    pub receipt_count: usize,
}

/// Per-trip totals in report order
pub fn calculate_trip_totals(report: &Report) -> Vec<TripTotals> {
    report
        .trips
        .iter()
        .map(|trip| {
            let mut totals = TripTotals {
                trip_name: trip.name.clone(),
                propio: Decimal::ZERO,
                empresa: Decimal::ZERO,
                total: Decimal::ZERO,
                expense_count: trip.expenses.len(),
                receipt_count: 0,
            };
            for expense in &trip.expenses {
                if expense.is_reimbursable {
                    totals.propio += expense.amount;
                } else {
                    totals.empresa += expense.amount;
                }
                totals.total += expense.amount;
                if expense.has_receipt() {
                    totals.receipt_count += 1;
                }
            }
            totals
        })
        .collect()
}

/// Share of `part` in `whole`, 0 when there is nothing to divide
fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
