//! Summarize an expense report by category and payer.
//!
//! Every expense is either reimbursable ("propio": paid personally, pending
//! reimbursement) or not ("empresa": paid directly by the company). The
//! summary keeps a running split per category plus the grand totals, the
//! expenses grouped for a detailed listing, and every expense with a receipt.

use crate::parser::schema::{Expense, Report};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running totals for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Reimbursable amount
    pub propio: Decimal,

    /// Company-paid amount
    pub empresa: Decimal,

    /// Both together
    pub total: Decimal,
}

impl CategoryTotals {
    /// Add one expense amount to the matching side
    pub fn add(&mut self, amount: Decimal, is_reimbursable: bool) {
        if is_reimbursable {
            self.propio += amount;
        } else {
            self.empresa += amount;
        }
        self.total += amount;
    }
}

/// An expense annotated with the trip it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedExpense {
    #[serde(flatten)]
    pub expense: Expense,

    pub trip_name: String,
}

/// Category breakdown of a whole report
///
/// Serialized with camelCase keys; maps are keyed by category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Sum of reimbursable amounts
    pub total_propio: Decimal,

    /// Sum of company-paid amounts
    pub total_empresa: Decimal,

    /// Per-category split
    pub summary: BTreeMap<String, CategoryTotals>,

    /// Category labels in rendering order
    pub ordered_keys: Vec<String>,

    /// Expenses per category, in encounter order
    pub grouped_for_detail: BTreeMap<String, Vec<DetailedExpense>>,

    /// Every expense carrying a receipt, in encounter order
    pub receipts: Vec<Expense>,
}

impl ReportSummary {
    /// Propio plus empresa
    pub fn grand_total(&self) -> Decimal {
        self.total_propio + self.total_empresa
    }

    /// Category totals in `ordered_keys` order
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&str, &CategoryTotals)> + '_ {
        self.ordered_keys
            .iter()
            .filter_map(|key| self.summary.get(key).map(|totals| (key.as_str(), totals)))
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}

/// Build the category summary of a report
///
/// **Public** - main entry point for report aggregation
///
/// # Arguments
/// * `report` - Typed report; amounts already coerced by the parser
///
/// # Returns
/// Totals split by payer, per-category sums, detail groups and receipts.
/// A report without trips yields zero totals and empty collections.
///
/// # Algorithm
/// For each trip, for each expense in order:
/// 1. Resolve the category label (placeholder when missing)
/// 2. Add the amount to the category and to the matching grand total
/// 3. Append the expense, tagged with the trip name, to the category group
/// 4. Collect it as a receipt if it has a non-empty receipt URL
pub fn summarize_report(report: &Report) -> ReportSummary {
    debug!("Summarizing report with {} trips", report.trips.len());

    let mut result = ReportSummary::default();

    for trip in &report.trips {
        for expense in &trip.expenses {
            let label = expense.category_label();

            result
                .summary
                .entry(label.to_string())
                .or_default()
                .add(expense.amount, expense.is_reimbursable);

            if expense.is_reimbursable {
                result.total_propio += expense.amount;
            } else {
                result.total_empresa += expense.amount;
            }

            result
                .grouped_for_detail
                .entry(label.to_string())
                .or_default()
                .push(DetailedExpense {
                    expense: expense.clone(),
                    trip_name: trip.name.clone(),
                });

            if expense.has_receipt() {
                result.receipts.push(expense.clone());
            }
        }
    }

    result.ordered_keys = result.summary.keys().cloned().collect();
    result.ordered_keys.sort();

    debug!(
        "Summary: {} categories, {} receipts, propio {:.2}, empresa {:.2}",
        result.ordered_keys.len(),
        result.receipts.len(),
        result.total_propio,
        result.total_empresa
    );

    result
}
