//! Aggregation of expense reports.
//!
//! This module transforms a typed report into:
//! - Per-category totals split by who paid
//! - Expenses grouped per category for detailed listings
//! - The list of expenses carrying receipts
//! - Category shares and per-trip totals for printouts

pub mod metrics;
pub mod report;

// Re-export main types and functions
pub use metrics::{calculate_category_shares, calculate_trip_totals, CategoryShare, TripTotals};
pub use report::{summarize_report, CategoryTotals, DetailedExpense, ReportSummary};
