//! Aggregation and reporting.
//!
//! This module sums period items into totals, builds the per-employee
//! attendance report with its punctuality ranking, and renders a period's
//! items as CSV.

mod export;
mod totals;

pub use export::period_csv;
pub use totals::{
    attendance_report, punctuality_ranking, AttendanceSummary, PeriodTotals, period_totals,
};
