//! Period totals and attendance aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::round_money;
use crate::models::{AttendanceRecord, Employee, PayrollItem};

/// Period-level sums across all payroll items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of gross pay.
    pub gross: Decimal,
    /// Sum of every item's deduction amounts.
    pub deductions: Decimal,
    /// Sum of every item's tax amounts.
    pub taxes: Decimal,
    /// Sum of net pay.
    pub net: Decimal,
}

/// Sums the items of a period into totals.
///
/// # Example
///
/// ```
/// use nomina_engine::report::period_totals;
///
/// let totals = period_totals(&[]);
/// assert_eq!(totals.gross, rust_decimal::Decimal::ZERO);
/// ```
pub fn period_totals(items: &[PayrollItem]) -> PeriodTotals {
    PeriodTotals {
        gross: items.iter().map(|i| i.gross_pay).sum(),
        deductions: items.iter().map(PayrollItem::total_deductions).sum(),
        taxes: items.iter().map(PayrollItem::total_taxes).sum(),
        net: items.iter().map(|i| i.net_pay).sum(),
    }
}

/// Per-employee attendance aggregate over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The employee the row aggregates.
    pub employee_id: Uuid,
    /// The employee's full name.
    pub employee_name: String,
    /// Sum of worked hours from raw clock spans, rounded to 2 decimals.
    pub hours_worked: Decimal,
    /// Sum of lateness minutes.
    pub late_minutes: i64,
}

/// Builds the attendance report for a date range: one row per employee with
/// at least one record in `[from, to]`, in employee input order.
///
/// Hours come from the raw clock-in/out spans, independent of any pay
/// period.
pub fn attendance_report(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<AttendanceSummary> {
    employees
        .iter()
        .filter_map(|employee| {
            let records: Vec<&AttendanceRecord> = attendance
                .iter()
                .filter(|a| a.employee_id == employee.id && a.date >= from && a.date <= to)
                .collect();
            if records.is_empty() {
                return None;
            }

            let hours: Decimal = records.iter().map(|a| a.worked_hours()).sum();
            let late_minutes = records.iter().map(|a| a.late_minutes).sum();
            Some(AttendanceSummary {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                hours_worked: round_money(hours),
                late_minutes,
            })
        })
        .collect()
}

/// Ranks report rows by ascending lateness; ties keep their input order.
pub fn punctuality_ranking(rows: &[AttendanceSummary]) -> Vec<AttendanceSummary> {
    let mut ranked = rows.to_vec();
    ranked.sort_by_key(|r| r.late_minutes);
    ranked
}
