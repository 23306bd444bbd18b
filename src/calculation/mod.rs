//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: clock-time math
//! (worked hours, lateness), ordered deduction/tax rule evaluation, gross
//! pay computation (hourly vs monthly proration), and the per-period
//! orchestration that turns attendance into payroll line items.

mod gross_pay;
mod period;
mod rules;
mod time_math;

pub use gross_pay::gross_pay;
pub use period::{calculate_period_items, calculate_employee_item};
pub use rules::{evaluate_rules, RuleOutcome, DEFAULT_DEDUCTION_LABEL, DEFAULT_TAX_LABEL};
pub use time_math::{hours_between, lateness_minutes, parse_hhmm, round_money};
