//! Payroll line item model.
//!
//! This module contains the [`PayrollItem`] type: one employee's computed
//! pay for one period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One employee's computed pay for one period.
///
/// Items are created (or wholly replaced) each time a period is calculated
/// and are read-only until the next recalculation. The deduction and tax
/// maps use `BTreeMap` so serialization order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollItem {
    /// The period this item belongs to.
    pub period_id: Uuid,
    /// The employee this item was computed for.
    pub employee_id: Uuid,
    /// The employee's full name at calculation time, for display/export.
    pub employee_name: String,
    /// Total worked hours over the period, rounded to 2 decimals.
    pub hours_worked: Decimal,
    /// Gross pay before deductions and taxes.
    pub gross_pay: Decimal,
    /// Deduction name to amount.
    pub deductions: BTreeMap<String, Decimal>,
    /// Tax name to amount.
    pub taxes: BTreeMap<String, Decimal>,
    /// Pay after all deductions and taxes. May be negative if the rule
    /// amounts exceed gross.
    pub net_pay: Decimal,
}

impl PayrollItem {
    /// Sum of all deduction amounts.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.values().copied().sum()
    }

    /// Sum of all tax amounts.
    pub fn total_taxes(&self) -> Decimal {
        self.taxes.values().copied().sum()
    }
}
