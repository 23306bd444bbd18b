//! Employee model and related types.
//!
//! This module defines the Employee struct and PayType enum for
//! representing workers in the payroll system.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// How an employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid per worked hour at `hourly_rate`.
    Hourly,
    /// Paid a fixed monthly salary, prorated over the pay period.
    Monthly,
}

/// Represents an employee subject to payroll calculation.
///
/// Exactly one of `hourly_rate` / `monthly_salary` is meaningful,
/// selected by `pay_type`; the other field is carried but ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's given name(s).
    pub first_name: String,
    /// The employee's family name(s).
    pub last_name: String,
    /// Optional national identification number.
    #[serde(default)]
    pub identification: Option<String>,
    /// Job title or position.
    #[serde(default)]
    pub position: String,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// The hourly rate, used when `pay_type` is `Hourly`.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// The monthly salary, used when `pay_type` is `Monthly`.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// The scheduled clock-in time, used to derive lateness.
    pub scheduled_start: NaiveTime,
    /// Whether the employee is included in payroll calculations.
    pub active: bool,
}

impl Employee {
    /// Returns the employee's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.pay_type == PayType::Hourly
    }

    /// Validates that the rate selected by the pay type is non-negative.
    ///
    /// Negative rates would silently produce wrong totals, so they are
    /// rejected before any calculation runs.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
