//! Request types for the payroll engine API.
//!
//! Clock times cross the API boundary as `HH:MM` strings and are parsed
//! strictly; malformed times are validation failures, never coerced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::parse_hhmm;
use crate::error::EngineResult;
use crate::models::{Employee, PayType};

/// Request body for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
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
    /// The hourly rate, used when `pay_type` is `hourly`.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// The monthly salary, used when `pay_type` is `monthly`.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Scheduled clock-in time as `HH:MM`.
    #[serde(default = "default_scheduled_start")]
    pub scheduled_start: String,
    /// Whether the employee is included in payroll calculations.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_scheduled_start() -> String {
    "08:00".to_string()
}

fn default_active() -> bool {
    true
}

impl EmployeeRequest {
    /// Converts the request into a domain employee with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidTime`] when
    /// `scheduled_start` is not `HH:MM`.
    pub fn into_employee(self, id: Uuid) -> EngineResult<Employee> {
        Ok(Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            identification: self.identification,
            position: self.position,
            pay_type: self.pay_type,
            hourly_rate: self.hourly_rate,
            monthly_salary: self.monthly_salary,
            scheduled_start: parse_hhmm(&self.scheduled_start)?,
            active: self.active,
        })
    }
}

/// Request body for recording attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee clocking in/out.
    pub employee_id: Uuid,
    /// The date of the attendance.
    pub date: NaiveDate,
    /// Clock-in time as `HH:MM`, if any.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out time as `HH:MM`, if any.
    #[serde(default)]
    pub clock_out: Option<String>,
}

/// Request body for creating a pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Human-readable period name.
    pub name: String,
    /// Start date (inclusive).
    pub start_date: NaiveDate,
    /// End date (inclusive).
    pub end_date: NaiveDate,
}

/// Query parameters for attendance listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    /// Range start (inclusive).
    pub from: NaiveDate,
    /// Range end (inclusive).
    pub to: NaiveDate,
    /// Optional employee filter.
    #[serde(default)]
    pub employee_id: Option<Uuid>,
}

/// Query parameters for the attendance report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    /// Range start (inclusive).
    pub from: NaiveDate,
    /// Range end (inclusive).
    pub to: NaiveDate,
}

/// Query parameters for employee listing.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeQuery {
    /// Optional case-insensitive name/position search.
    #[serde(default)]
    pub q: Option<String>,
}
