//! Gross pay computation.
//!
//! Hourly employees earn worked hours times their hourly rate. Monthly
//! employees have their salary prorated over the period using a fixed
//! 30-day month divisor, regardless of the actual month length.

use rust_decimal::Decimal;

use crate::models::{Employee, PayType};

use super::time_math::round_money;

/// The fixed divisor used to prorate monthly salaries.
const DAYS_PER_MONTH: i64 = 30;

/// Computes gross pay for an employee over a period, rounded to 2 decimals.
///
/// * Hourly: `round(total_hours * hourly_rate, 2)`.
/// * Monthly: `round(monthly_salary * period_days / 30, 2)` where
///   `period_days` counts both endpoints of the period.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::gross_pay;
/// use nomina_engine::models::{Employee, PayType};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     first_name: "Juan".to_string(),
///     last_name: "Perez".to_string(),
///     identification: None,
///     position: String::new(),
///     pay_type: PayType::Monthly,
///     hourly_rate: Decimal::ZERO,
///     monthly_salary: Decimal::from(9000),
///     scheduled_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     active: true,
/// };
/// assert_eq!(gross_pay(&employee, Decimal::ZERO, 15), Decimal::from(4500));
/// ```
pub fn gross_pay(employee: &Employee, total_hours: Decimal, period_days: i64) -> Decimal {
    match employee.pay_type {
        PayType::Hourly => round_money(total_hours * employee.hourly_rate),
        PayType::Monthly => round_money(
            employee.monthly_salary * Decimal::from(period_days) / Decimal::from(DAYS_PER_MONTH),
        ),
    }
}
