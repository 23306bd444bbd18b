//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_item;

pub use attendance::AttendanceRecord;
pub use employee::{Employee, PayType};
pub use pay_period::{PayPeriod, PeriodStatus};
pub use payroll_item::PayrollItem;
