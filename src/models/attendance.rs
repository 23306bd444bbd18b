//! Attendance record model.
//!
//! This module defines the AttendanceRecord struct representing one day of
//! clock-in/out data for an employee.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{hours_between, lateness_minutes};

/// One day of attendance for an employee.
///
/// Either clock time may be absent (e.g. a forgotten punch); records missing
/// a time contribute zero worked hours. `late_minutes` is derived from the
/// clock-in against the employee's scheduled start and is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The date of the attendance.
    pub date: NaiveDate,
    /// The actual clock-in time, if any.
    pub clock_in: Option<NaiveTime>,
    /// The actual clock-out time, if any.
    pub clock_out: Option<NaiveTime>,
    /// Minutes the clock-in occurred after the scheduled start, floored at 0.
    pub late_minutes: i64,
}

impl AttendanceRecord {
    /// Creates a record, deriving `late_minutes` from the scheduled start.
    ///
    /// # Example
    ///
    /// ```
    /// use nomina_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use uuid::Uuid;
    ///
    /// let record = AttendanceRecord::new(
    ///     Uuid::new_v4(),
    ///     NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
    ///     NaiveTime::from_hms_opt(8, 12, 0),
    ///     NaiveTime::from_hms_opt(17, 0, 0),
    ///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    /// );
    /// assert_eq!(record.late_minutes, 12);
    /// ```
    pub fn new(
        employee_id: Uuid,
        date: NaiveDate,
        clock_in: Option<NaiveTime>,
        clock_out: Option<NaiveTime>,
        scheduled_start: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            date,
            clock_in,
            clock_out,
            late_minutes: lateness_minutes(clock_in, scheduled_start),
        }
    }

    /// Returns the worked hours for this record, rounded to 2 decimals.
    ///
    /// Clock-outs earlier than the clock-in are treated as occurring the
    /// next calendar day (overnight shifts). A record missing either time
    /// contributes zero.
    pub fn worked_hours(&self) -> Decimal {
        hours_between(self.clock_in, self.clock_out)
    }
}
