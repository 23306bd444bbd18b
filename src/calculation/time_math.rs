//! Clock-time math.
//!
//! This module provides the pure time conversions used by attendance and
//! payroll calculation: elapsed hours between two clock times and lateness
//! against a scheduled start.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Rounds a monetary or hour quantity to 2 decimal places.
///
/// Uses `Decimal`'s default banker's rounding, matching the semantics of
/// the rounding applied after every arithmetic step in the engine. The
/// result always carries exactly two decimal places, so serialized values
/// render as `1600.00` rather than `1600`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Returns the elapsed hours between a clock-in and clock-out, rounded to
/// 2 decimals.
///
/// If either time is absent the result is 0. A clock-out earlier in
/// clock-time than the clock-in is treated as occurring the next calendar
/// day, so overnight shifts produce `24h - in + out`.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let clock_in = NaiveTime::from_hms_opt(22, 0, 0);
/// let clock_out = NaiveTime::from_hms_opt(6, 0, 0);
/// assert_eq!(hours_between(clock_in, clock_out), Decimal::from(8));
/// assert_eq!(hours_between(None, clock_out), Decimal::ZERO);
/// ```
pub fn hours_between(clock_in: Option<NaiveTime>, clock_out: Option<NaiveTime>) -> Decimal {
    let (Some(clock_in), Some(clock_out)) = (clock_in, clock_out) else {
        return Decimal::ZERO;
    };

    let mut elapsed_secs =
        i64::from(clock_out.num_seconds_from_midnight()) - i64::from(clock_in.num_seconds_from_midnight());
    if elapsed_secs < 0 {
        // Clock-out fell on the next calendar day.
        elapsed_secs += SECONDS_PER_DAY;
    }

    round_money(Decimal::from(elapsed_secs) / Decimal::from(3600))
}

/// Returns the whole minutes a clock-in occurred after the scheduled start,
/// floored at 0.
///
/// Early arrival is not negative lateness, and a missing clock-in counts
/// as 0 late minutes.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::lateness_minutes;
/// use chrono::NaiveTime;
///
/// let scheduled = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(lateness_minutes(NaiveTime::from_hms_opt(8, 12, 0), scheduled), 12);
/// assert_eq!(lateness_minutes(NaiveTime::from_hms_opt(7, 45, 0), scheduled), 0);
/// assert_eq!(lateness_minutes(None, scheduled), 0);
/// ```
pub fn lateness_minutes(actual_in: Option<NaiveTime>, scheduled: NaiveTime) -> i64 {
    let Some(actual_in) = actual_in else {
        return 0;
    };

    let delay_secs = i64::from(actual_in.num_seconds_from_midnight())
        - i64::from(scheduled.num_seconds_from_midnight());
    (delay_secs / 60).max(0)
}

/// Parses a strict `HH:MM` clock time.
///
/// Used at the API and configuration boundaries; malformed input is a
/// validation failure, never silently coerced.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] when the input is not `HH:MM`.
pub fn parse_hhmm(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}
