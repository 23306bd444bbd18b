//! Pay period model.
//!
//! This module contains the [`PayPeriod`] and [`PeriodStatus`] types that
//! define the date window for payroll calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Lifecycle state of a pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Created but never calculated.
    Draft,
    /// At least one calculation has run; items exist.
    Calculated,
    /// Closed for further changes.
    Closed,
}

/// A pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use nomina_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     "August 1-15".to_string(),
///     NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
/// ).unwrap();
///
/// assert_eq!(period.day_count(), 15);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// Human-readable name (e.g. "August 1-15").
    pub name: String,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// The lifecycle state of the period.
    pub status: PeriodStatus,
}

impl PayPeriod {
    /// Creates a draft period, rejecting ranges where start is after end.
    pub fn new(name: String, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPeriod {
                name,
                message: "start date after end date".to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            start_date,
            end_date,
            status: PeriodStatus::Draft,
        })
    }

    /// Checks whether a date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the period, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_period_starts_as_draft() {
        let period =
            PayPeriod::new("August".to_string(), date(2026, 8, 1), date(2026, 8, 15)).unwrap();
        assert_eq!(period.status, PeriodStatus::Draft);
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = PayPeriod::new("Bad".to_string(), date(2026, 8, 15), date(2026, 8, 1));
        assert!(matches!(
            result,
            Err(EngineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let period =
            PayPeriod::new("One day".to_string(), date(2026, 8, 1), date(2026, 8, 1)).unwrap();
        assert_eq!(period.day_count(), 1);
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period =
            PayPeriod::new("August".to_string(), date(2026, 8, 1), date(2026, 8, 15)).unwrap();
        assert!(period.contains_date(date(2026, 8, 1)));
        assert!(period.contains_date(date(2026, 8, 8)));
        assert!(period.contains_date(date(2026, 8, 15)));
        assert!(!period.contains_date(date(2026, 7, 31)));
        assert!(!period.contains_date(date(2026, 8, 16)));
    }

    #[test]
    fn test_day_count_counts_both_endpoints() {
        let period =
            PayPeriod::new("Half month".to_string(), date(2026, 8, 1), date(2026, 8, 15)).unwrap();
        assert_eq!(period.day_count(), 15);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PeriodStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&PeriodStatus::Calculated).unwrap(),
            "\"calculated\""
        );
        assert_eq!(
            serde_json::to_string(&PeriodStatus::Closed).unwrap(),
            "\"closed\""
        );
    }
}
