//! Per-period payroll calculation.
//!
//! This module orchestrates, per active employee: attendance selection,
//! worked-hours aggregation, gross pay, deduction and tax rule passes, and
//! net pay derivation. It is pure: persistence of the resulting items is
//! the store's responsibility.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, PayPeriod, PayrollItem};

use super::gross_pay::gross_pay;
use super::rules::{evaluate_rules, DEFAULT_DEDUCTION_LABEL, DEFAULT_TAX_LABEL};
use super::time_math::round_money;

/// Computes the payroll line item for a single employee.
///
/// Attendance records are filtered to this employee and to dates within the
/// period (inclusive); records missing either clock time contribute zero
/// hours. Deduction rules run against gross, tax rules against gross minus
/// total deductions, and net pay is not floored at zero: rules exceeding
/// gross produce a negative net.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidEmployee`] when the
/// employee's rate fields fail validation.
pub fn calculate_employee_item(
    employee: &Employee,
    period: &PayPeriod,
    attendance: &[AttendanceRecord],
    config: &PayrollConfig,
) -> EngineResult<PayrollItem> {
    employee.validate()?;

    let total_hours: Decimal = attendance
        .iter()
        .filter(|r| r.employee_id == employee.id && period.contains_date(r.date))
        .map(AttendanceRecord::worked_hours)
        .sum();
    let total_hours = round_money(total_hours);

    let gross = gross_pay(employee, total_hours, period.day_count());

    let deductions = evaluate_rules(&config.deductions, gross, DEFAULT_DEDUCTION_LABEL);
    let tax_base = gross - deductions.total();
    let taxes = evaluate_rules(&config.taxes, tax_base, DEFAULT_TAX_LABEL);

    let net = round_money(gross - deductions.total() - taxes.total());

    Ok(PayrollItem {
        period_id: period.id,
        employee_id: employee.id,
        employee_name: employee.full_name(),
        hours_worked: total_hours,
        gross_pay: gross,
        deductions: deductions.amounts,
        taxes: taxes.amounts,
        net_pay: net,
    })
}

/// Computes the full item set for a period: one item per active employee,
/// in the given employee order.
///
/// Inactive employees are excluded entirely (no zero-value item). Any
/// per-employee failure aborts the whole calculation so a partial item set
/// is never produced.
pub fn calculate_period_items(
    period: &PayPeriod,
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    config: &PayrollConfig,
) -> EngineResult<Vec<PayrollItem>> {
    employees
        .iter()
        .filter(|e| e.active)
        .map(|e| calculate_employee_item(e, period, attendance, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;
    use uuid::Uuid;

    use crate::models::PayType;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn hourly_employee(rate: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: "Maria".to_string(),
            last_name: "Lopez".to_string(),
            identification: None,
            position: String::new(),
            pay_type: PayType::Hourly,
            hourly_rate: dec(rate),
            monthly_salary: Decimal::ZERO,
            scheduled_start: time(8, 0).unwrap(),
            active: true,
        }
    }

    fn monthly_employee(salary: &str) -> Employee {
        Employee {
            pay_type: PayType::Monthly,
            hourly_rate: Decimal::ZERO,
            monthly_salary: dec(salary),
            ..hourly_employee("0")
        }
    }

    fn period(start: u32, end: u32) -> PayPeriod {
        PayPeriod::new("Test".to_string(), date(start), date(end)).unwrap()
    }

    fn record(employee: &Employee, day: u32, clock_in: Option<NaiveTime>, clock_out: Option<NaiveTime>) -> AttendanceRecord {
        AttendanceRecord::new(employee.id, date(day), clock_in, clock_out, employee.scheduled_start)
    }

    fn config_from_yaml(yaml: &str) -> PayrollConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_hourly_sixteen_hours_at_rate_100() {
        let emp = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![
            record(&emp, 3, time(8, 0), time(16, 0)),
            record(&emp, 4, time(8, 0), time(16, 0)),
        ];
        let item =
            calculate_employee_item(&emp, &period, &attendance, &PayrollConfig::default()).unwrap();

        assert_eq!(item.hours_worked, dec("16.00"));
        assert_eq!(item.gross_pay, dec("1600.00"));
        assert_eq!(item.net_pay, dec("1600.00"));
        assert!(item.deductions.is_empty());
        assert!(item.taxes.is_empty());
    }

    #[test]
    fn test_monthly_fifteen_day_period_prorates_to_half() {
        let emp = monthly_employee("9000");
        let period = period(1, 15);
        let item =
            calculate_employee_item(&emp, &period, &[], &PayrollConfig::default()).unwrap();

        assert_eq!(item.gross_pay, dec("4500.00"));
    }

    #[test]
    fn test_deduction_then_tax_scenario() {
        // 5% of 1000 = 50; 10% tax on 950 = 95; net 855.
        let emp = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![record(&emp, 3, time(8, 0), time(18, 0))]; // 10h -> gross 1000
        let config = config_from_yaml(
            r#"
deductions:
  - { name: Social Security, kind: percentage, value: 5, base: gross }
taxes:
  - { name: Income Tax, kind: percentage, value: 10, base: gross }
"#,
        );

        let item = calculate_employee_item(&emp, &period, &attendance, &config).unwrap();
        assert_eq!(item.gross_pay, dec("1000.00"));
        assert_eq!(item.deductions["Social Security"], dec("50.00"));
        assert_eq!(item.taxes["Income Tax"], dec("95.00"));
        assert_eq!(item.net_pay, dec("855.00"));
    }

    #[test]
    fn test_attendance_outside_period_is_ignored() {
        let emp = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![
            record(&emp, 3, time(8, 0), time(16, 0)),
            record(&emp, 20, time(8, 0), time(16, 0)), // outside
        ];
        let item =
            calculate_employee_item(&emp, &period, &attendance, &PayrollConfig::default()).unwrap();
        assert_eq!(item.hours_worked, dec("8.00"));
    }

    #[test]
    fn test_attendance_of_other_employees_is_ignored() {
        let emp = hourly_employee("100");
        let other = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![record(&other, 3, time(8, 0), time(16, 0))];
        let item =
            calculate_employee_item(&emp, &period, &attendance, &PayrollConfig::default()).unwrap();
        assert_eq!(item.hours_worked, dec("0.00"));
    }

    #[test]
    fn test_records_missing_a_time_contribute_zero() {
        let emp = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![
            record(&emp, 3, time(8, 0), None),
            record(&emp, 4, None, time(16, 0)),
            record(&emp, 5, time(8, 0), time(16, 0)),
        ];
        let item =
            calculate_employee_item(&emp, &period, &attendance, &PayrollConfig::default()).unwrap();
        assert_eq!(item.hours_worked, dec("8.00"));
    }

    #[test]
    fn test_net_pay_can_go_negative() {
        // Fixed deduction larger than gross; preserved behavior, not a
        // defect in this engine.
        let emp = monthly_employee("300");
        let period = period(1, 15); // gross 150
        let config = config_from_yaml(
            "deductions:\n  - { name: Advance, kind: fixed, value: 500 }",
        );
        let item = calculate_employee_item(&emp, &period, &[], &config).unwrap();
        assert_eq!(item.gross_pay, dec("150.00"));
        assert_eq!(item.net_pay, dec("-350.00"));
    }

    #[test]
    fn test_tax_base_uses_total_deductions_not_pre_net_history() {
        // Pre-net deductions: 10% of 1000 = 100, then 10% of 900 = 90.
        // Tax base is gross minus the summed amounts (810), not the
        // deduction pass's final running base.
        let emp = hourly_employee("100");
        let period = period(1, 15);
        let attendance = vec![record(&emp, 3, time(8, 0), time(18, 0))];
        let config = config_from_yaml(
            r#"
deductions:
  - { name: A, kind: percentage, value: 10, base: pre_net }
  - { name: B, kind: percentage, value: 10, base: pre_net }
taxes:
  - { name: T, kind: percentage, value: 10 }
"#,
        );
        let item = calculate_employee_item(&emp, &period, &attendance, &config).unwrap();
        assert_eq!(item.total_deductions(), dec("190.00"));
        assert_eq!(item.taxes["T"], dec("81.00"));
        assert_eq!(item.net_pay, dec("729.00"));
    }

    #[test]
    fn test_inactive_employees_produce_no_item() {
        let mut inactive = hourly_employee("100");
        inactive.active = false;
        let active = hourly_employee("50");
        let period = period(1, 15);

        let items = calculate_period_items(
            &period,
            &[inactive.clone(), active.clone()],
            &[],
            &PayrollConfig::default(),
        )
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].employee_id, active.id);
    }

    #[test]
    fn test_invalid_employee_aborts_whole_calculation() {
        let good = hourly_employee("100");
        let mut bad = hourly_employee("100");
        bad.hourly_rate = dec("-1");
        let period = period(1, 15);

        let result = calculate_period_items(
            &period,
            &[good, bad],
            &[],
            &PayrollConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_recalculation_is_deterministic() {
        let emp = hourly_employee("62.50");
        let period = period(1, 15);
        let attendance = vec![
            record(&emp, 3, time(8, 5), time(17, 0)),
            record(&emp, 4, time(8, 0), time(16, 45)),
        ];
        let config = config_from_yaml(
            "deductions:\n  - { name: SS, kind: percentage, value: 5 }",
        );

        let first = calculate_period_items(&period, &[emp.clone()], &attendance, &config).unwrap();
        let second = calculate_period_items(&period, &[emp], &attendance, &config).unwrap();
        assert_eq!(first, second);
    }
}
