//! Property-based tests for the pure calculation primitives.

use chrono::NaiveTime;
use proptest::prelude::*;
use rust_decimal::Decimal;

use nomina_engine::calculation::{
    evaluate_rules, gross_pay, hours_between, lateness_minutes, round_money,
};
use nomina_engine::config::{Rule, RuleBase, RuleKind};
use nomina_engine::models::{Employee, PayType};
use uuid::Uuid;

fn clock_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn percentage_rule() -> impl Strategy<Value = Rule> {
    ("[A-Za-z ]{1,20}", 0i64..10_000, prop_oneof![Just(RuleBase::Gross), Just(RuleBase::PreNet)])
        .prop_map(|(name, basis_points, base)| Rule {
            name,
            kind: RuleKind::Percentage,
            value: Decimal::new(basis_points, 2),
            base,
        })
}

fn hourly_employee(rate: Decimal) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "Employee".to_string(),
        identification: None,
        position: String::new(),
        pay_type: PayType::Hourly,
        hourly_rate: rate,
        monthly_salary: Decimal::ZERO,
        scheduled_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        active: true,
    }
}

proptest! {
    #[test]
    fn hours_between_is_within_a_day(clock_in in clock_time(), clock_out in clock_time()) {
        let hours = hours_between(Some(clock_in), Some(clock_out));
        prop_assert!(hours >= Decimal::ZERO);
        prop_assert!(hours < Decimal::from(24));
    }

    #[test]
    fn hours_between_identical_times_is_zero(t in clock_time()) {
        prop_assert_eq!(hours_between(Some(t), Some(t)), Decimal::ZERO);
    }

    #[test]
    fn hours_between_split_shifts_cover_a_full_day(
        clock_in in clock_time(),
        clock_out in clock_time(),
    ) {
        prop_assume!(clock_in != clock_out);
        // Whole-minute inputs round cleanly, so the two halves are exact
        // complements.
        let forward = hours_between(Some(clock_in), Some(clock_out));
        let backward = hours_between(Some(clock_out), Some(clock_in));
        prop_assert_eq!(forward + backward, Decimal::from(24));
    }

    #[test]
    fn lateness_is_never_negative(actual in clock_time(), scheduled in clock_time()) {
        let late = lateness_minutes(Some(actual), scheduled);
        prop_assert!(late >= 0);
        prop_assert!(late < 24 * 60);
    }

    #[test]
    fn lateness_of_early_or_exact_arrival_is_zero(
        scheduled in clock_time(),
        actual in clock_time(),
    ) {
        prop_assume!(actual <= scheduled);
        prop_assert_eq!(lateness_minutes(Some(actual), scheduled), 0);
    }

    #[test]
    fn empty_rule_list_deducts_nothing(base in money()) {
        let outcome = evaluate_rules(&[], base, "Deduction");
        prop_assert!(outcome.amounts.is_empty());
        prop_assert_eq!(outcome.total(), Decimal::ZERO);
    }

    #[test]
    fn percentage_rules_never_produce_negative_amounts(
        base in money(),
        rules in prop::collection::vec(percentage_rule(), 0..6),
    ) {
        let outcome = evaluate_rules(&rules, base, "Deduction");
        for amount in outcome.amounts.values() {
            prop_assert!(*amount >= Decimal::ZERO);
        }
        prop_assert!(outcome.total() >= Decimal::ZERO);
    }

    #[test]
    fn hourly_gross_scales_with_rate(hours in money(), rate in money()) {
        let employee = hourly_employee(rate);
        let gross = gross_pay(&employee, hours, 15);
        prop_assert_eq!(gross, round_money(hours * rate));
    }

    #[test]
    fn round_money_always_carries_two_decimals(cents in -10_000_000i64..10_000_000, scale in 0u32..8) {
        let value = Decimal::new(cents, scale);
        let rounded = round_money(value);
        prop_assert_eq!(rounded.scale(), 2);
        // Rounding moves the value by at most half a cent.
        let delta = (rounded - value).abs();
        prop_assert!(delta <= Decimal::new(5, 3));
    }
}
