//! Ordered deduction/tax rule evaluation.
//!
//! This module applies an ordered list of rules to a starting base amount,
//! producing named monetary components. Later rules see a reduced running
//! base only when an earlier rule in the same list was marked `pre_net`.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::config::{Rule, RuleBase, RuleKind};

use super::time_math::round_money;

/// Label substituted for unnamed rules in a deduction pass.
pub const DEFAULT_DEDUCTION_LABEL: &str = "Deduction";

/// Label substituted for unnamed rules in a tax pass.
pub const DEFAULT_TAX_LABEL: &str = "Tax";

/// The result of evaluating a rule list against a base amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Rule name to computed amount. Repeated names overwrite earlier
    /// entries (last write wins).
    pub amounts: BTreeMap<String, Decimal>,
}

impl RuleOutcome {
    /// Sum of the recorded amounts.
    ///
    /// Note this sums the final map values: when two rules share a name,
    /// only the surviving (last) amount is counted, even though every
    /// evaluated pre-net amount reduced the running base.
    pub fn total(&self) -> Decimal {
        self.amounts.values().copied().sum()
    }
}

/// Evaluates a rule list strictly in list order against a starting base.
///
/// Percentage rules take `round(running_base * value / 100, 2)`; fixed rules
/// take `round(value, 2)`. A `pre_net` rule reduces the running base for
/// subsequent rules in the same list, floored at 0; `gross` rules leave it
/// unchanged (earlier pre-net reductions still carry forward). Unnamed rules
/// are recorded under `default_label`.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::{evaluate_rules, DEFAULT_DEDUCTION_LABEL};
/// use nomina_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config: PayrollConfig = serde_yaml::from_str(r#"
/// deductions:
///   - { name: A, kind: percentage, value: 10, base: pre_net }
///   - { name: B, kind: percentage, value: 10, base: pre_net }
/// "#).unwrap();
///
/// let outcome = evaluate_rules(&config.deductions, Decimal::from(1000), DEFAULT_DEDUCTION_LABEL);
/// assert_eq!(outcome.amounts["A"], Decimal::from(100));
/// assert_eq!(outcome.amounts["B"], Decimal::from(90));
/// assert_eq!(outcome.total(), Decimal::from(190));
/// ```
pub fn evaluate_rules(rules: &[Rule], starting_base: Decimal, default_label: &str) -> RuleOutcome {
    let mut running_base = starting_base;
    let mut amounts = BTreeMap::new();

    for rule in rules {
        let amount = match rule.kind {
            RuleKind::Percentage => {
                round_money(running_base * rule.value / Decimal::ONE_HUNDRED)
            }
            RuleKind::Fixed => round_money(rule.value),
        };

        let name = if rule.name.is_empty() {
            default_label.to_string()
        } else {
            rule.name.clone()
        };
        amounts.insert(name, amount);

        if rule.base == RuleBase::PreNet {
            running_base = (running_base - amount).max(Decimal::ZERO);
        }
    }

    RuleOutcome { amounts }
}
