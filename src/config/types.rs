//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed rule configuration that is
//! deserialized from YAML files or API payloads. The original ad-hoc
//! loosely-typed rule records become tagged enums here, normalized once at
//! load time with documented fallbacks for unrecognized strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a rule's amount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Amount is a percentage of the running base.
    Percentage,
    /// Amount is a fixed quantity, independent of the base.
    Fixed,
}

impl RuleKind {
    /// Maps a raw kind string to a kind; unrecognized strings fall back
    /// to `Percentage`.
    fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "fixed" => RuleKind::Fixed,
            _ => RuleKind::Percentage,
        }
    }
}

/// Which base a rule's amount is taken from, and whether it reduces the
/// running base for subsequent rules in the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleBase {
    /// Amount taken from the running base without reducing it further.
    Gross,
    /// Amount reduces the running base for subsequent rules in this list.
    PreNet,
}

impl RuleBase {
    /// Maps a raw base string to a base selector; anything starting with
    /// "pre" selects `PreNet`, everything else falls back to `Gross`.
    fn from_raw(raw: &str) -> Self {
        if raw.trim().starts_with("pre") {
            RuleBase::PreNet
        } else {
            RuleBase::Gross
        }
    }
}

/// The maximum stored length of a rule name.
const RULE_NAME_MAX: usize = 50;

/// Raw rule record as it appears in YAML or JSON payloads.
///
/// All fields are optional; missing values get documented defaults. A
/// numeric `value` that cannot be parsed fails deserialization outright
/// rather than silently coercing to 0.
#[derive(Debug, Clone, Deserialize)]
struct RawRule {
    #[serde(default)]
    name: String,
    #[serde(default)]
    kind: String,
    #[serde(default)]
    value: Decimal,
    #[serde(default)]
    base: String,
}

/// A single deduction or tax rule.
///
/// Rule lists are evaluated strictly in list order; see
/// [`crate::calculation::evaluate_rules`].
///
/// # Example
///
/// ```
/// use nomina_engine::config::{Rule, RuleBase, RuleKind};
///
/// let rule: Rule = serde_yaml::from_str(
///     "{ name: Social Security, kind: percentage, value: 5.0, base: gross }",
/// ).unwrap();
/// assert_eq!(rule.kind, RuleKind::Percentage);
/// assert_eq!(rule.base, RuleBase::Gross);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRule")]
pub struct Rule {
    /// The rule's display name; may be empty, in which case the evaluator
    /// substitutes a generic label for the pass ("Deduction"/"Tax").
    pub name: String,
    /// How the amount is computed.
    pub kind: RuleKind,
    /// Percentage (0-100) for percentage rules, absolute amount for fixed
    /// rules. Missing values default to 0.
    pub value: Decimal,
    /// Which base the amount is taken from.
    pub base: RuleBase,
}

impl From<RawRule> for Rule {
    fn from(raw: RawRule) -> Self {
        let name: String = raw.name.trim().chars().take(RULE_NAME_MAX).collect();
        Rule {
            name,
            kind: RuleKind::from_raw(&raw.kind),
            value: raw.value,
            base: RuleBase::from_raw(&raw.base),
        }
    }
}

// Serialize side of the enums needs a Deserialize impl for round-tripping
// stored configs; route it through the same lenient mapping.
impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RuleKind::from_raw(&raw))
    }
}

impl<'de> Deserialize<'de> for RuleBase {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RuleBase::from_raw(&raw))
    }
}

/// The process-wide payroll configuration: currency plus the ordered
/// deduction and tax rule lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Currency symbol used for display/export (e.g. "L").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Deduction rules, evaluated in list order against gross pay.
    #[serde(default)]
    pub deductions: Vec<Rule>,
    /// Tax rules, evaluated in list order against gross minus deductions.
    #[serde(default)]
    pub taxes: Vec<Rule>,
}

fn default_currency() -> String {
    "L".to_string()
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            deductions: Vec::new(),
            taxes: Vec::new(),
        }
    }
}
