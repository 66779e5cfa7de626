//! Eligibility condition DSL for journey steps.
//!
//! Conditions serialize as the compact strings the activation platform
//! expects (`"referrals < 5"`, `"push_opt_in"`) but are kept typed inside the
//! pipeline so the QA engine can reason about mutual exclusivity without
//! re-parsing free text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CopilotError;
use crate::types::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Lt => "<",
            ComparisonOp::Le => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
        }
    }
}

impl FromStr for ComparisonOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::Le),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::Ge),
            "==" => Ok(ComparisonOp::Eq),
            "!=" => Ok(ComparisonOp::Ne),
            other => Err(format!("unknown comparison operator: {other}")),
        }
    }
}

/// A single eligibility predicate attached to a journey step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Condition {
    /// Numeric comparison on a user attribute, e.g. `referrals < 5`.
    Compare {
        attribute: String,
        op: ComparisonOp,
        value: i64,
    },
    /// User has opted in to the given channel.
    OptIn(Channel),
    /// User has opted out of the given channel.
    OptOut(Channel),
}

impl Condition {
    /// Shorthand for the common `attribute op value` case.
    pub fn compare(attribute: &str, op: ComparisonOp, value: i64) -> Self {
        Condition::Compare {
            attribute: attribute.to_string(),
            op,
            value,
        }
    }

    /// True when no user state can satisfy both conditions: an opt-in and an
    /// opt-out gate on the same channel, or comparisons whose value ranges on
    /// the same attribute are disjoint.
    pub fn excludes(&self, other: &Condition) -> bool {
        match (self, other) {
            (Condition::OptIn(a), Condition::OptOut(b))
            | (Condition::OptOut(a), Condition::OptIn(b)) => a == b,
            (
                Condition::Compare {
                    attribute: attr_a,
                    op: op_a,
                    value: val_a,
                },
                Condition::Compare {
                    attribute: attr_b,
                    op: op_b,
                    value: val_b,
                },
            ) if attr_a == attr_b => ranges_disjoint(*op_a, *val_a, *op_b, *val_b),
            _ => false,
        }
    }
}

/// True when two condition sets can never both match the same user state,
/// i.e. some pair of their conditions is contradictory. Either set being
/// empty means "always eligible", which excludes nothing.
pub fn mutually_exclusive(a: &[Condition], b: &[Condition]) -> bool {
    a.iter().any(|ca| b.iter().any(|cb| ca.excludes(cb)))
}

/// Disjointness of the integer ranges two comparisons admit. `!=` admits
/// everything except one point, so it only contradicts `==` on that point.
fn ranges_disjoint(op_a: ComparisonOp, val_a: i64, op_b: ComparisonOp, val_b: i64) -> bool {
    match (op_a, op_b) {
        (ComparisonOp::Ne, ComparisonOp::Eq) | (ComparisonOp::Eq, ComparisonOp::Ne) => {
            val_a == val_b
        }
        (ComparisonOp::Ne, _) | (_, ComparisonOp::Ne) => false,
        _ => {
            let (lo_a, hi_a) = bounds(op_a, val_a);
            let (lo_b, hi_b) = bounds(op_b, val_b);
            lo_a > hi_b || lo_b > hi_a
        }
    }
}

/// Closed `[lo, hi]` interval a comparison admits.
fn bounds(op: ComparisonOp, value: i64) -> (i64, i64) {
    match op {
        ComparisonOp::Lt => (i64::MIN, value.saturating_sub(1)),
        ComparisonOp::Le => (i64::MIN, value),
        ComparisonOp::Gt => (value.saturating_add(1), i64::MAX),
        ComparisonOp::Ge => (value, i64::MAX),
        ComparisonOp::Eq => (value, value),
        // handled in ranges_disjoint; full range keeps this total
        ComparisonOp::Ne => (i64::MIN, i64::MAX),
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare {
                attribute,
                op,
                value,
            } => write!(f, "{attribute} {} {value}", op.as_str()),
            Condition::OptIn(channel) => write!(f, "{channel}_opt_in"),
            Condition::OptOut(channel) => write!(f, "{channel}_opt_out"),
        }
    }
}

impl FromStr for Condition {
    type Err = CopilotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(channel) = s.strip_suffix("_opt_in") {
            return channel
                .parse::<Channel>()
                .map(Condition::OptIn)
                .map_err(|e| CopilotError::ConditionParse(format!("bad opt-in condition {s:?}: {e}")));
        }
        if let Some(channel) = s.strip_suffix("_opt_out") {
            return channel
                .parse::<Channel>()
                .map(Condition::OptOut)
                .map_err(|e| CopilotError::ConditionParse(format!("bad opt-out condition {s:?}: {e}")));
        }

        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(attribute), Some(op), Some(value), None) => Ok(Condition::Compare {
                attribute: attribute.to_string(),
                op: op.parse().map_err(CopilotError::ConditionParse)?,
                value: value.parse::<i64>().map_err(|e| {
                    CopilotError::ConditionParse(format!("bad comparison value in {s:?}: {e}"))
                })?,
            }),
            _ => Err(CopilotError::ConditionParse(format!(
                "unparseable condition: {s:?}"
            ))),
        }
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

impl TryFrom<String> for Condition {
    type Error = CopilotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(
            Condition::compare("referrals", ComparisonOp::Lt, 5).to_string(),
            "referrals < 5"
        );
        assert_eq!(Condition::OptIn(Channel::Push).to_string(), "push_opt_in");
        assert_eq!(Condition::OptOut(Channel::Push).to_string(), "push_opt_out");
    }

    #[test]
    fn parse_round_trips() {
        for raw in [
            "referrals < 5",
            "days_since_app_opened > 30",
            "referrals >= 5",
            "push_opt_in",
            "email_opt_out",
        ] {
            let parsed: Condition = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Condition>().is_err());
        assert!("referrals <".parse::<Condition>().is_err());
        assert!("referrals ~ 5".parse::<Condition>().is_err());
        assert!("carrier_pigeon_opt_in".parse::<Condition>().is_err());
    }

    #[test]
    fn parse_failures_carry_the_condition_parse_variant() {
        for raw in ["referrals ~ 5", "carrier_pigeon_opt_in", "referrals < many"] {
            let err = raw.parse::<Condition>().unwrap_err();
            assert!(
                matches!(err, CopilotError::ConditionParse(_)),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn serializes_as_dsl_string() {
        let condition = Condition::compare("referrals", ComparisonOp::Lt, 5);
        assert_eq!(
            serde_json::to_string(&condition).unwrap(),
            "\"referrals < 5\""
        );
        let back: Condition = serde_json::from_str("\"push_opt_in\"").unwrap();
        assert_eq!(back, Condition::OptIn(Channel::Push));
    }

    #[test]
    fn opt_gates_on_same_channel_exclude() {
        let opt_in = Condition::OptIn(Channel::Push);
        let opt_out = Condition::OptOut(Channel::Push);
        assert!(opt_in.excludes(&opt_out));
        assert!(opt_out.excludes(&opt_in));
        assert!(!opt_in.excludes(&Condition::OptOut(Channel::Email)));
    }

    #[test]
    fn disjoint_comparison_ranges_exclude() {
        let below = Condition::compare("referrals", ComparisonOp::Lt, 5);
        let at_or_above = Condition::compare("referrals", ComparisonOp::Ge, 5);
        assert!(below.excludes(&at_or_above));

        let overlapping = Condition::compare("referrals", ComparisonOp::Ge, 3);
        assert!(!below.excludes(&overlapping));

        let other_attribute = Condition::compare("purchases", ComparisonOp::Ge, 5);
        assert!(!below.excludes(&other_attribute));
    }

    #[test]
    fn ne_only_contradicts_eq_on_the_same_point() {
        let ne = Condition::compare("tier", ComparisonOp::Ne, 2);
        let eq_same = Condition::compare("tier", ComparisonOp::Eq, 2);
        let eq_other = Condition::compare("tier", ComparisonOp::Eq, 3);
        assert!(ne.excludes(&eq_same));
        assert!(!ne.excludes(&eq_other));
        assert!(!ne.excludes(&Condition::compare("tier", ComparisonOp::Lt, 10)));
    }

    #[test]
    fn set_level_exclusivity() {
        let a = vec![
            Condition::compare("referrals", ComparisonOp::Lt, 5),
            Condition::OptIn(Channel::Push),
        ];
        let b = vec![
            Condition::compare("referrals", ComparisonOp::Lt, 5),
            Condition::OptOut(Channel::Push),
        ];
        assert!(mutually_exclusive(&a, &b));
        assert!(!mutually_exclusive(&a, &[]));
        assert!(!mutually_exclusive(&[], &[]));
    }
}
