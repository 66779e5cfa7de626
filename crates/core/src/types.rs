use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conditions::Condition;

/// Campaign archetype, decided once by the brief interpreter and dispatched
/// on by every downstream stage. The `RAF_` naming convention the activation
/// platform expects is derived from this, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Referral,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignType {
    Promotional,
    NonPromotional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    AlwaysOn,
    OneTime,
}

/// Delivery channel. Closed set: the activation platform supports exactly
/// these surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Push,
    Inbox,
    SlideUp,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Push => "push",
            Channel::Inbox => "inbox",
            Channel::SlideUp => "slide_up",
            Channel::Email => "email",
        }
    }

    /// Email-like channels carry a subject line instead of a title.
    pub fn requires_subject(&self) -> bool {
        matches!(self, Channel::Email)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push" => Ok(Channel::Push),
            "inbox" => Ok(Channel::Inbox),
            "slide_up" => Ok(Channel::SlideUp),
            "email" => Ok(Channel::Email),
            other => Err(format!("unknown channel: {other}")),
        }
    }
}

/// Reward terms for promotional campaigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoTerms {
    pub reward_per_referral: f64,
    pub max_reward: f64,
    pub currency: String,
}

impl PromoTerms {
    /// How many referrals a user can be rewarded for before hitting the cap.
    /// `None` when the terms are malformed; QA reports that separately.
    pub fn referral_cap(&self) -> Option<u32> {
        if self.reward_per_referral > 0.0 && self.max_reward >= self.reward_per_referral {
            Some((self.max_reward / self.reward_per_referral).floor() as u32)
        } else {
            None
        }
    }
}

/// Canonical statement of campaign intent, produced by the brief interpreter.
///
/// Open-ended maps use `BTreeMap` so serialized output is byte-identical
/// across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSpec {
    pub campaign_name: String,
    pub archetype: Archetype,
    pub campaign_type: CampaignType,
    pub markets: Vec<String>,
    pub languages: Vec<String>,
    pub duration: Duration,
    pub targeting: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<PromoTerms>,
    pub channels: Vec<Channel>,
    pub reentry_criteria_days: u32,
    pub exit_criteria: Vec<String>,
    pub use_braze_ai: BTreeMap<String, bool>,
}

/// One scheduled touchpoint within a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub id: String,
    /// Day offset from journey entry, not a calendar date.
    pub day: u32,
    pub channel: Channel,
    /// Empty means "always eligible".
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_days: Option<u32>,
    pub message_key: String,
}

/// Touchpoint schedule derived from a `CampaignSpec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyBlueprint {
    pub name: String,
    pub steps: Vec<JourneyStep>,
}

/// Localized content for one message key on one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
}

/// `language -> message_key -> content`. A missing entry is a structural
/// signal consumed by QA, never a silent runtime fallback.
pub type MultiLanguageMessages = BTreeMap<String, BTreeMap<String, MessageContent>>;

/// Which QA rule produced a finding. Variant order is the order checks run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaCheck {
    NonEmptiness,
    PromoConsistency,
    ChannelCoverage,
    Completeness,
    ConditionPartitioning,
    ExpiryConsistency,
}

/// Blocking findings gate launch; warnings never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaSeverity {
    Blocking,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaFinding {
    pub check: QaCheck,
    pub severity: QaSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaReport {
    pub passed: bool,
    pub issues: Vec<QaFinding>,
    pub warnings: Vec<QaFinding>,
}

impl QaReport {
    /// Splits findings by severity, preserving order. `passed` is true iff
    /// there are no blocking findings.
    pub fn from_findings(findings: Vec<QaFinding>) -> Self {
        let (issues, warnings): (Vec<_>, Vec<_>) = findings
            .into_iter()
            .partition(|f| f.severity == QaSeverity::Blocking);
        Self {
            passed: issues.is_empty(),
            issues,
            warnings,
        }
    }
}
