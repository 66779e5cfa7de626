//! The closed intent table: each entry pairs a keyword pattern with the spec
//! template it produces. Adding a campaign archetype is a table addition,
//! not new branching logic.

use std::collections::BTreeMap;

use copilot_core::{
    Archetype, CampaignSpec, CampaignType, Channel, Duration, PromoTerms,
};

/// One row of the intent table.
pub struct IntentRule {
    pub name: &'static str,
    /// Case-insensitive substrings; any hit selects this intent.
    pub keywords: &'static [&'static str],
    pub archetype: Archetype,
    template: fn() -> CampaignSpec,
}

impl IntentRule {
    /// `brief` must already be lowercased by the caller.
    pub fn matches(&self, brief: &str) -> bool {
        self.keywords.iter().any(|kw| brief.contains(kw))
    }

    pub fn spec(&self) -> CampaignSpec {
        (self.template)()
    }
}

static INTENTS: [IntentRule; 1] = [IntentRule {
    name: "referral",
    keywords: &["refer"],
    archetype: Archetype::Referral,
    template: referral_template,
}];

/// Intent rules in priority order; first match wins.
pub fn intent_table() -> &'static [IntentRule] {
    &INTENTS
}

/// Always-on refer-a-friend campaign for the US and German markets.
fn referral_template() -> CampaignSpec {
    CampaignSpec {
        campaign_name: "RAF_US_DE".to_string(),
        archetype: Archetype::Referral,
        campaign_type: CampaignType::Promotional,
        markets: vec!["US".to_string(), "DE".to_string()],
        languages: vec!["en".to_string(), "de".to_string()],
        duration: Duration::AlwaysOn,
        targeting: BTreeMap::from([
            ("days_since_app_opened".to_string(), ">30".to_string()),
            ("referrals_count".to_string(), "<5".to_string()),
        ]),
        promo: Some(PromoTerms {
            reward_per_referral: 2.0,
            max_reward: 10.0,
            currency: "Club Cash".to_string(),
        }),
        channels: vec![
            Channel::Push,
            Channel::Inbox,
            Channel::SlideUp,
            Channel::Email,
        ],
        reentry_criteria_days: 90,
        exit_criteria: vec![
            "5_referrals".to_string(),
            "30_days_inactive".to_string(),
        ],
        use_braze_ai: BTreeMap::from([
            ("intelligent_timing".to_string(), true),
            ("channel_optimization".to_string(), true),
            ("variant_optimization".to_string(), true),
        ]),
    }
}

/// Conservative fallback: single-market, push-only, one-time send.
pub fn generic_template() -> CampaignSpec {
    CampaignSpec {
        campaign_name: "Generic_US".to_string(),
        archetype: Archetype::Generic,
        campaign_type: CampaignType::NonPromotional,
        markets: vec!["US".to_string()],
        languages: vec!["en".to_string()],
        duration: Duration::OneTime,
        targeting: BTreeMap::new(),
        promo: None,
        channels: vec![Channel::Push],
        reentry_criteria_days: 0,
        exit_criteria: vec!["one_message_sent".to_string()],
        use_braze_ai: BTreeMap::from([("intelligent_timing".to_string(), true)]),
    }
}
