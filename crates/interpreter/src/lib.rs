//! Brief interpreter — classifies a free-text marketing brief into a
//! structured `CampaignSpec`.
//!
//! This is a rule engine, not a model: a closed, ordered table of intent
//! patterns is evaluated first-match-wins, so outputs are enumerable and the
//! whole stage is total and pure. Swapping in a learned classifier means
//! replacing the keyword match, nothing downstream.

mod intents;

pub use intents::{intent_table, IntentRule};

use copilot_core::CampaignSpec;
use tracing::debug;

/// Classify a brief into a fully populated campaign spec. Total for any
/// input, including the empty string: an unmatched brief falls back to the
/// conservative generic template.
pub fn interpret(brief: &str) -> CampaignSpec {
    let normalized = brief.to_lowercase();

    for rule in intent_table() {
        if rule.matches(&normalized) {
            debug!(intent = rule.name, "Brief matched intent");
            return rule.spec();
        }
    }

    debug!("Brief matched no intent, using generic template");
    intents::generic_template()
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::{Archetype, CampaignType, Channel, Duration};

    #[test]
    fn referral_brief_yields_referral_spec() {
        let spec = interpret("Launch a referral campaign in US and Germany");
        assert_eq!(spec.archetype, Archetype::Referral);
        assert_eq!(spec.campaign_type, CampaignType::Promotional);
        assert!(spec.campaign_name.starts_with("RAF_"));
        assert_eq!(spec.markets, vec!["US", "DE"]);
        assert_eq!(spec.languages, vec!["en", "de"]);
        assert_eq!(spec.duration, Duration::AlwaysOn);

        let promo = spec.promo.expect("referral spec carries promo terms");
        assert_eq!(promo.reward_per_referral, 2.0);
        assert_eq!(promo.max_reward, 10.0);
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        for brief in ["REFER a friend", "Referral push", "please refer"] {
            assert_eq!(interpret(brief).archetype, Archetype::Referral);
        }
    }

    #[test]
    fn unmatched_brief_falls_back_to_generic() {
        let spec = interpret("Send a welcome message");
        assert_eq!(spec.archetype, Archetype::Generic);
        assert_eq!(spec.campaign_type, CampaignType::NonPromotional);
        assert_eq!(spec.channels, vec![Channel::Push]);
        assert!(spec.promo.is_none());
        assert_eq!(spec.reentry_criteria_days, 0);
    }

    #[test]
    fn total_over_degenerate_inputs() {
        let oversized = "x".repeat(100_000);
        for brief in ["", "   ", "日本語のブリーフ", oversized.as_str()] {
            let spec = interpret(brief);
            assert!(!spec.campaign_name.is_empty());
            assert!(!spec.markets.is_empty());
            assert!(!spec.languages.is_empty());
            assert!(!spec.channels.is_empty());
            assert!(!spec.exit_criteria.is_empty());
        }
    }

    #[test]
    fn every_table_entry_produces_a_well_formed_spec() {
        for rule in intent_table() {
            let spec = rule.spec();
            assert_eq!(spec.archetype, rule.archetype, "intent {}", rule.name);
            assert!(!spec.markets.is_empty());
            assert!(!spec.languages.is_empty());
            assert!(!spec.channels.is_empty());
            assert!(!spec.exit_criteria.is_empty());
        }
    }
}
