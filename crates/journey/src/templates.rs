//! Fixed journey templates, one per archetype.
//!
//! Template shape rules:
//! - On any day, at most one step per channel; steps sharing a day partition
//!   the audience on the push opt-in/opt-out gate so exactly one in-app
//!   surface fires per user.
//! - The generic template is the structural floor: a single unconditional
//!   send. Every richer template is a superset of that shape.
//!
//! Static template hygiene (partitioning, catalog coverage of message keys)
//! is asserted by tests, not revalidated at runtime.

use copilot_core::{
    CampaignSpec, Channel, ComparisonOp, Condition, JourneyBlueprint, JourneyStep,
};

/// Referral threshold used when promo terms are missing or malformed.
pub const DEFAULT_REFERRAL_CAP: u32 = 5;

/// Offer window for referral touchpoints, in days from send.
const REFERRAL_EXPIRY_DAYS: u32 = 15;

/// Eight touchpoints over days 1/14/30: a push nudge for opted-in users and
/// non-push fallbacks for everyone else, all gated on the user still being
/// below the referral reward cap.
pub fn referral_journey(spec: &CampaignSpec) -> JourneyBlueprint {
    let cap = spec
        .promo
        .as_ref()
        .and_then(|p| p.referral_cap())
        .unwrap_or(DEFAULT_REFERRAL_CAP);
    let below_cap = Condition::compare("referrals", ComparisonOp::Lt, cap as i64);

    let step = |id: &str, day: u32, channel: Channel, gate: Condition, key: &str| JourneyStep {
        id: id.to_string(),
        day,
        channel,
        conditions: vec![below_cap.clone(), gate],
        expiry_days: Some(REFERRAL_EXPIRY_DAYS),
        message_key: key.to_string(),
    };
    let opt_in = Condition::OptIn(Channel::Push);
    let opt_out = Condition::OptOut(Channel::Push);

    JourneyBlueprint {
        name: journey_name(spec),
        steps: vec![
            step("day1_push", 1, Channel::Push, opt_in.clone(), "raf_day1_push"),
            step("day1_inbox", 1, Channel::Inbox, opt_out.clone(), "raf_day1_inbox"),
            step("day14_push", 14, Channel::Push, opt_in.clone(), "raf_day14_push"),
            step("day14_slideup", 14, Channel::SlideUp, opt_out.clone(), "raf_day14_slideup"),
            step("day14_email", 14, Channel::Email, opt_out.clone(), "raf_day14_email"),
            step("day30_push", 30, Channel::Push, opt_in, "raf_day30_push"),
            step("day30_slideup", 30, Channel::SlideUp, opt_out.clone(), "raf_day30_slideup"),
            step("day30_inbox", 30, Channel::Inbox, opt_out, "raf_day30_inbox"),
        ],
    }
}

/// Minimal single-send journey: one push on day 1, no conditions, no expiry.
pub fn generic_journey(spec: &CampaignSpec) -> JourneyBlueprint {
    JourneyBlueprint {
        name: journey_name(spec),
        steps: vec![JourneyStep {
            id: "day1_push".to_string(),
            day: 1,
            channel: Channel::Push,
            conditions: Vec::new(),
            expiry_days: None,
            message_key: "generic_day1_push".to_string(),
        }],
    }
}

fn journey_name(spec: &CampaignSpec) -> String {
    format!("{}_journey", spec.campaign_name)
}
