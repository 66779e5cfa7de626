//! The individual QA rules. Each check appends findings in input order so
//! the overall report is reproducible and diffable across runs.

use std::collections::BTreeMap;

use copilot_core::{
    mutually_exclusive, CampaignSpec, CampaignType, Channel, Condition, JourneyBlueprint,
    MultiLanguageMessages, QaCheck, QaFinding, QaSeverity,
};

fn blocking(check: QaCheck, message: String) -> QaFinding {
    QaFinding {
        check,
        severity: QaSeverity::Blocking,
        message,
    }
}

fn warning(check: QaCheck, message: String) -> QaFinding {
    QaFinding {
        check,
        severity: QaSeverity::Warning,
        message,
    }
}

/// Markets, languages, channels, and exit criteria must all be non-empty.
pub(crate) fn non_emptiness(spec: &CampaignSpec, findings: &mut Vec<QaFinding>) {
    let fields: [(&str, bool); 4] = [
        ("markets", spec.markets.is_empty()),
        ("languages", spec.languages.is_empty()),
        ("channels", spec.channels.is_empty()),
        ("exit_criteria", spec.exit_criteria.is_empty()),
    ];
    for (name, empty) in fields {
        if empty {
            findings.push(blocking(
                QaCheck::NonEmptiness,
                format!("spec.{name} must not be empty"),
            ));
        }
    }
}

/// Promotional campaigns must carry well-formed promo terms.
pub(crate) fn promo_consistency(spec: &CampaignSpec, findings: &mut Vec<QaFinding>) {
    match (&spec.campaign_type, &spec.promo) {
        (CampaignType::Promotional, None) => {
            findings.push(blocking(
                QaCheck::PromoConsistency,
                "promotional campaign has no promo terms".to_string(),
            ));
        }
        (CampaignType::Promotional, Some(promo)) => {
            if promo.reward_per_referral < 0.0 {
                findings.push(blocking(
                    QaCheck::PromoConsistency,
                    format!(
                        "promo.reward_per_referral must be non-negative, got {}",
                        promo.reward_per_referral
                    ),
                ));
            }
            if promo.max_reward < promo.reward_per_referral {
                findings.push(blocking(
                    QaCheck::PromoConsistency,
                    format!(
                        "promo.max_reward ({}) is below reward_per_referral ({})",
                        promo.max_reward, promo.reward_per_referral
                    ),
                ));
            }
            if promo.currency.trim().is_empty() {
                findings.push(blocking(
                    QaCheck::PromoConsistency,
                    "promo.currency must not be empty".to_string(),
                ));
            }
        }
        (CampaignType::NonPromotional, Some(_)) => {
            findings.push(warning(
                QaCheck::PromoConsistency,
                "promo terms present on a non-promotional campaign".to_string(),
            ));
        }
        (CampaignType::NonPromotional, None) => {}
    }
}

/// Every step channel must be declared on the spec; a declared channel no
/// step uses is dead configuration.
pub(crate) fn channel_coverage(
    spec: &CampaignSpec,
    journey: &JourneyBlueprint,
    findings: &mut Vec<QaFinding>,
) {
    for step in &journey.steps {
        if !spec.channels.contains(&step.channel) {
            findings.push(blocking(
                QaCheck::ChannelCoverage,
                format!(
                    "step `{}` uses channel `{}` not declared in spec.channels",
                    step.id, step.channel
                ),
            ));
        }
    }
    for channel in &spec.channels {
        if !journey.steps.iter().any(|s| s.channel == *channel) {
            findings.push(warning(
                QaCheck::ChannelCoverage,
                format!("channel `{channel}` is declared but no journey step references it"),
            ));
        }
    }
}

/// Every referenced message key must resolve for every spec language with
/// the fields the step's channel requires.
pub(crate) fn completeness(
    spec: &CampaignSpec,
    journey: &JourneyBlueprint,
    messages: &MultiLanguageMessages,
    findings: &mut Vec<QaFinding>,
) {
    for step in &journey.steps {
        for language in &spec.languages {
            let Some(content) = messages
                .get(language)
                .and_then(|table| table.get(&step.message_key))
            else {
                findings.push(blocking(
                    QaCheck::Completeness,
                    format!(
                        "message key `{}` has no `{language}` entry",
                        step.message_key
                    ),
                ));
                continue;
            };

            if content.body.trim().is_empty() {
                findings.push(blocking(
                    QaCheck::Completeness,
                    format!(
                        "message `{}` (`{language}`) has an empty body",
                        step.message_key
                    ),
                ));
            }
            if step.channel.requires_subject() {
                if content.subject.as_deref().map_or(true, str::is_empty) {
                    findings.push(blocking(
                        QaCheck::Completeness,
                        format!(
                            "message `{}` (`{language}`) is missing the subject required for email step `{}`",
                            step.message_key, step.id
                        ),
                    ));
                }
            } else if content.title.as_deref().map_or(true, str::is_empty) {
                findings.push(blocking(
                    QaCheck::Completeness,
                    format!(
                        "message `{}` (`{language}`) is missing the title required for {} step `{}`",
                        step.message_key, step.channel, step.id
                    ),
                ));
            }
        }
    }
}

/// Steps sharing a day and a channel must carry mutually exclusive
/// conditions (no user gets two sends); a day whose steps gate on only one
/// side of an opt-in/opt-out split leaves the other side with nothing.
pub(crate) fn condition_partitioning(journey: &JourneyBlueprint, findings: &mut Vec<QaFinding>) {
    let mut by_day: BTreeMap<u32, Vec<&copilot_core::JourneyStep>> = BTreeMap::new();
    for step in &journey.steps {
        by_day.entry(step.day).or_default().push(step);
    }

    for (day, steps) in &by_day {
        for (i, a) in steps.iter().enumerate() {
            for b in &steps[i + 1..] {
                if a.channel == b.channel && !mutually_exclusive(&a.conditions, &b.conditions) {
                    findings.push(blocking(
                        QaCheck::ConditionPartitioning,
                        format!(
                            "steps `{}` and `{}` on day {day} share channel `{}` without mutually exclusive conditions",
                            a.id, b.id, a.channel
                        ),
                    ));
                }
            }
        }

        // Opt-gate exhaustiveness per channel: gating on one side only is a
        // coverage gap, not a blocker.
        for gate in [Channel::Push, Channel::Inbox, Channel::SlideUp, Channel::Email] {
            let opted_in = steps
                .iter()
                .any(|s| s.conditions.contains(&Condition::OptIn(gate)));
            let opted_out = steps
                .iter()
                .any(|s| s.conditions.contains(&Condition::OptOut(gate)));
            if opted_in != opted_out {
                let (present, absent) = if opted_in {
                    ("opt_in", "opt_out")
                } else {
                    ("opt_out", "opt_in")
                };
                findings.push(warning(
                    QaCheck::ConditionPartitioning,
                    format!(
                        "day {day}: steps gate on `{gate}_{present}` but no step covers `{gate}_{absent}` users"
                    ),
                ));
            }
        }
    }
}

/// An offer must not lapse before the next touchpoint on the same channel.
pub(crate) fn expiry_consistency(journey: &JourneyBlueprint, findings: &mut Vec<QaFinding>) {
    let mut by_channel: BTreeMap<Channel, Vec<&copilot_core::JourneyStep>> = BTreeMap::new();
    for step in &journey.steps {
        by_channel.entry(step.channel).or_default().push(step);
    }

    for steps in by_channel.values_mut() {
        steps.sort_by_key(|s| s.day);
        for pair in steps.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let gap = next.day - current.day;
            if let Some(expiry) = current.expiry_days {
                if expiry < gap {
                    findings.push(warning(
                        QaCheck::ExpiryConsistency,
                        format!(
                            "step `{}` expires after {expiry} days but the next `{}` step is {gap} days later",
                            current.id, current.channel
                        ),
                    ));
                }
            }
        }
    }
}
