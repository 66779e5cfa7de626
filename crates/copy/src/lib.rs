//! Copy generator — resolves every message key a journey references into
//! localized content for every language the spec targets.
//!
//! Content lives in a static catalog keyed `archetype × language ×
//! message_key`; adding a language is a data addition. A language the
//! archetype does not support is omitted from the output rather than faked
//! or thrown on, so the QA stage is the single place the gap surfaces.

pub mod catalog;

use std::collections::{BTreeMap, BTreeSet};

use copilot_core::{CampaignSpec, JourneyBlueprint, MultiLanguageMessages};
use tracing::{debug, warn};

/// Generate the localized message table for a journey. Total: unsupported
/// languages and unknown keys produce structural gaps, never errors.
pub fn generate(spec: &CampaignSpec, journey: &JourneyBlueprint) -> MultiLanguageMessages {
    let referenced: BTreeSet<&str> = journey
        .steps
        .iter()
        .map(|s| s.message_key.as_str())
        .collect();

    let mut messages = MultiLanguageMessages::new();
    for language in &spec.languages {
        let Some(table) = catalog::language_table(spec.archetype, language) else {
            warn!(
                archetype = ?spec.archetype,
                language = language.as_str(),
                "No copy authored for requested language"
            );
            continue;
        };

        let entries: BTreeMap<_, _> = table
            .into_iter()
            .filter(|(key, _)| referenced.contains(key.as_str()))
            .collect();
        messages.insert(language.clone(), entries);
    }

    debug!(
        languages = messages.len(),
        keys = referenced.len(),
        "Messages generated"
    );
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::Channel;
    use copilot_interpreter::interpret;
    use copilot_journey::build;

    #[test]
    fn referral_copy_covers_every_step_in_both_languages() {
        let spec = interpret("refer a friend");
        let journey = build(&spec);
        let messages = generate(&spec, &journey);

        assert_eq!(messages.keys().collect::<Vec<_>>(), vec!["de", "en"]);
        for step in &journey.steps {
            for language in &spec.languages {
                let content = messages[language]
                    .get(&step.message_key)
                    .unwrap_or_else(|| panic!("{} missing {}", language, step.message_key));
                assert!(!content.body.is_empty());
                if step.channel.requires_subject() {
                    assert!(content.subject.is_some(), "{} needs subject", step.message_key);
                } else {
                    assert!(content.title.is_some(), "{} needs title", step.message_key);
                }
            }
        }
    }

    #[test]
    fn output_contains_exactly_the_referenced_keys() {
        let spec = interpret("send a welcome message");
        let journey = build(&spec);
        let messages = generate(&spec, &journey);

        assert_eq!(messages.len(), 1);
        let en = &messages["en"];
        assert_eq!(en.len(), 1);
        assert!(en.contains_key("generic_day1_push"));
    }

    #[test]
    fn unsupported_language_is_omitted_not_faked() {
        let mut spec = interpret("send a welcome message");
        spec.languages.push("fr".to_string());
        let journey = build(&spec);
        let messages = generate(&spec, &journey);

        assert!(messages.contains_key("en"));
        assert!(!messages.contains_key("fr"));
    }

    /// Reference-data integrity: every archetype's own journey template must
    /// be fully covered by its catalog, in every supported language, with the
    /// channel-required fields. A failure here is a bug in the static tables.
    #[test]
    fn catalog_is_complete_against_journey_templates() {
        for brief in ["refer a friend", "send a welcome message"] {
            let spec = interpret(brief);
            let journey = build(&spec);
            for language in catalog::supported_languages(spec.archetype) {
                let table = catalog::language_table(spec.archetype, language)
                    .expect("declared language has a table");
                for step in &journey.steps {
                    let content = table.get(&step.message_key).unwrap_or_else(|| {
                        panic!("catalog missing {}/{}", language, step.message_key)
                    });
                    assert!(!content.body.is_empty());
                    match step.channel {
                        Channel::Email => assert!(content.subject.is_some()),
                        _ => assert!(content.title.is_some()),
                    }
                }
            }
        }
    }
}
