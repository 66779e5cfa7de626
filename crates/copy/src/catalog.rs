//! Static message catalog: `archetype × language × message_key -> content`.
//!
//! Tables are plain data built on demand; the pipeline holds no mutable
//! state. Completeness against each archetype's journey template is asserted
//! in this crate's tests.

use std::collections::BTreeMap;

use copilot_core::{Archetype, MessageContent};

/// Languages an archetype has authored copy for, in catalog order.
pub fn supported_languages(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::Referral => &["en", "de"],
        Archetype::Generic => &["en"],
    }
}

/// Full message table for one archetype/language pair, or `None` when no
/// copy has been authored for that language.
pub fn language_table(
    archetype: Archetype,
    language: &str,
) -> Option<BTreeMap<String, MessageContent>> {
    match (archetype, language) {
        (Archetype::Referral, "en") => Some(referral_en()),
        (Archetype::Referral, "de") => Some(referral_de()),
        (Archetype::Generic, "en") => Some(generic_en()),
        _ => None,
    }
}

fn inapp(title: &str, body: &str, link: &str) -> MessageContent {
    MessageContent {
        title: Some(title.to_string()),
        subject: None,
        body: body.to_string(),
        link_target: Some(link.to_string()),
    }
}

fn email(subject: &str, body: &str, link: &str) -> MessageContent {
    MessageContent {
        title: None,
        subject: Some(subject.to_string()),
        body: body.to_string(),
        link_target: Some(link.to_string()),
    }
}

const REFERRAL_LINK: &str = "app://club/referrals";
const REFERRAL_WEB_LINK: &str = "https://club.example.com/referrals";

fn referral_en() -> BTreeMap<String, MessageContent> {
    BTreeMap::from([
        (
            "raf_day1_push".to_string(),
            inapp(
                "Invite a friend, earn Club Cash",
                "Share your love for Family Club. When a friend joins and scans their first pack, you both earn rewards.",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day1_inbox".to_string(),
            inapp(
                "Start earning with referrals",
                "Invite friends to join Family Club and earn Club Cash together. Every referral counts!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_push".to_string(),
            inapp(
                "Still time to refer friends",
                "You can still earn rewards by inviting friends to Family Club. Don't miss out on Club Cash!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_slideup".to_string(),
            inapp(
                "Refer a friend today",
                "Share Family Club with friends and earn rewards. The more you refer, the more you earn!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_email".to_string(),
            email(
                "Earn more Club Cash by referring friends",
                "Hi there! You still have time to invite friends to Family Club and earn rewards. When your friends join and scan their first pack, you both get Club Cash. Start sharing today!",
                REFERRAL_WEB_LINK,
            ),
        ),
        (
            "raf_day30_push".to_string(),
            inapp(
                "Last chance to refer friends",
                "This is your final opportunity to earn Club Cash through referrals. Invite friends to Family Club now!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day30_slideup".to_string(),
            inapp(
                "Final referral opportunity",
                "Don't miss your last chance to earn rewards. Refer friends to Family Club and get Club Cash!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day30_inbox".to_string(),
            inapp(
                "One last referral reminder",
                "This is your final chance to earn Club Cash by referring friends. Share Family Club with your network today!",
                REFERRAL_LINK,
            ),
        ),
    ])
}

fn referral_de() -> BTreeMap<String, MessageContent> {
    BTreeMap::from([
        (
            "raf_day1_push".to_string(),
            inapp(
                "Freund:in einladen, Club Cash sichern",
                "Empfiehl den Family Club. Wenn eine Freund:in beitritt und zum ersten Mal scannt, erhaltet ihr beide eine Belohnung.",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day1_inbox".to_string(),
            inapp(
                "Mit Empfehlungen verdienen",
                "Lade Freund:innen ein, dem Family Club beizutreten, und verdient gemeinsam Club Cash. Jede Empfehlung zählt!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_push".to_string(),
            inapp(
                "Noch Zeit, Freund:innen zu empfehlen",
                "Du kannst immer noch Belohnungen verdienen, indem du Freund:innen in den Family Club einlädst. Verpasse kein Club Cash!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_slideup".to_string(),
            inapp(
                "Heute eine Freund:in empfehlen",
                "Teile den Family Club mit Freund:innen und verdiene Belohnungen. Je mehr du empfiehlst, desto mehr verdienst du!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day14_email".to_string(),
            email(
                "Mehr Club Cash durch Empfehlungen verdienen",
                "Hallo! Du hast noch Zeit, Freund:innen in den Family Club einzuladen und Belohnungen zu verdienen. Wenn deine Freund:innen beitreten und zum ersten Mal scannen, erhaltet ihr beide Club Cash. Fang noch heute an zu teilen!",
                REFERRAL_WEB_LINK,
            ),
        ),
        (
            "raf_day30_push".to_string(),
            inapp(
                "Letzte Chance, Freund:innen zu empfehlen",
                "Dies ist deine letzte Gelegenheit, Club Cash durch Empfehlungen zu verdienen. Lade jetzt Freund:innen in den Family Club ein!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day30_slideup".to_string(),
            inapp(
                "Letzte Empfehlungsmöglichkeit",
                "Verpasse nicht deine letzte Chance, Belohnungen zu verdienen. Empfehle Freund:innen den Family Club und erhalte Club Cash!",
                REFERRAL_LINK,
            ),
        ),
        (
            "raf_day30_inbox".to_string(),
            inapp(
                "Eine letzte Empfehlungserinnerung",
                "Dies ist deine letzte Chance, Club Cash durch Empfehlungen zu verdienen. Teile den Family Club noch heute mit deinem Netzwerk!",
                REFERRAL_LINK,
            ),
        ),
    ])
}

fn generic_en() -> BTreeMap<String, MessageContent> {
    BTreeMap::from([(
        "generic_day1_push".to_string(),
        MessageContent {
            title: Some("Welcome to Family Club".to_string()),
            subject: None,
            body: "Thanks for joining! Stay tuned for updates and special offers.".to_string(),
            link_target: None,
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_language_has_a_table() {
        for archetype in [Archetype::Referral, Archetype::Generic] {
            for language in supported_languages(archetype) {
                assert!(language_table(archetype, language).is_some());
            }
        }
    }

    #[test]
    fn languages_share_the_same_key_set() {
        let en: Vec<String> = referral_en().into_keys().collect();
        let de: Vec<String> = referral_de().into_keys().collect();
        assert_eq!(en, de);
    }

    #[test]
    fn unknown_language_yields_none() {
        assert!(language_table(Archetype::Referral, "fr").is_none());
        assert!(language_table(Archetype::Generic, "de").is_none());
    }
}
