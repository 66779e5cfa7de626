//! QA engine — validates a (spec, journey, messages) triple for internal
//! consistency and launch policy.
//!
//! Pure function of its inputs: no I/O, no clock, no hidden state. Checks
//! run in a fixed order and walk their inputs in a fixed order, so identical
//! inputs always produce an identical report, finding order included.

mod checks;

use copilot_core::{CampaignSpec, JourneyBlueprint, MultiLanguageMessages, QaReport};
use tracing::debug;

/// Run every QA check and fold the findings into a report. Blocking
/// findings gate launch; warnings never do.
pub fn validate(
    spec: &CampaignSpec,
    journey: &JourneyBlueprint,
    messages: &MultiLanguageMessages,
) -> QaReport {
    let mut findings = Vec::new();

    checks::non_emptiness(spec, &mut findings);
    checks::promo_consistency(spec, &mut findings);
    checks::channel_coverage(spec, journey, &mut findings);
    checks::completeness(spec, journey, messages, &mut findings);
    checks::condition_partitioning(journey, &mut findings);
    checks::expiry_consistency(journey, &mut findings);

    let report = QaReport::from_findings(findings);
    debug!(
        passed = report.passed,
        issues = report.issues.len(),
        warnings = report.warnings.len(),
        "QA complete"
    );
    report
}
