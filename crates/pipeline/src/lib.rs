//! The composed campaign-generation pipeline: brief in, validated campaign
//! bundle out.
//!
//! Strictly sequential and side-effect free: Interpreter → Journey Builder →
//! Copy Generator → QA Engine. Each stage consumes only prior-stage output,
//! so the whole run is deterministic for a fixed copy catalog and can be
//! invoked concurrently across requests without coordination.

use copilot_core::{CampaignSpec, JourneyBlueprint, MultiLanguageMessages, QaReport};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything one pipeline run produces. Immutable once built: applying a
/// fix means editing a copy and re-running the pipeline (or at minimum QA),
/// never patching fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignBundle {
    pub spec: CampaignSpec,
    pub journey: JourneyBlueprint,
    pub messages: MultiLanguageMessages,
    pub qa: QaReport,
}

/// Run the full pipeline on a brief. Total and synchronous; malformed input
/// degrades to the default minimal campaign, and structural defects surface
/// in the QA report rather than as errors.
pub fn run_pipeline(brief: &str) -> CampaignBundle {
    let spec = copilot_interpreter::interpret(brief);
    let journey = copilot_journey::build(&spec);
    let messages = copilot_copy::generate(&spec, &journey);
    let qa = copilot_qa::validate(&spec, &journey, &messages);

    info!(
        campaign = %spec.campaign_name,
        steps = journey.steps.len(),
        languages = messages.len(),
        qa_passed = qa.passed,
        "Pipeline run complete"
    );

    CampaignBundle {
        spec,
        journey,
        messages,
        qa,
    }
}

/// Re-run only the QA stage against an edited triple, e.g. after a reviewer
/// applies a fix to a stored bundle.
pub fn revalidate(bundle: &CampaignBundle) -> CampaignBundle {
    let qa = copilot_qa::validate(&bundle.spec, &bundle.journey, &bundle.messages);
    CampaignBundle {
        spec: bundle.spec.clone(),
        journey: bundle.journey.clone(),
        messages: bundle.messages.clone(),
        qa,
    }
}
