//! Journey builder — expands a `CampaignSpec` into a time-ordered,
//! conditional schedule of touchpoints.
//!
//! Dispatch is an exhaustive match on the spec's archetype; every archetype
//! maps to a fixed template with campaign parameters interpolated into step
//! conditions. The builder is total: it never fails, and an archetype with
//! no richer template gets the minimal single-send journey.

pub mod templates;

use copilot_core::{Archetype, CampaignSpec, JourneyBlueprint};
use tracing::debug;

/// Build the journey blueprint for a spec.
pub fn build(spec: &CampaignSpec) -> JourneyBlueprint {
    let journey = match spec.archetype {
        Archetype::Referral => templates::referral_journey(spec),
        Archetype::Generic => templates::generic_journey(spec),
    };
    debug!(
        journey = %journey.name,
        steps = journey.steps.len(),
        "Journey built"
    );
    journey
}
