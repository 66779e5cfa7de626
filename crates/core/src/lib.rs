//! Shared domain model for the Campaign Copilot pipeline: campaign specs,
//! journey blueprints, localized messages, QA reports, and the eligibility
//! condition DSL that journey steps are gated on.

pub mod conditions;
pub mod config;
pub mod error;
pub mod types;

pub use conditions::{mutually_exclusive, ComparisonOp, Condition};
pub use config::AppConfig;
pub use error::{CampaignResult, CopilotError};
pub use types::{
    Archetype, CampaignSpec, CampaignType, Channel, Duration, JourneyBlueprint, JourneyStep,
    MessageContent, MultiLanguageMessages, PromoTerms, QaCheck, QaFinding, QaReport, QaSeverity,
};
