//! Campaign activation — hands a finished bundle to the delivery platform.

use copilot_core::config::ActivationConfig;
use copilot_core::CampaignResult;
use copilot_pipeline::CampaignBundle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// What the provider reports back after a go-live attempt. `success: false`
/// with a populated raw response means the provider refused the campaign,
/// not that the call failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationReceipt {
    pub success: bool,
    pub campaign_id: String,
    pub raw_provider_response: serde_json::Value,
}

/// One-way handoff to the delivery platform. Pipeline correctness never
/// depends on the outcome.
pub trait ActivationClient {
    fn activate(
        &self,
        bundle: &CampaignBundle,
    ) -> impl std::future::Future<Output = CampaignResult<ActivationReceipt>> + Send;
}

/// Simulated provider client. Refuses bundles with blocking QA issues the
/// way the real platform's validation would, and otherwise fabricates a
/// campaign id.
#[derive(Debug, Clone)]
pub struct MockActivationClient {
    config: ActivationConfig,
}

impl MockActivationClient {
    pub fn new(config: &ActivationConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl ActivationClient for MockActivationClient {
    async fn activate(&self, bundle: &CampaignBundle) -> CampaignResult<ActivationReceipt> {
        if !bundle.qa.passed {
            warn!(
                campaign = %bundle.spec.campaign_name,
                issues = bundle.qa.issues.len(),
                "Activation refused: blocking QA issues"
            );
            return Ok(ActivationReceipt {
                success: false,
                campaign_id: String::new(),
                raw_provider_response: json!({
                    "provider": "mock",
                    "endpoint": self.config.endpoint,
                    "status": "rejected",
                    "reason": "campaign has blocking QA issues",
                    "issue_count": bundle.qa.issues.len(),
                }),
            });
        }

        let campaign_id = format!("mock_{}", Uuid::new_v4().simple());
        info!(
            campaign = %bundle.spec.campaign_name,
            campaign_id = %campaign_id,
            "Campaign activated (simulated)"
        );

        Ok(ActivationReceipt {
            success: true,
            campaign_id: campaign_id.clone(),
            raw_provider_response: json!({
                "provider": "mock",
                "endpoint": self.config.endpoint,
                "app_id": self.config.app_id,
                "status": "created",
                "campaign_id": campaign_id,
                "name": bundle.spec.campaign_name,
                "steps": bundle.journey.steps.len(),
                "languages": bundle.messages.keys().collect::<Vec<_>>(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_pipeline::run_pipeline;

    #[tokio::test]
    async fn clean_bundle_activates() {
        let client = MockActivationClient::new(&ActivationConfig::default());
        let bundle = run_pipeline("refer a friend");

        let receipt = client.activate(&bundle).await.unwrap();
        assert!(receipt.success);
        assert!(receipt.campaign_id.starts_with("mock_"));
        assert_eq!(receipt.raw_provider_response["status"], "created");
    }

    #[tokio::test]
    async fn blocked_bundle_is_refused_not_errored() {
        let client = MockActivationClient::new(&ActivationConfig::default());
        let mut bundle = run_pipeline("refer a friend");
        bundle.messages.get_mut("de").unwrap().clear();
        let bundle = copilot_pipeline::revalidate(&bundle);
        assert!(!bundle.qa.passed);

        let receipt = client.activate(&bundle).await.unwrap();
        assert!(!receipt.success);
        assert!(receipt.campaign_id.is_empty());
        assert_eq!(receipt.raw_provider_response["status"], "rejected");
    }
}
