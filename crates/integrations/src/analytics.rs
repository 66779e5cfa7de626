//! Hypercare analytics feed — post-launch delivery metrics and insights.

use copilot_core::{CampaignResult, CopilotError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Delivery metrics for one campaign during the hypercare window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypercareSnapshot {
    pub sends: u64,
    pub opens: u64,
    pub clicks: u64,
    pub referrals: u64,
    pub opt_outs: u64,
    pub insights: Vec<String>,
}

/// Downstream-only reporting feed; the pipeline never reads from it.
pub trait AnalyticsFeed {
    fn hypercare(
        &self,
        campaign_id: &str,
    ) -> impl std::future::Future<Output = CampaignResult<HypercareSnapshot>> + Send;
}

/// Fixture-backed feed standing in for the reporting warehouse.
#[derive(Debug, Clone, Default)]
pub struct MockAnalyticsFeed;

impl MockAnalyticsFeed {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsFeed for MockAnalyticsFeed {
    async fn hypercare(&self, campaign_id: &str) -> CampaignResult<HypercareSnapshot> {
        if campaign_id.trim().is_empty() {
            return Err(CopilotError::Analytics(
                "campaign id must not be empty".to_string(),
            ));
        }

        debug!(campaign_id, "Serving hypercare fixture");
        Ok(HypercareSnapshot {
            sends: 4200,
            opens: 1450,
            clicks: 350,
            referrals: 78,
            opt_outs: 5,
            insights: vec![
                "Variant B is performing ~22% better on clicks than Variant A.".to_string(),
                "DE audience is smaller; consider broadening eligibility.".to_string(),
                "Day 30 email underperforms; try a shorter, more urgent version.".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_has_metrics_and_insights() {
        let feed = MockAnalyticsFeed::new();
        let snapshot = feed.hypercare("mock_abc123").await.unwrap();
        assert_eq!(snapshot.sends, 4200);
        assert!(snapshot.opens <= snapshot.sends);
        assert_eq!(snapshot.insights.len(), 3);
    }

    #[tokio::test]
    async fn empty_campaign_id_is_rejected() {
        let feed = MockAnalyticsFeed::new();
        assert!(feed.hypercare("  ").await.is_err());
    }
}
