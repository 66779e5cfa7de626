//! In-memory persistence for draft and active campaigns.
//!
//! Bundles are stored as opaque snapshots: an edit replaces the whole bundle
//! (bumping the version) after it has been re-run through the pipeline or
//! QA; nothing here patches pipeline output in place.

use chrono::{DateTime, Utc};
use copilot_core::{CampaignResult, CopilotError};
use copilot_pipeline::CampaignBundle;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Draft,
    Active,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub id: Uuid,
    pub status: DraftStatus,
    pub version: u32,
    pub bundle: CampaignBundle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct DraftStore {
    records: DashMap<Uuid, DraftRecord>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Store a freshly generated bundle as a draft.
    pub fn save(&self, bundle: CampaignBundle) -> DraftRecord {
        let now = Utc::now();
        let record = DraftRecord {
            id: Uuid::new_v4(),
            status: DraftStatus::Draft,
            version: 1,
            bundle,
            created_at: now,
            updated_at: now,
        };
        info!(draft_id = %record.id, campaign = %record.bundle.spec.campaign_name, "Draft saved");
        self.records.insert(record.id, record.clone());
        record
    }

    pub fn get(&self, id: &Uuid) -> Option<DraftRecord> {
        self.records.get(id).map(|r| r.clone())
    }

    /// Replace a draft's bundle with an edited, re-validated one. The new
    /// snapshot supersedes the old wholesale.
    pub fn replace(&self, id: &Uuid, bundle: CampaignBundle) -> CampaignResult<DraftRecord> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| CopilotError::Store(format!("no draft with id {id}")))?;
        entry.bundle = bundle;
        entry.version += 1;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    /// Promote a draft to active. Refused while the bundle's QA report has
    /// blocking issues.
    pub fn activate(&self, id: &Uuid) -> CampaignResult<DraftRecord> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| CopilotError::Store(format!("no draft with id {id}")))?;
        if !entry.bundle.qa.passed {
            return Err(CopilotError::Store(format!(
                "draft {id} has {} blocking QA issues",
                entry.bundle.qa.issues.len()
            )));
        }
        entry.status = DraftStatus::Active;
        entry.updated_at = Utc::now();
        info!(draft_id = %id, "Draft promoted to active");
        Ok(entry.clone())
    }

    /// All records, oldest first.
    pub fn list(&self) -> Vec<DraftRecord> {
        let mut records: Vec<DraftRecord> = self.records.iter().map(|r| r.clone()).collect();
        records.sort_by_key(|r| r.created_at);
        records
    }
}
