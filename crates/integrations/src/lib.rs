//! Collaborator boundary around the core pipeline: campaign activation,
//! hypercare analytics, and draft persistence.
//!
//! The pipeline never depends on anything here; these are one-way consumers
//! of its output. The bundled implementations are mocks with the same
//! interface a production client would have.

pub mod activation;
pub mod analytics;
pub mod store;

pub use activation::{ActivationClient, ActivationReceipt, MockActivationClient};
pub use analytics::{AnalyticsFeed, HypercareSnapshot, MockAnalyticsFeed};
pub use store::{DraftRecord, DraftStatus, DraftStore};
