use thiserror::Error;

pub type CampaignResult<T> = Result<T, CopilotError>;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Condition parse error: {0}")]
    ConditionParse(String),

    #[error("Analytics error: {0}")]
    Analytics(String),

    #[error("Draft store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
