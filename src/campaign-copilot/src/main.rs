//! Campaign Copilot — turns a free-text marketing brief into a validated
//! multi-channel lifecycle campaign.
//!
//! CLI front end over the pure pipeline: generate a campaign bundle,
//! simulate go-live against the mock activation provider, or pull the mock
//! hypercare snapshot for a launched campaign.

mod cli;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_copilot=info,copilot_pipeline=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run().await
}
