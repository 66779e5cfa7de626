use anyhow::Result;
use clap::{Parser, Subcommand};
use copilot_core::AppConfig;
use copilot_integrations::{ActivationClient, AnalyticsFeed, MockActivationClient, MockAnalyticsFeed};
use copilot_pipeline::run_pipeline;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-copilot")]
#[command(about = "Brief-to-campaign generation pipeline with QA gating")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the pipeline on a brief and print the campaign bundle
    Generate {
        /// Free-text marketing brief
        brief: String,
    },
    /// Generate a campaign from a brief and hand it to the (mock) provider
    GoLive {
        /// Free-text marketing brief
        brief: String,
    },
    /// Fetch the (mock) hypercare snapshot for a launched campaign
    Hypercare {
        /// Provider campaign id from a go-live receipt
        campaign_id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        });

        let output = execute(self.command, &config, self.pretty).await?;
        println!("{output}");
        Ok(())
    }
}

/// Dispatch one command and return its JSON output. Separated from `run` so
/// command handling is unit-testable without capturing stdout.
async fn execute(command: Command, config: &AppConfig, pretty: bool) -> Result<String> {
    match command {
        Command::Generate { brief } => to_json(&run_pipeline(&brief), pretty),
        Command::GoLive { brief } => {
            let bundle = run_pipeline(&brief);
            if !bundle.qa.passed {
                warn!(
                    issues = bundle.qa.issues.len(),
                    "Bundle has blocking QA issues; provider will refuse it"
                );
            }
            let client = MockActivationClient::new(&config.activation);
            let receipt = client.activate(&bundle).await?;
            info!(success = receipt.success, "Go-live finished");
            to_json(&receipt, pretty)
        }
        Command::Hypercare { campaign_id } => {
            let feed = MockAnalyticsFeed::new();
            let snapshot = feed.hypercare(&campaign_id).await?;
            to_json(&snapshot, pretty)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_global_pretty_flag() {
        let cli =
            Cli::try_parse_from(["campaign-copilot", "generate", "refer a friend", "--pretty"])
                .unwrap();
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Generate { ref brief } if brief == "refer a friend"));
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["campaign-copilot"]).is_err());
        assert!(Cli::try_parse_from(["campaign-copilot", "generate"]).is_err());
    }

    #[tokio::test]
    async fn generate_emits_the_campaign_bundle() {
        let command = Command::Generate {
            brief: "refer a friend".to_string(),
        };
        let output = execute(command, &AppConfig::default(), false).await.unwrap();

        let bundle: copilot_pipeline::CampaignBundle = serde_json::from_str(&output).unwrap();
        assert_eq!(bundle.spec.campaign_name, "RAF_US_DE");
        assert_eq!(bundle.journey.steps.len(), 8);
        assert!(bundle.qa.passed);
    }

    #[tokio::test]
    async fn go_live_prints_the_provider_receipt() {
        let command = Command::GoLive {
            brief: "refer a friend".to_string(),
        };
        let output = execute(command, &AppConfig::default(), true).await.unwrap();

        let receipt: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(receipt["success"], true);
        assert!(receipt["campaign_id"]
            .as_str()
            .unwrap()
            .starts_with("mock_"));
    }

    #[tokio::test]
    async fn hypercare_prints_the_snapshot() {
        let command = Command::Hypercare {
            campaign_id: "mock_abc123".to_string(),
        };
        let output = execute(command, &AppConfig::default(), false).await.unwrap();

        let snapshot: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(snapshot["sends"], 4200);
        assert_eq!(snapshot["insights"].as_array().unwrap().len(), 3);
    }
}
