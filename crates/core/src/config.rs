use serde::Deserialize;

use crate::error::{CampaignResult, CopilotError};

/// Root application configuration. Loaded from an optional
/// `config/campaign-copilot.toml` file, overridden by environment variables
/// with the prefix `CAMPAIGN_COPILOT__`; all fields have working defaults so
/// the CLI runs with zero configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub activation: ActivationConfig,
}

/// Settings for the campaign-activation collaborator. The bundled client is
/// a mock; the endpoint is recorded in receipts so go-live output shows
/// where a real client would have sent the campaign.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivationConfig {
    #[serde(default = "default_activation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_activation_app_id")]
    pub app_id: String,
}

fn default_activation_endpoint() -> String {
    "https://rest.mock-provider.example/campaigns".to_string()
}

fn default_activation_app_id() -> String {
    "campaign-copilot-demo".to_string()
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_activation_endpoint(),
            app_id: default_activation_app_id(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            activation: ActivationConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> CampaignResult<Self> {
        Self::load_from("config/campaign-copilot")
    }

    fn load_from(file_stem: &str) -> CampaignResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("CAMPAIGN_COPILOT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder
            .build()
            .map_err(|e| CopilotError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| CopilotError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert!(config.activation.endpoint.starts_with("https://"));
        assert!(!config.activation.app_id.is_empty());
    }

    #[test]
    fn load_without_file_falls_back_to_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.activation.endpoint, default_activation_endpoint());
        assert_eq!(config.activation.app_id, default_activation_app_id());
    }

    #[test]
    fn load_reads_the_toml_file() {
        let dir = std::env::temp_dir().join("campaign-copilot-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("campaign-copilot.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[activation]\napp_id = \"from-file\"").unwrap();

        let stem = dir.join("campaign-copilot");
        let config = AppConfig::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.activation.app_id, "from-file");
        // Fields the file omits keep their defaults.
        assert_eq!(config.activation.endpoint, default_activation_endpoint());
    }
}
