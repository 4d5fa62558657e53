//! CLI configuration

use forge_sdk::AdvisorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Engine configuration file (YAML)
    pub engine_config: PathBuf,

    /// Input file (JSON array); stdin when unset
    pub input: Option<PathBuf>,

    /// Attach explanations to each decision (requires an advisor)
    pub explain: bool,

    /// Attach recommendations to INTERVENE and FLAG decisions
    pub recommendations: bool,

    /// LLM collaborator settings; collaborators are disabled when unset
    pub advisor: Option<AdvisorConfig>,

    /// Minimum recorded decisions before strategic insights are requested
    pub insights_min_decisions: usize,

    /// Label for the insights time period
    pub time_period: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            engine_config: PathBuf::from("configs/ecommerce.yaml"),
            input: None,
            explain: false,
            recommendations: false,
            advisor: None,
            insights_min_decisions: 10,
            time_period: "recent activity".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/forge")
    }

    /// Load from a config file (any format `config` understands, extension optional)
    /// layered under `FORGE_*` environment variables (`__` separates nested keys,
    /// e.g. `FORGE_ADVISOR__MODEL`)
    pub fn load_from(name: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("FORGE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable config file ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }
}
