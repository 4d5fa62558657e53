//! Configuration loading for DecisionEngine and its collaborators

use crate::error::{Result, SdkError};
use forge_core::EngineConfig;
use forge_llm::{GenerationOptions, LLMClient, MockProvider, OllamaProvider, DEFAULT_OLLAMA_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Parse an engine configuration from YAML.
///
/// Missing required keys surface as [`forge_core::CoreError::Configuration`].
pub fn parse_engine_config(content: &str) -> Result<EngineConfig> {
    let document: serde_json::Value = serde_yaml::from_str(content)?;
    if document.is_null() {
        return Err(SdkError::ConfigError(
            "Config document is empty. Check YAML formatting.".to_string(),
        ));
    }
    Ok(EngineConfig::from_value(&document)?)
}

/// Load an engine configuration from a YAML file
pub fn load_engine_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = parse_engine_config(&content)?;
    tracing::info!(
        "Loaded engine configuration from {:?} (client: {})",
        path,
        config.client_label()
    );
    Ok(config)
}

/// LLM provider used by the explanation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorProvider {
    Ollama,
    Mock,
}

/// Explanation layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// LLM provider
    pub provider: AdvisorProvider,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Provider endpoint (Ollama only)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-call timeout in seconds (Ollama only)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Upper bound on generated tokens
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_model() -> String {
    "llama3.2".to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            provider: AdvisorProvider::Ollama,
            model: default_model(),
            base_url: None,
            timeout_secs: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl AdvisorConfig {
    /// Mock-backed configuration (offline runs and tests)
    pub fn mock() -> Self {
        Self {
            provider: AdvisorProvider::Mock,
            ..Self::default()
        }
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Build the configured LLM client
    pub fn build_client(&self) -> Result<Arc<dyn LLMClient>> {
        match self.provider {
            AdvisorProvider::Mock => Ok(Arc::new(MockProvider::new())),
            AdvisorProvider::Ollama => {
                let base_url = self
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
                let provider = match self.timeout_secs {
                    Some(secs) => OllamaProvider::with_timeout(base_url, Duration::from_secs(secs))?,
                    None => OllamaProvider::with_base_url(base_url),
                };
                Ok(Arc::new(provider))
            }
        }
    }
}
