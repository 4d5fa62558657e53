//! Engine initialization
//!
//! Turns a [`CliConfig`] into an [`AssistedEngine`] with optional collaborators.

use crate::config::CliConfig;
use anyhow::{Context, Result};
use forge_sdk::{AssistedEngine, DecisionEngine, DecisionEngineBuilder, LlmAdvisor};
use std::sync::Arc;
use tracing::info;

/// Build the bare decision engine from the configured YAML file
pub fn init_engine(config: &CliConfig) -> Result<Arc<DecisionEngine>> {
    let engine = DecisionEngineBuilder::new()
        .with_config_file(&config.engine_config)
        .build()
        .with_context(|| {
            format!(
                "Failed to load engine configuration from {:?}",
                config.engine_config
            )
        })?;
    Ok(Arc::new(engine))
}

/// Build the engine and attach an LLM advisor when one is configured
pub fn init_assisted(config: &CliConfig) -> Result<AssistedEngine> {
    let engine = AssistedEngine::new(init_engine(config)?);

    match &config.advisor {
        Some(advisor) => {
            let client = advisor.build_client()?;
            info!(
                "Using {} collaborator with model {}",
                client.name(),
                advisor.model
            );
            let llm_advisor = LlmAdvisor::new(client, advisor.model.clone())
                .with_options(advisor.generation_options());
            Ok(engine.with_advisor(llm_advisor))
        }
        None => {
            info!("No advisor configured; decisions only");
            Ok(engine)
        }
    }
}
