//! Builder pattern for DecisionEngine

use crate::config::{load_engine_config, parse_engine_config};
use crate::decision_engine::DecisionEngine;
use crate::error::{Result, SdkError};
use forge_core::EngineConfig;
use forge_runtime::AuditSink;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for DecisionEngine
///
/// # Example
///
/// ```rust,ignore
/// use forge_sdk::DecisionEngineBuilder;
///
/// // From a YAML file
/// let engine = DecisionEngineBuilder::new()
///     .with_config_file("config/ecommerce.yaml")
///     .build()?;
///
/// // Manual configuration (for testing)
/// let engine = DecisionEngineBuilder::new()
///     .with_config_content(yaml_content)
///     .with_audit_sink(Arc::new(MemoryAuditSink::new()))
///     .build()?;
/// ```
#[derive(Default)]
pub struct DecisionEngineBuilder {
    config: Option<EngineConfig>,
    config_file: Option<PathBuf>,
    config_content: Option<String>,
    audit_sink: Option<Arc<dyn AuditSink>>,
    client_name: Option<String>,
}

impl DecisionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-built configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a YAML file
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set configuration content directly (alternative to file path)
    pub fn with_config_content(mut self, content: impl Into<String>) -> Self {
        self.config_content = Some(content.into());
        self
    }

    /// Route audit records to a custom sink
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = Some(sink);
        self
    }

    /// Override the client name recorded in audit records
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Build the decision engine.
    ///
    /// Sources are tried in order: explicit config, inline content, file.
    pub fn build(self) -> Result<DecisionEngine> {
        let mut config = match (self.config, self.config_content, self.config_file) {
            (Some(config), _, _) => config,
            (None, Some(content), _) => parse_engine_config(&content)?,
            (None, None, Some(path)) => load_engine_config(&path)?,
            (None, None, None) => {
                return Err(SdkError::ConfigError(
                    "No engine configuration provided".to_string(),
                ))
            }
        };

        if let Some(client_name) = self.client_name {
            config = config.with_client_name(client_name);
        }

        let engine = DecisionEngine::new(config)?;
        Ok(match self.audit_sink {
            Some(sink) => engine.with_audit_sink(sink),
            None => engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{CoreError, SecurityConfig};
    use forge_runtime::MemoryAuditSink;
    use std::io::Write;

    const YAML: &str = r#"
revenue_per_user: 100
incentive_cost: 20
security:
  anomaly_threshold: 0.9
  max_requests_per_day: 50
"#;

    #[test]
    fn test_builder_requires_config() {
        let result = DecisionEngineBuilder::new().build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_builder_from_content() {
        let engine = DecisionEngineBuilder::new()
            .with_config_content(YAML)
            .with_client_name("telecom")
            .build()
            .unwrap();

        assert_eq!(engine.config().revenue_per_user, 100.0);
        assert_eq!(engine.config().client_label(), "telecom");
    }

    #[test]
    fn test_builder_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let engine = DecisionEngineBuilder::new()
            .with_config_file(file.path())
            .build()
            .unwrap();
        assert_eq!(engine.config().security.max_requests_per_day, 50);
    }

    #[test]
    fn test_builder_missing_file() {
        let result = DecisionEngineBuilder::new()
            .with_config_file("/nonexistent/forge.yaml")
            .build();
        assert!(matches!(result, Err(SdkError::IoError(_))));
    }

    #[test]
    fn test_builder_rejects_incomplete_config() {
        let result = DecisionEngineBuilder::new()
            .with_config_content("revenue_per_user: 100\nincentive_cost: 20\n")
            .build();
        assert!(matches!(
            result,
            Err(SdkError::Core(CoreError::Configuration { .. }))
        ));
    }

    #[test]
    fn test_builder_with_sink() {
        let sink = Arc::new(MemoryAuditSink::new());
        let engine = DecisionEngineBuilder::new()
            .with_config(EngineConfig::new(100.0, 20.0, SecurityConfig::new(0.9, 50)))
            .with_audit_sink(sink.clone())
            .build()
            .unwrap();

        let input = forge_core::DecisionInput::new(0.1, 1, 0.3).unwrap();
        engine.decide(&input);
        assert_eq!(sink.len(), 1);
    }
}
