//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use forge_runtime::MemoryAuditSink;
use forge_sdk::{DecisionEngine, DecisionEngineBuilder, FieldMap};
use std::sync::Arc;

/// Reference configuration used across the integration tests
pub const ECOMMERCE_YAML: &str = r#"
client_name: ecommerce
revenue_per_user: 100
incentive_cost: 20
roi_threshold: 0
security:
  anomaly_threshold: 0.9
  max_requests_per_day: 50
"#;

/// Engine built from [`ECOMMERCE_YAML`] with an in-memory audit sink
pub struct TestEngine {
    pub engine: Arc<DecisionEngine>,
    pub audit: Arc<MemoryAuditSink>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self::from_yaml(ECOMMERCE_YAML)
    }

    pub fn from_yaml(yaml: &str) -> Self {
        let audit = Arc::new(MemoryAuditSink::new());
        let engine = DecisionEngineBuilder::new()
            .with_config_content(yaml)
            .with_audit_sink(audit.clone())
            .build()
            .expect("test configuration must build");

        Self {
            engine: Arc::new(engine),
            audit,
        }
    }
}

/// Build a field map from a `json!` object literal
pub fn fields(value: serde_json::Value) -> FieldMap {
    value
        .as_object()
        .cloned()
        .expect("test fields must be a JSON object")
}
