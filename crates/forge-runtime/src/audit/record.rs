//! Structured audit record

use crate::error::Result;
use chrono::{DateTime, Utc};
use forge_core::{Decision, DecisionInput, EngineConfig, FieldMap};
use serde::Serialize;

/// One decision, its inputs, and who it was made for
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// Emission time, serialized as RFC 3339 UTC
    pub timestamp: DateTime<Utc>,

    /// Inputs the decision was computed from
    pub inputs: FieldMap,

    /// The decision
    pub decision: Decision,

    /// Configured client name, or `"unknown"`
    pub client: String,
}

impl AuditRecord {
    pub fn new(input: &DecisionInput, decision: &Decision, config: &EngineConfig) -> Self {
        Self::at(Utc::now(), input, decision, config)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        input: &DecisionInput,
        decision: &Decision,
        config: &EngineConfig,
    ) -> Self {
        Self {
            timestamp,
            inputs: input.to_fields(),
            decision: decision.clone(),
            client: config.client_label().to_string(),
        }
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
