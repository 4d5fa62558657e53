//! Explanation layer
//!
//! Natural-language collaborators that describe decisions after they are made.
//! They never feed back into the decision table: a failed call is recorded as a
//! [`CollaboratorOutcome::Failure`] next to an unchanged decision.

mod advisor;
pub mod prompts;
mod query;

pub use advisor::LlmAdvisor;
pub use query::{QueryAnswer, QueryAssistant};

use crate::error::Result;
use crate::offer::OfferTier;
use async_trait::async_trait;
use forge_core::{Decision, DecisionInput};
use forge_runtime::{HistoryEntry, HistorySummary};
use serde::{Deserialize, Serialize};

/// Free-form caller context passed to explanations
pub type ContextMap = serde_json::Map<String, serde_json::Value>;

/// Result of one collaborator call, kept alongside the decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum CollaboratorOutcome<T> {
    Success(T),
    Failure { reason: String },
}

impl<T> CollaboratorOutcome<T> {
    pub fn from_result<E: std::fmt::Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => CollaboratorOutcome::Success(value),
            Err(e) => CollaboratorOutcome::Failure {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CollaboratorOutcome::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CollaboratorOutcome::Success(value) => Some(value),
            CollaboratorOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            CollaboratorOutcome::Success(_) => None,
            CollaboratorOutcome::Failure { reason } => Some(reason),
        }
    }
}

/// Structured intervention advice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub summary: String,
    pub rationale: String,
    pub suggested_actions: String,
}

/// Strategic analysis of recorded decisions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub analysis: String,
    pub statistics: HistorySummary,
}

/// Customer attributes used to personalize messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(default, alias = "tenure")]
    pub tenure_months: Option<u32>,

    #[serde(default)]
    pub monthly_charges: Option<f64>,

    #[serde(flatten)]
    pub attributes: ContextMap,
}

/// Explains individual decisions
#[async_trait]
pub trait DecisionExplainer: Send + Sync {
    /// Short plain-language explanation of one decision
    async fn explain_decision(
        &self,
        decision: &Decision,
        input: &DecisionInput,
        context: Option<&ContextMap>,
    ) -> Result<String>;

    /// Actionable advice for an INTERVENE or FLAG decision
    async fn recommend_intervention(
        &self,
        decision: &Decision,
        input: &DecisionInput,
    ) -> Result<Recommendation>;

    /// Ready-to-send customer message
    async fn personalized_message(
        &self,
        profile: &CustomerProfile,
        intervention_type: &str,
        offer: Option<OfferTier>,
    ) -> Result<String>;
}

/// Analyzes patterns across recorded decisions
#[async_trait]
pub trait InsightsGenerator: Send + Sync {
    async fn analyze_patterns(&self, history: &[HistoryEntry], time_period: &str)
        -> Result<Insights>;
}
