//! Decision engine with optional natural-language collaborators
//!
//! Every call makes and records a decision first. Explanations, recommendations
//! and messages are attached afterwards and can fail without touching it.

use crate::decision_engine::{AuditStatus, DecisionEngine};
use crate::explain::{
    CollaboratorOutcome, ContextMap, CustomerProfile, DecisionExplainer, Insights,
    InsightsGenerator, LlmAdvisor, QueryAssistant, Recommendation,
};
use crate::offer::OfferTier;
use crate::session::DecisionSession;
use forge_core::{Decision, DecisionInput, Outcome};
use forge_runtime::{HistorySummary, RuntimeError};
use serde::Serialize;
use std::sync::Arc;

const RETENTION: &str = "retention";

/// What to attach to a decision
#[derive(Debug, Clone)]
pub struct ExplainOptions {
    pub explanation: bool,

    /// Only honored for INTERVENE and FLAG decisions
    pub recommendations: bool,

    pub context: Option<ContextMap>,
}

impl Default for ExplainOptions {
    fn default() -> Self {
        Self {
            explanation: true,
            recommendations: false,
            context: None,
        }
    }
}

impl ExplainOptions {
    /// Decision only
    pub fn none() -> Self {
        Self {
            explanation: false,
            ..Self::default()
        }
    }

    pub fn with_recommendations(mut self) -> Self {
        self.recommendations = true;
        self
    }

    pub fn with_context(mut self, context: ContextMap) -> Self {
        self.context = Some(context);
        self
    }
}

/// A decision plus whatever collaborators produced for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistedResult {
    pub decision: Decision,
    pub input: DecisionInput,
    pub audit: AuditStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<CollaboratorOutcome<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<CollaboratorOutcome<Recommendation>>,
}

/// Everything needed to act on one customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterventionPackage {
    #[serde(flatten)]
    pub result: AssistedResult,

    /// Present for INTERVENE decisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_message: Option<CollaboratorOutcome<String>>,
}

/// Result of asking for strategic insights
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightRequest {
    /// No insights generator configured
    Disabled,
    InsufficientData {
        available: usize,
        required: usize,
    },
    Completed {
        insights: CollaboratorOutcome<Insights>,
    },
}

/// Session-backed engine with optional explainer and insights generator
#[derive(Clone)]
pub struct AssistedEngine {
    session: DecisionSession,
    explainer: Option<Arc<dyn DecisionExplainer>>,
    insights: Option<Arc<dyn InsightsGenerator>>,
    advisor: Option<LlmAdvisor>,
}

impl AssistedEngine {
    /// Engine without collaborators
    pub fn new(engine: Arc<DecisionEngine>) -> Self {
        Self::from_session(DecisionSession::new(engine))
    }

    pub fn from_session(session: DecisionSession) -> Self {
        Self {
            session,
            explainer: None,
            insights: None,
            advisor: None,
        }
    }

    /// Use one LLM advisor for explanations, insights and queries
    pub fn with_advisor(mut self, advisor: LlmAdvisor) -> Self {
        tracing::info!(model = advisor.model(), "LLM collaborators enabled");
        let shared = Arc::new(advisor.clone());
        self.explainer = Some(shared.clone());
        self.insights = Some(shared);
        self.advisor = Some(advisor);
        self
    }

    pub fn with_explainer(mut self, explainer: Arc<dyn DecisionExplainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub fn with_insights_generator(mut self, generator: Arc<dyn InsightsGenerator>) -> Self {
        self.insights = Some(generator);
        self
    }

    pub fn session(&self) -> &DecisionSession {
        &self.session
    }

    pub fn is_assisted(&self) -> bool {
        self.explainer.is_some() || self.insights.is_some()
    }

    /// Question-answering over this engine's history, when an advisor is set
    pub fn query_assistant(&self) -> Option<QueryAssistant> {
        self.advisor
            .as_ref()
            .map(|advisor| QueryAssistant::new(advisor.clone(), self.session.history().clone()))
    }

    /// Decide, record, then attach the requested collaborator output
    pub async fn decide_with_explanation(
        &self,
        input: &DecisionInput,
        options: &ExplainOptions,
    ) -> AssistedResult {
        let receipt = self.session.decide_with_receipt(input);
        let decision = receipt.decision;

        let mut result = AssistedResult {
            decision: decision.clone(),
            input: input.clone(),
            audit: receipt.audit,
            explanation: None,
            recommendations: None,
        };

        let Some(explainer) = &self.explainer else {
            return result;
        };

        if options.explanation {
            let explanation = explainer
                .explain_decision(&decision, input, options.context.as_ref())
                .await;
            result.explanation = Some(collaborator_outcome("explanation", explanation));
        }

        if options.recommendations && decision.is_actionable() {
            let recommendations = explainer.recommend_intervention(&decision, input).await;
            result.recommendations = Some(collaborator_outcome("recommendation", recommendations));
        }

        result
    }

    /// Explanation, recommendations and, for INTERVENE, an offer and message
    pub async fn intervention_package(
        &self,
        input: &DecisionInput,
        profile: &CustomerProfile,
    ) -> InterventionPackage {
        let options = ExplainOptions::default().with_recommendations();
        let result = self.decide_with_explanation(input, &options).await;

        if result.decision.outcome() != Outcome::Intervene {
            return InterventionPackage {
                result,
                offer: None,
                personalized_message: None,
            };
        }

        let offer = OfferTier::select(result.decision.expected_value(), input.churn());
        let personalized_message = match &self.explainer {
            Some(explainer) => {
                let message = explainer
                    .personalized_message(profile, RETENTION, Some(offer))
                    .await;
                Some(collaborator_outcome("personalized message", message))
            }
            None => None,
        };

        InterventionPackage {
            result,
            offer: Some(offer),
            personalized_message,
        }
    }

    /// Decide each input in order, optionally with explanations
    pub async fn batch_process(
        &self,
        inputs: &[DecisionInput],
        include_explanations: bool,
    ) -> Vec<AssistedResult> {
        let options = if include_explanations {
            ExplainOptions::default()
        } else {
            ExplainOptions::none()
        };

        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(self.decide_with_explanation(input, &options).await);
        }
        results
    }

    /// Pattern analysis over the recorded history.
    ///
    /// The sample-size gate is checked before anything else.
    pub async fn strategic_insights(
        &self,
        time_period: &str,
        min_decisions: usize,
    ) -> InsightRequest {
        let entries = match self.session.history().gated_snapshot(min_decisions) {
            Ok(entries) => entries,
            Err(RuntimeError::InsufficientData {
                available,
                required,
            }) => {
                tracing::warn!("Insufficient history: {} < {}", available, required);
                return InsightRequest::InsufficientData {
                    available,
                    required,
                };
            }
            Err(e) => {
                return InsightRequest::Completed {
                    insights: CollaboratorOutcome::Failure {
                        reason: e.to_string(),
                    },
                }
            }
        };

        let Some(generator) = &self.insights else {
            tracing::warn!("Insights requested but no generator is configured");
            return InsightRequest::Disabled;
        };

        let insights = generator.analyze_patterns(&entries, time_period).await;
        InsightRequest::Completed {
            insights: collaborator_outcome("insights", insights),
        }
    }

    pub fn history_summary(&self) -> HistorySummary {
        self.session.summary()
    }

    pub fn clear_history(&self) {
        self.session.clear();
    }
}

fn collaborator_outcome<T>(what: &str, result: crate::Result<T>) -> CollaboratorOutcome<T> {
    if let Err(e) = &result {
        tracing::error!("Failed to generate {}: {}", what, e);
    }
    CollaboratorOutcome::from_result(result)
}
