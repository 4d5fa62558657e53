//! LLM-backed explainer and insights generator

use super::prompts;
use super::{
    ContextMap, CustomerProfile, DecisionExplainer, Insights, InsightsGenerator, Recommendation,
};
use crate::error::Result;
use crate::offer::OfferTier;
use async_trait::async_trait;
use forge_core::{Decision, DecisionInput};
use forge_llm::{GenerationOptions, LLMClient, LLMRequest};
use forge_runtime::{HistoryEntry, HistorySummary};
use std::sync::Arc;

/// Sends prompts to one LLM client with a fixed model name
#[derive(Clone)]
pub struct LlmAdvisor {
    client: Arc<dyn LLMClient>,
    model: String,
    options: GenerationOptions,
}

impl LlmAdvisor {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            options: GenerationOptions::default(),
        }
    }

    /// Sampling options applied to every prompt
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) async fn complete(&self, prompt: String) -> Result<String> {
        tracing::debug!(client = self.client.name(), model = %self.model, "Sending prompt");
        let request = LLMRequest::new(prompt, self.model.as_str())
            .with_system(prompts::SYSTEM_PROMPT)
            .with_options(self.options);
        let response = self.client.call(request).await?;
        if response.is_truncated() {
            tracing::warn!(model = %self.model, "LLM response hit the token limit");
        }
        Ok(response.content)
    }
}

impl std::fmt::Debug for LlmAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAdvisor")
            .field("client", &self.client.name())
            .field("model", &self.model)
            .field("options", &self.options)
            .finish()
    }
}

#[async_trait]
impl DecisionExplainer for LlmAdvisor {
    async fn explain_decision(
        &self,
        decision: &Decision,
        input: &DecisionInput,
        context: Option<&ContextMap>,
    ) -> Result<String> {
        self.complete(prompts::explanation_prompt(decision, input, context))
            .await
    }

    async fn recommend_intervention(
        &self,
        decision: &Decision,
        input: &DecisionInput,
    ) -> Result<Recommendation> {
        let response = self
            .complete(prompts::recommendation_prompt(decision, input))
            .await?;
        Ok(prompts::parse_sectioned_response(&response))
    }

    async fn personalized_message(
        &self,
        profile: &CustomerProfile,
        intervention_type: &str,
        offer: Option<OfferTier>,
    ) -> Result<String> {
        let message = self
            .complete(prompts::message_prompt(profile, intervention_type, offer))
            .await?;
        Ok(message.trim().to_string())
    }
}

#[async_trait]
impl InsightsGenerator for LlmAdvisor {
    async fn analyze_patterns(
        &self,
        history: &[HistoryEntry],
        time_period: &str,
    ) -> Result<Insights> {
        let statistics = HistorySummary::from_entries(history);
        let analysis = self
            .complete(prompts::insights_prompt(&statistics, time_period))
            .await?;
        Ok(Insights {
            analysis,
            statistics,
        })
    }
}
