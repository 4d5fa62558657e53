//! Free-text questions about the decision system

use super::{prompts, CollaboratorOutcome, LlmAdvisor};
use forge_runtime::SharedDecisionHistory;
use serde::Serialize;

/// Answer to one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryAnswer {
    pub query: String,
    pub response: CollaboratorOutcome<String>,
}

impl QueryAnswer {
    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }
}

/// Answers questions using the current history size as context
#[derive(Debug, Clone)]
pub struct QueryAssistant {
    advisor: LlmAdvisor,
    history: SharedDecisionHistory,
}

impl QueryAssistant {
    pub fn new(advisor: LlmAdvisor, history: SharedDecisionHistory) -> Self {
        Self { advisor, history }
    }

    pub async fn query(&self, question: &str) -> QueryAnswer {
        let recent = self.history.summary().total_decisions();
        let result = self
            .advisor
            .complete(prompts::query_prompt(question, recent))
            .await;
        if let Err(e) = &result {
            tracing::warn!("Query failed: {}", e);
        }

        QueryAnswer {
            query: question.to_string(),
            response: CollaboratorOutcome::from_result(result),
        }
    }
}
