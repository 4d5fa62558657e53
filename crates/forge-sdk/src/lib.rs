//! DecisionForge SDK
//!
//! High-level API for making, recording and explaining retention decisions.

pub mod assisted;
pub mod builder;
pub mod config;
pub mod decision_engine;
pub mod error;
pub mod evaluation;
pub mod explain;
pub mod offer;
pub mod session;

// Re-export main types
pub use assisted::{AssistedEngine, AssistedResult, ExplainOptions, InsightRequest, InterventionPackage};
pub use builder::DecisionEngineBuilder;
pub use config::{load_engine_config, parse_engine_config, AdvisorConfig, AdvisorProvider};
pub use decision_engine::{AuditStatus, BatchItem, DecisionEngine, DecisionReceipt};
pub use error::{Result, SdkError};
pub use evaluation::{EvaluationCase, EvaluationPolicy, RevenueEvaluation};
pub use explain::{
    CollaboratorOutcome, ContextMap, CustomerProfile, DecisionExplainer, Insights,
    InsightsGenerator, LlmAdvisor, QueryAnswer, QueryAssistant, Recommendation,
};
pub use offer::OfferTier;
pub use session::DecisionSession;

// Re-export commonly used types from dependencies
pub use forge_core::{
    CoreError, Decision, DecisionInput, EngineConfig, FieldMap, Outcome, Reason, SecurityConfig,
};
pub use forge_runtime::{
    AuditRecord, AuditSink, HistoryEntry, HistoryStats, HistorySummary, SharedDecisionHistory,
};
