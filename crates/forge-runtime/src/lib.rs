//! DecisionForge Runtime - the building blocks the decision engine orchestrates
//!
//! This crate provides:
//! - Risk screening (`risk`)
//! - Expected-value estimation (`value`)
//! - Audit records and sinks (`audit`)
//! - Decision history and summary statistics (`history`)
//! - Decision metrics (`observability`)

pub mod audit;
pub mod error;
pub mod history;
pub mod observability;
pub mod risk;
pub mod value;

// Re-export main types
pub use audit::{AuditRecord, AuditSink, ChannelAuditSink, MemoryAuditSink, TracingAuditSink};
pub use error::{Result, RuntimeError};
pub use history::{
    DecisionHistory, HistoryEntry, HistoryStats, HistorySummary, SharedDecisionHistory,
};
pub use observability::{DecisionMetrics, MetricsSnapshot};
pub use risk::{is_high_risk, RiskClassifier, RiskSignal};
pub use value::{expected_value, ValueEstimator};
