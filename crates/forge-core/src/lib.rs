//! DecisionForge Core - Core types and definitions for the retention engine
//!
//! This crate provides the fundamental types used across the DecisionForge ecosystem:
//! - Engine configuration (revenue, incentive cost, security thresholds)
//! - Validated decision inputs
//! - Decision outcomes and reasons
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    round_currency, Decision, DecisionInput, EngineConfig, FieldMap, Outcome, Reason,
    SecurityConfig,
};
