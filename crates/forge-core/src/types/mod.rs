//! Data model for DecisionForge
//!
//! This module contains:
//! - Engine configuration
//! - Decision inputs (validated at construction)
//! - Decisions, outcomes and reasons

pub mod config;
pub mod decision;
pub mod input;

pub use config::{EngineConfig, SecurityConfig};
pub use decision::{round_currency, Decision, Outcome, Reason};
pub use input::{DecisionInput, FieldMap};
