//! DecisionEngine - Main API for classifying retention cases
//!
//! The module is organized into:
//! - `types`: receipts and batch items returned by the engine
//! - `engine`: core DecisionEngine implementation
//! - `tests`: unit tests (test-only)

mod engine;
mod types;

pub use engine::DecisionEngine;
pub use types::{AuditStatus, BatchItem, DecisionReceipt};

#[cfg(test)]
mod tests;
