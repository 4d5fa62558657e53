//! Decision history and summary statistics
//!
//! A [`DecisionHistory`] is an append-only, insertion-ordered record of
//! `(input, decision)` pairs owned by a session. [`SharedDecisionHistory`] wraps
//! one behind a lock so concurrent callers see consistent summaries.

mod shared;
mod store;
mod summary;

pub use shared::SharedDecisionHistory;
pub use store::{DecisionHistory, HistoryEntry};
pub use summary::{HistoryStats, HistorySummary, NO_HISTORY_MESSAGE};
