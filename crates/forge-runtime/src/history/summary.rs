//! Summary statistics over recorded decisions

use super::store::HistoryEntry;
use forge_core::Outcome;
use serde::Serialize;
use std::collections::BTreeMap;

/// Message carried by the empty-history sentinel
pub const NO_HISTORY_MESSAGE: &str = "No decision history available";

/// Aggregates over a non-empty history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_decisions: usize,

    /// Count per observed outcome
    pub decision_breakdown: BTreeMap<Outcome, usize>,

    /// Sum of every recorded expected value
    pub total_expected_value: f64,

    /// `total_expected_value / total_decisions`
    pub average_value: f64,
}

impl HistoryStats {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.decision_breakdown.get(&outcome).copied().unwrap_or(0)
    }
}

/// Result of summarizing a history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HistorySummary {
    /// Nothing recorded; no averages are computed
    NoHistory { message: String },
    Stats(HistoryStats),
}

impl HistorySummary {
    /// Summarize a slice of entries (e.g. a gated snapshot)
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            return HistorySummary::NoHistory {
                message: NO_HISTORY_MESSAGE.to_string(),
            };
        }

        let mut decision_breakdown = BTreeMap::new();
        let mut total_expected_value = 0.0;
        for entry in entries {
            *decision_breakdown
                .entry(entry.decision.outcome())
                .or_insert(0) += 1;
            total_expected_value += entry.decision.expected_value();
        }

        let total_decisions = entries.len();
        HistorySummary::Stats(HistoryStats {
            total_decisions,
            decision_breakdown,
            total_expected_value,
            average_value: total_expected_value / total_decisions as f64,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HistorySummary::NoHistory { .. })
    }

    pub fn stats(&self) -> Option<&HistoryStats> {
        match self {
            HistorySummary::Stats(stats) => Some(stats),
            HistorySummary::NoHistory { .. } => None,
        }
    }

    /// Total decisions, 0 for the sentinel
    pub fn total_decisions(&self) -> usize {
        self.stats().map_or(0, |s| s.total_decisions)
    }
}
