//! Append-only decision store

use super::summary::HistorySummary;
use crate::error::{Result, RuntimeError};
use forge_core::{Decision, DecisionInput};
use serde::Serialize;

/// One recorded decision with the input it was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub input: DecisionInput,
    pub decision: Decision,
}

/// Ordered sequence of past decisions.
///
/// Entries are never mutated or removed individually; [`DecisionHistory::clear`]
/// is the only way to drop them.
#[derive(Debug, Clone, Default)]
pub struct DecisionHistory {
    entries: Vec<HistoryEntry>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision. Duplicates are kept.
    pub fn append(&mut self, input: DecisionInput, decision: Decision) {
        self.entries.push(HistoryEntry { input, decision });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Summary statistics, or the "no history" sentinel when empty
    pub fn summary(&self) -> HistorySummary {
        HistorySummary::from_entries(&self.entries)
    }

    /// Minimum-sample gate for pattern analysis.
    ///
    /// Returns every entry when at least `min_decisions` are recorded, otherwise
    /// [`RuntimeError::InsufficientData`].
    pub fn require_min(&self, min_decisions: usize) -> Result<&[HistoryEntry]> {
        if self.entries.len() < min_decisions {
            return Err(RuntimeError::InsufficientData {
                available: self.entries.len(),
                required: min_decisions,
            });
        }
        Ok(&self.entries)
    }

    /// Drop every entry. Irreversible.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a DecisionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
