//! Lock-guarded history for sessions shared across callers

use super::store::{DecisionHistory, HistoryEntry};
use super::summary::HistorySummary;
use crate::error::Result;
use forge_core::{Decision, DecisionInput};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to one [`DecisionHistory`].
///
/// Appends take the write lock; summaries take the read lock, so a summary
/// never observes a half-applied append.
#[derive(Debug, Clone, Default)]
pub struct SharedDecisionHistory {
    inner: Arc<RwLock<DecisionHistory>>,
}

impl SharedDecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_history(history: DecisionHistory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(history)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DecisionHistory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DecisionHistory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, input: DecisionInput, decision: Decision) {
        self.write().append(input, decision);
    }

    /// Append several entries under a single lock acquisition
    pub fn extend(&self, entries: impl IntoIterator<Item = HistoryEntry>) {
        let mut history = self.write();
        for entry in entries {
            history.append(entry.input, entry.decision);
        }
    }

    pub fn summary(&self) -> HistorySummary {
        self.read().summary()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy of every entry in insertion order
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.read().entries().to_vec()
    }

    /// Snapshot behind the minimum-sample gate
    pub fn gated_snapshot(&self, min_decisions: usize) -> Result<Vec<HistoryEntry>> {
        self.read().require_min(min_decisions).map(|entries| entries.to_vec())
    }

    pub fn clear(&self) {
        self.write().clear();
    }
}
