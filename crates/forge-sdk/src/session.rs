//! Stateful decision session
//!
//! Pairs a shared [`DecisionEngine`] with a decision history. The engine stays
//! stateless; every decision made through the session is appended here.

use crate::decision_engine::{BatchItem, DecisionEngine, DecisionReceipt};
use crate::error::Result;
use forge_core::{Decision, DecisionInput, FieldMap};
use forge_runtime::{HistoryEntry, HistorySummary, SharedDecisionHistory};
use std::sync::Arc;

/// Decision engine plus append-only history
#[derive(Debug, Clone)]
pub struct DecisionSession {
    engine: Arc<DecisionEngine>,
    history: SharedDecisionHistory,
}

impl DecisionSession {
    pub fn new(engine: Arc<DecisionEngine>) -> Self {
        Self::with_history(engine, SharedDecisionHistory::new())
    }

    /// Start from an existing history (e.g. one shared with another session)
    pub fn with_history(engine: Arc<DecisionEngine>, history: SharedDecisionHistory) -> Self {
        Self { engine, history }
    }

    pub fn engine(&self) -> &Arc<DecisionEngine> {
        &self.engine
    }

    pub fn history(&self) -> &SharedDecisionHistory {
        &self.history
    }

    /// Decide and record
    pub fn decide(&self, input: &DecisionInput) -> Decision {
        self.decide_with_receipt(input).decision
    }

    pub fn decide_with_receipt(&self, input: &DecisionInput) -> DecisionReceipt {
        let receipt = self.engine.decide_with_receipt(input);
        self.history.append(input.clone(), receipt.decision.clone());
        receipt
    }

    /// Validate, decide and record. Rejected records leave the history untouched.
    pub fn decide_fields(&self, fields: &FieldMap) -> Result<Decision> {
        let input = self.engine.validate_fields(fields)?;
        Ok(self.decide(&input))
    }

    /// Batch decide; only successfully decided records are appended, in input order
    pub fn batch_decide(&self, records: &[FieldMap]) -> Vec<BatchItem> {
        let mut decided = Vec::new();
        let items = records
            .iter()
            .map(|fields| match self.engine.validate_fields(fields) {
                Ok(input) => {
                    let decision = self.engine.decide(&input);
                    decided.push(HistoryEntry {
                        input,
                        decision: decision.clone(),
                    });
                    BatchItem::Decided(decision)
                }
                Err(e) => BatchItem::Rejected(e),
            })
            .collect();

        self.history.extend(decided);
        items
    }

    pub fn summary(&self) -> HistorySummary {
        self.history.summary()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all recorded decisions
    pub fn clear(&self) {
        let dropped = self.history.len();
        self.history.clear();
        tracing::info!(dropped, "Decision history cleared");
    }
}
