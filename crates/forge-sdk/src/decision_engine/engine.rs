//! Core DecisionEngine implementation

use super::types::{AuditStatus, BatchItem, DecisionReceipt};
use crate::error::Result;
use forge_core::{Decision, DecisionInput, EngineConfig, FieldMap};
use forge_runtime::{
    AuditRecord, AuditSink, DecisionMetrics, RiskClassifier, TracingAuditSink, ValueEstimator,
};
use std::sync::Arc;

/// Classifies retention cases against one immutable configuration.
///
/// The engine holds no per-decision state; concurrent callers may share it
/// behind an `Arc`.
pub struct DecisionEngine {
    config: EngineConfig,
    audit_sink: Arc<dyn AuditSink>,
    metrics: Arc<DecisionMetrics>,
}

impl DecisionEngine {
    /// Create an engine that audits through the `forge::audit` tracing target
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            client = %config.client_label(),
            revenue_per_user = config.revenue_per_user,
            incentive_cost = config.incentive_cost,
            roi_threshold = config.roi_threshold,
            "Decision engine initialized"
        );

        Ok(Self {
            config,
            audit_sink: Arc::new(TracingAuditSink::new()),
            metrics: Arc::new(DecisionMetrics::new()),
        })
    }

    /// Replace the audit sink
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = sink;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> &DecisionMetrics {
        &self.metrics
    }

    /// Pure decision table. No audit record, no metrics.
    ///
    /// Risk screening runs first; expected value is only computed for cases
    /// that pass it. The unrounded value is compared with `roi_threshold`;
    /// rounding applies to the reported value only.
    pub fn classify(&self, input: &DecisionInput) -> Decision {
        if let Some(signal) = RiskClassifier::new(&self.config.security).assess(input) {
            tracing::debug!(%signal, "High-risk case flagged");
            return Decision::flag();
        }

        let value = ValueEstimator::from_config(&self.config).estimate(input);
        if value > self.config.roi_threshold {
            Decision::intervene(value)
        } else {
            Decision::do_nothing(value)
        }
    }

    /// Classify one case and emit exactly one audit record
    pub fn decide(&self, input: &DecisionInput) -> Decision {
        self.decide_with_receipt(input).decision
    }

    /// Classify one case and report whether its audit record was delivered
    pub fn decide_with_receipt(&self, input: &DecisionInput) -> DecisionReceipt {
        let decision = self.classify(input);
        self.metrics.record(&decision);

        let record = AuditRecord::new(input, &decision, &self.config);
        let audit = match self.audit_sink.emit(&record) {
            Ok(()) => AuditStatus::Delivered,
            Err(e) => {
                tracing::error!(
                    sink = self.audit_sink.name(),
                    outcome = %decision.outcome(),
                    "Failed to emit audit record: {}",
                    e
                );
                self.metrics.record_audit_failure();
                AuditStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        DecisionReceipt { decision, audit }
    }

    /// Build a validated input from a loose record. Rejections are counted in
    /// the engine metrics.
    pub fn validate_fields(&self, fields: &FieldMap) -> forge_core::Result<DecisionInput> {
        DecisionInput::from_fields(fields).map_err(|e| {
            tracing::warn!("Rejected input record: {}", e);
            self.metrics.record_rejected();
            e
        })
    }

    /// Validate a loose record, then decide.
    ///
    /// A record with a missing or invalid field produces no audit record.
    pub fn decide_fields(&self, fields: &FieldMap) -> Result<Decision> {
        let input = self.validate_fields(fields)?;
        Ok(self.decide(&input))
    }

    /// Decide every record in order. One bad record never aborts the batch.
    pub fn batch_decide(&self, records: &[FieldMap]) -> Vec<BatchItem> {
        let items: Vec<BatchItem> = records
            .iter()
            .map(|fields| match self.validate_fields(fields) {
                Ok(input) => BatchItem::Decided(self.decide(&input)),
                Err(e) => BatchItem::Rejected(e),
            })
            .collect();

        tracing::info!(
            total = items.len(),
            decided = items.iter().filter(|item| item.is_decided()).count(),
            "Batch processed"
        );
        items
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("config", &self.config)
            .field("audit_sink", &self.audit_sink.name())
            .finish()
    }
}
