//! Unit tests for DecisionEngine

use super::*;
use forge_core::{CoreError, DecisionInput, EngineConfig, FieldMap, Outcome, Reason, SecurityConfig};
use forge_runtime::{AuditRecord, AuditSink, MemoryAuditSink, RuntimeError};
use serde_json::json;
use std::sync::Arc;

struct FailingSink;

impl AuditSink for FailingSink {
    fn emit(&self, _record: &AuditRecord) -> forge_runtime::Result<()> {
        Err(RuntimeError::AuditSink {
            sink: self.name().to_string(),
            reason: "disk full".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn config() -> EngineConfig {
    EngineConfig::new(100.0, 20.0, SecurityConfig::new(0.9, 50)).with_client_name("ecommerce")
}

fn engine_with_memory() -> (DecisionEngine, Arc<MemoryAuditSink>) {
    let sink = Arc::new(MemoryAuditSink::new());
    let engine = DecisionEngine::new(config())
        .unwrap()
        .with_audit_sink(sink.clone());
    (engine, sink)
}

fn fields(value: serde_json::Value) -> FieldMap {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_engine_rejects_non_finite_config() {
    let config = EngineConfig::new(f64::NAN, 20.0, SecurityConfig::new(0.9, 50));
    assert!(DecisionEngine::new(config).is_err());
}

#[test]
fn test_classify_does_not_audit() {
    let (engine, sink) = engine_with_memory();
    let input = DecisionInput::new(0.1, 5, 0.3).unwrap();

    let decision = engine.classify(&input);
    assert_eq!(decision.outcome(), Outcome::Intervene);
    assert!(sink.is_empty());
    assert_eq!(engine.metrics().decisions(Outcome::Intervene), 0);
}

#[test]
fn test_decide_records_metrics_and_audit() {
    let (engine, sink) = engine_with_memory();
    let input = DecisionInput::new(0.95, 5, 0.3).unwrap();

    let receipt = engine.decide_with_receipt(&input);
    assert_eq!(receipt.decision.reason(), Reason::HighRisk);
    assert!(receipt.audit.is_delivered());
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.records()[0].client, "ecommerce");
    assert_eq!(engine.metrics().decisions(Outcome::Flag), 1);
}

#[test]
fn test_failing_sink_keeps_decision() {
    let engine = DecisionEngine::new(config())
        .unwrap()
        .with_audit_sink(Arc::new(FailingSink));
    let input = DecisionInput::new(0.1, 5, 0.3).unwrap();

    let receipt = engine.decide_with_receipt(&input);
    assert_eq!(receipt.decision, engine.classify(&input));
    match receipt.audit {
        AuditStatus::Failed { reason } => assert!(reason.contains("disk full")),
        AuditStatus::Delivered => panic!("Expected audit failure"),
    }
    assert_eq!(engine.metrics().audit_failures(), 1);
}

#[test]
fn test_decide_fields_missing_key_skips_audit() {
    let (engine, sink) = engine_with_memory();
    let err = engine
        .decide_fields(&fields(json!({
            "anomaly_score": 0.1,
            "request_count_today": 5
        })))
        .unwrap_err();

    assert!(matches!(
        err,
        crate::SdkError::Core(CoreError::MissingField { ref field }) if field == "expected_lift"
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_batch_item_serialization() {
    let decided = serde_json::to_value(BatchItem::Decided(forge_core::Decision::flag())).unwrap();
    assert_eq!(decided["decision"]["outcome"], "FLAG");

    let rejected =
        serde_json::to_value(BatchItem::Rejected(CoreError::missing_field("expected_lift")))
            .unwrap();
    assert_eq!(rejected["error"], "Missing required field: expected_lift");
}

#[test]
fn test_receipt_serialization() {
    let receipt = DecisionReceipt {
        decision: forge_core::Decision::do_nothing(-15.0),
        audit: AuditStatus::Failed {
            reason: "closed".to_string(),
        },
    };
    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["decision"]["outcome"], "DO_NOTHING");
    assert_eq!(json["audit"]["status"], "failed");
    assert_eq!(json["audit"]["reason"], "closed");
}
