//! Decision table tests for DecisionEngine
//!
//! Covers risk precedence, ROI classification, audit emission and batch handling.

mod common;

use common::{fields, TestEngine};
use forge_core::round_currency;
use forge_runtime::expected_value;
use forge_sdk::{BatchItem, CoreError, DecisionInput, Outcome, Reason, SdkError};
use serde_json::json;

#[test]
fn test_intervene_example() {
    let t = TestEngine::new();
    let decision = t
        .engine
        .decide_fields(&fields(json!({
            "anomaly_score": 0.5,
            "request_count_today": 10,
            "expected_lift": 0.3
        })))
        .unwrap();

    assert_eq!(decision.outcome(), Outcome::Intervene);
    assert_eq!(decision.reason(), Reason::RoiPositive);
    assert_eq!(decision.expected_value(), 10.0);
}

#[test]
fn test_flag_example() {
    let t = TestEngine::new();
    let decision = t
        .engine
        .decide(&DecisionInput::new(0.95, 1, 0.9).unwrap());

    assert_eq!(decision.outcome(), Outcome::Flag);
    assert_eq!(decision.reason(), Reason::HighRisk);
    assert_eq!(decision.expected_value(), 0.0);
}

#[test]
fn test_do_nothing_example() {
    let t = TestEngine::new();
    let decision = t
        .engine
        .decide(&DecisionInput::new(0.1, 1, 0.05).unwrap());

    assert_eq!(decision.outcome(), Outcome::DoNothing);
    assert_eq!(decision.reason(), Reason::RoiNegative);
    assert_eq!(decision.expected_value(), -15.0);
}

#[test]
fn test_risk_overrides_any_value() {
    let t = TestEngine::new();
    for lift in [0.0, 0.3, 1.0] {
        for (score, count) in [(0.9, 0), (1.0, 3), (0.2, 51), (0.95, 500)] {
            let decision = t
                .engine
                .classify(&DecisionInput::new(score, count, lift).unwrap());
            assert_eq!(decision.outcome(), Outcome::Flag, "score {} count {}", score, count);
            assert_eq!(decision.expected_value(), 0.0);
        }
    }
}

#[test]
fn test_non_risky_values_match_formula() {
    let t = TestEngine::new();
    let config = t.engine.config();

    for step in 0..=100 {
        let lift = step as f64 / 100.0;
        let decision = t
            .engine
            .classify(&DecisionInput::new(0.5, 50, lift).unwrap());
        let raw = expected_value(lift, config.revenue_per_user, config.incentive_cost);

        assert_eq!(decision.expected_value(), round_currency(raw), "lift {}", lift);
        if raw > config.roi_threshold {
            assert_eq!(decision.outcome(), Outcome::Intervene, "lift {}", lift);
        } else {
            assert_eq!(decision.outcome(), Outcome::DoNothing, "lift {}", lift);
        }
    }
}

#[test]
fn test_roi_threshold_is_strict() {
    let t = TestEngine::from_yaml(
        r#"
revenue_per_user: 100
incentive_cost: 15
roi_threshold: 10
security:
  anomaly_threshold: 0.9
  max_requests_per_day: 50
"#,
    );

    // 0.25 * 100 - 15 is exactly 10.0
    let at_threshold = t.engine.classify(&DecisionInput::new(0.1, 1, 0.25).unwrap());
    assert_eq!(at_threshold.outcome(), Outcome::DoNothing);
    assert_eq!(at_threshold.expected_value(), 10.0);

    let above = t.engine.classify(&DecisionInput::new(0.1, 1, 0.31).unwrap());
    assert_eq!(above.outcome(), Outcome::Intervene);
}

#[test]
fn test_roi_compares_unrounded_value() {
    let t = TestEngine::from_yaml(
        r#"
revenue_per_user: 1000
incentive_cost: 0.996
security:
  anomaly_threshold: 0.9
  max_requests_per_day: 50
"#,
    );

    // 1000 * 0.001 - 0.996 is about 0.004: above 0 before rounding, 0.0 after
    let decision = t.engine.decide(&DecisionInput::new(0.1, 1, 0.001).unwrap());
    assert_eq!(decision.outcome(), Outcome::Intervene);
    assert_eq!(decision.reason(), Reason::RoiPositive);
    assert_eq!(decision.expected_value(), 0.0);

    // Just below the threshold stays negative even though it rounds to 0.0
    let below = t.engine.classify(&DecisionInput::new(0.1, 1, 0.000995).unwrap());
    assert_eq!(below.outcome(), Outcome::DoNothing);
}

#[test]
fn test_decide_is_idempotent() {
    let t = TestEngine::new();
    let input = DecisionInput::new(0.42, 17, 0.27).unwrap();

    let first = t.engine.decide(&input);
    let second = t.engine.decide(&input);
    assert_eq!(first, second);
}

#[test]
fn test_one_audit_record_per_decision() {
    let t = TestEngine::new();
    let inputs = [
        DecisionInput::new(0.5, 10, 0.3).unwrap(),
        DecisionInput::new(0.95, 1, 0.9).unwrap(),
        DecisionInput::new(0.1, 1, 0.05).unwrap(),
    ];
    for input in &inputs {
        t.engine.decide(input);
    }

    let records = t.audit.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].decision.outcome(), Outcome::Flag);
    assert_eq!(records[2].inputs["expected_lift"], json!(0.05));
    assert!(records.iter().all(|r| r.client == "ecommerce"));
}

#[test]
fn test_audit_record_timestamp_is_rfc3339_utc() {
    let t = TestEngine::new();
    t.engine.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());

    let json: serde_json::Value =
        serde_json::from_str(&t.audit.records()[0].to_json().unwrap()).unwrap();
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'), "timestamp {}", timestamp);
    assert_eq!(timestamp.as_bytes()[10], b'T');
}

#[test]
fn test_unknown_client_label() {
    let t = TestEngine::from_yaml(
        r#"
revenue_per_user: 100
incentive_cost: 20
security:
  anomaly_threshold: 0.9
  max_requests_per_day: 50
"#,
    );
    t.engine.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());
    assert_eq!(t.audit.records()[0].client, "unknown");
}

#[test]
fn test_missing_field_fails_only_that_case() {
    let t = TestEngine::new();
    let err = t
        .engine
        .decide_fields(&fields(json!({
            "anomaly_score": 0.5,
            "expected_lift": 0.3
        })))
        .unwrap_err();

    assert!(matches!(
        err,
        SdkError::Core(CoreError::MissingField { ref field }) if field == "request_count_today"
    ));
    assert!(t.audit.is_empty());
}

#[test]
fn test_out_of_range_rejected_at_boundary() {
    let t = TestEngine::new();
    let err = t
        .engine
        .decide_fields(&fields(json!({
            "anomaly_score": 1.7,
            "request_count_today": 1,
            "expected_lift": 0.3
        })))
        .unwrap_err();
    assert!(matches!(err, SdkError::Core(CoreError::RangeViolation { .. })));
}

#[test]
fn test_batch_keeps_order_and_continues() {
    let t = TestEngine::new();
    let records = vec![
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10, "expected_lift": 0.3})),
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10})),
        fields(json!({"anomaly_score": 0.1, "request_count_today": 1, "expected_lift": 0.05})),
    ];

    let items = t.engine.batch_decide(&records);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].decision().unwrap().outcome(), Outcome::Intervene);
    assert_eq!(
        items[1],
        BatchItem::Rejected(CoreError::missing_field("expected_lift"))
    );
    assert_eq!(items[2].decision().unwrap().outcome(), Outcome::DoNothing);
    assert_eq!(t.audit.len(), 2);
}

#[test]
fn test_metrics_follow_decisions() {
    let t = TestEngine::new();
    t.engine.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());
    t.engine.decide(&DecisionInput::new(0.95, 1, 0.9).unwrap());
    t.engine.decide(&DecisionInput::new(0.1, 1, 0.05).unwrap());

    let snapshot = t.engine.metrics().snapshot();
    assert_eq!(snapshot.decisions[&Outcome::Intervene], 1);
    assert_eq!(snapshot.decisions[&Outcome::Flag], 1);
    assert_eq!(snapshot.decisions[&Outcome::DoNothing], 1);
    assert_eq!(snapshot.valued_decisions, 2);
    assert_eq!(snapshot.expected_value_sum, -5.0);
    assert_eq!(snapshot.audit_failures, 0);
    assert_eq!(snapshot.rejected_records, 0);
}

#[test]
fn test_rejected_records_are_counted() {
    let t = TestEngine::new();
    let records = vec![
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10, "expected_lift": 0.3})),
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10})),
        fields(json!({"anomaly_score": 1.5, "request_count_today": 10, "expected_lift": 0.3})),
    ];

    let items = t.engine.batch_decide(&records);
    assert_eq!(items.iter().filter(|item| item.is_decided()).count(), 1);
    assert!(t.engine.decide_fields(&records[1]).is_err());

    let snapshot = t.engine.metrics().snapshot();
    assert_eq!(snapshot.rejected_records, 3);
    assert_eq!(snapshot.decisions[&Outcome::Intervene], 1);
}
