//! DecisionSession tests: history, summaries and shared access

mod common;

use common::{fields, TestEngine};
use forge_sdk::{DecisionInput, DecisionSession, HistorySummary, Outcome};
use serde_json::json;
use std::thread;

#[test]
fn test_empty_session_summary_is_sentinel() {
    let session = DecisionSession::new(TestEngine::new().engine);
    match session.summary() {
        HistorySummary::NoHistory { message } => {
            assert_eq!(message, "No decision history available")
        }
        HistorySummary::Stats(_) => panic!("Expected sentinel for empty history"),
    }
}

#[test]
fn test_summary_matches_recorded_decisions() {
    let session = DecisionSession::new(TestEngine::new().engine);
    session.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());
    session.decide(&DecisionInput::new(0.95, 1, 0.9).unwrap());
    session.decide(&DecisionInput::new(0.1, 1, 0.05).unwrap());
    session.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());

    let summary = session.summary();
    let stats = summary.stats().unwrap();
    assert_eq!(stats.total_decisions, 4);
    assert_eq!(stats.count(Outcome::Intervene), 2);
    assert_eq!(stats.count(Outcome::Flag), 1);
    assert_eq!(stats.count(Outcome::DoNothing), 1);
    assert_eq!(stats.total_expected_value, 5.0);
    assert_eq!(stats.average_value, 1.25);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["decision_breakdown"]["INTERVENE"], 2);
}

#[test]
fn test_batch_appends_only_decided_cases() {
    let session = DecisionSession::new(TestEngine::new().engine);
    let items = session.batch_decide(&[
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10, "expected_lift": 0.3})),
        fields(json!({"anomaly_score": 0.5, "request_count_today": 10})),
        fields(json!({"anomaly_score": 0.1, "request_count_today": 1, "expected_lift": 0.05})),
    ]);

    assert_eq!(items.len(), 3);
    assert!(!items[1].is_decided());
    assert_eq!(session.len(), 2);

    let snapshot = session.history().snapshot();
    assert_eq!(snapshot[0].decision.outcome(), Outcome::Intervene);
    assert_eq!(snapshot[1].decision.outcome(), Outcome::DoNothing);
}

#[test]
fn test_rejected_fields_leave_history_untouched() {
    let session = DecisionSession::new(TestEngine::new().engine);
    assert!(session
        .decide_fields(&fields(json!({"anomaly_score": 0.5})))
        .is_err());
    assert!(session.is_empty());
}

#[test]
fn test_clear_resets_history() {
    let session = DecisionSession::new(TestEngine::new().engine);
    session.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());
    assert_eq!(session.len(), 1);

    session.clear();
    assert!(session.is_empty());
    assert!(session.summary().is_empty());
}

#[test]
fn test_concurrent_sessions_share_history() {
    let session = DecisionSession::new(TestEngine::new().engine);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    session.decide(&DecisionInput::new(0.5, 10, 0.3).unwrap());
                    let summary = session.summary();
                    let stats = summary.stats().unwrap();
                    assert_eq!(
                        stats.decision_breakdown.values().sum::<usize>(),
                        stats.total_decisions
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(session.len(), 100);
    assert_eq!(session.engine().metrics().decisions(Outcome::Intervene), 100);
}
