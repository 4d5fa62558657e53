//! Risk screening
//!
//! A subject is high risk when its anomaly score reaches the configured threshold
//! or when its request velocity exceeds the daily maximum.

use forge_core::{DecisionInput, SecurityConfig};
use std::fmt;

/// Which check marked a subject as high risk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskSignal {
    /// `anomaly_score >= anomaly_threshold`
    Anomaly,
    /// `request_count > max_requests_per_day`
    Velocity,
}

impl fmt::Display for RiskSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskSignal::Anomaly => f.write_str("anomaly"),
            RiskSignal::Velocity => f.write_str("velocity"),
        }
    }
}

/// Returns true if the subject is high risk under the given thresholds
pub fn is_high_risk(anomaly_score: f64, request_count: u64, security: &SecurityConfig) -> bool {
    RiskClassifier::new(security).signal(anomaly_score, request_count).is_some()
}

/// Risk classifier bound to one set of thresholds
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier<'a> {
    security: &'a SecurityConfig,
}

impl<'a> RiskClassifier<'a> {
    pub fn new(security: &'a SecurityConfig) -> Self {
        Self { security }
    }

    /// First check that fired, anomaly before velocity
    pub fn signal(&self, anomaly_score: f64, request_count: u64) -> Option<RiskSignal> {
        if anomaly_score >= self.security.anomaly_threshold {
            return Some(RiskSignal::Anomaly);
        }

        if request_count > self.security.max_requests_per_day {
            return Some(RiskSignal::Velocity);
        }

        None
    }

    pub fn assess(&self, input: &DecisionInput) -> Option<RiskSignal> {
        self.signal(input.anomaly_score(), input.request_count_today())
    }
}
