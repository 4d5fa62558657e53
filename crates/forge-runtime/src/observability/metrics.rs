//! Metrics collection and reporting

use forge_core::{Decision, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Monotonic counter
#[derive(Debug, Clone, Default)]
pub struct Counter {
    value: Arc<RwLock<u64>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a value to the counter
    pub fn add(&self, value: u64) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) += value;
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset the counter
    pub fn reset(&self) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = 0;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    count: u64,
    sum: f64,
}

/// Running count and sum of observed values. Observations are not retained.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    totals: Arc<RwLock<Totals>>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a value
    pub fn observe(&self, value: f64) {
        let mut totals = self.totals.write().unwrap_or_else(PoisonError::into_inner);
        totals.count += 1;
        totals.sum += value;
    }

    fn totals(&self) -> Totals {
        *self.totals.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get count of observations
    pub fn count(&self) -> u64 {
        self.totals().count
    }

    /// Get sum of all values
    pub fn sum(&self) -> f64 {
        self.totals().sum
    }

    /// Mean of all observations, 0.0 when empty
    pub fn avg(&self) -> f64 {
        let totals = self.totals();
        if totals.count == 0 {
            0.0
        } else {
            totals.sum / totals.count as f64
        }
    }

    /// Reset the histogram
    pub fn reset(&self) {
        *self.totals.write().unwrap_or_else(PoisonError::into_inner) = Totals::default();
    }
}

/// Point-in-time view of [`DecisionMetrics`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub decisions: BTreeMap<Outcome, u64>,
    pub rejected_records: u64,
    pub audit_failures: u64,
    pub valued_decisions: u64,
    pub expected_value_sum: f64,
}

/// Engine-level decision metrics
#[derive(Debug, Clone)]
pub struct DecisionMetrics {
    intervene: Counter,
    do_nothing: Counter,
    flag: Counter,
    rejected: Counter,
    audit_failures: Counter,
    expected_value: Histogram,
}

impl DecisionMetrics {
    pub fn new() -> Self {
        Self {
            intervene: Counter::new(),
            do_nothing: Counter::new(),
            flag: Counter::new(),
            rejected: Counter::new(),
            audit_failures: Counter::new(),
            expected_value: Histogram::new(),
        }
    }

    fn counter(&self, outcome: Outcome) -> &Counter {
        match outcome {
            Outcome::Intervene => &self.intervene,
            Outcome::DoNothing => &self.do_nothing,
            Outcome::Flag => &self.flag,
        }
    }

    /// Count a decision. Flagged decisions carry no value and are not observed.
    pub fn record(&self, decision: &Decision) {
        self.counter(decision.outcome()).inc();
        if decision.outcome() != Outcome::Flag {
            self.expected_value.observe(decision.expected_value());
        }
    }

    /// Count an input record that failed validation
    pub fn record_rejected(&self) {
        self.rejected.inc();
    }

    pub fn record_audit_failure(&self) {
        self.audit_failures.inc();
    }

    pub fn decisions(&self, outcome: Outcome) -> u64 {
        self.counter(outcome).get()
    }

    pub fn rejected(&self) -> u64 {
        self.rejected.get()
    }

    pub fn audit_failures(&self) -> u64 {
        self.audit_failures.get()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            decisions: Outcome::ALL
                .iter()
                .map(|outcome| (*outcome, self.decisions(*outcome)))
                .collect(),
            rejected_records: self.rejected(),
            audit_failures: self.audit_failures(),
            valued_decisions: self.expected_value.count(),
            expected_value_sum: self.expected_value.sum(),
        }
    }

    /// Reset all metrics
    pub fn reset_all(&self) {
        for outcome in Outcome::ALL {
            self.counter(outcome).reset();
        }
        self.rejected.reset();
        self.audit_failures.reset();
        self.expected_value.reset();
    }
}

impl Default for DecisionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
