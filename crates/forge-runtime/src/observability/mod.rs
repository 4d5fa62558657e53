//! Observability module
//!
//! Provides in-process decision metrics (counters and a value histogram).

pub mod metrics;

pub use metrics::{Counter, DecisionMetrics, Histogram, MetricsSnapshot};
