//! Expected-value estimation

use forge_core::{DecisionInput, EngineConfig};

/// Net monetary benefit of an intervention: `lift * revenue - incentive_cost`.
///
/// Not clamped; a negative result means the incentive costs more than it returns.
pub fn expected_value(expected_lift: f64, revenue: f64, incentive_cost: f64) -> f64 {
    expected_lift * revenue - incentive_cost
}

/// Value estimator bound to one configuration's revenue and cost
#[derive(Debug, Clone, Copy)]
pub struct ValueEstimator {
    revenue: f64,
    incentive_cost: f64,
}

impl ValueEstimator {
    pub fn new(revenue: f64, incentive_cost: f64) -> Self {
        Self {
            revenue,
            incentive_cost,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.revenue_per_user, config.incentive_cost)
    }

    /// Unrounded expected value for one input
    pub fn estimate(&self, input: &DecisionInput) -> f64 {
        expected_value(input.expected_lift(), self.revenue, self.incentive_cost)
    }
}
