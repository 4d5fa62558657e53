//! Offline revenue evaluation
//!
//! Replays a set of customers through a churn-cutoff baseline policy and
//! through the engine, then compares net revenue.

use crate::decision_engine::DecisionEngine;
use crate::error::Result;
use forge_core::{DecisionInput, Outcome};
use serde::{Deserialize, Serialize};

/// One simulated customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCase {
    pub churn_probability: f64,
    pub anomaly_score: f64,
    pub request_count_today: u64,
}

/// Assumptions shared by both policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPolicy {
    /// Baseline intervenes when churn probability is strictly above this
    pub churn_cutoff: f64,

    /// Share of revenue kept from an intervened customer
    pub retained_revenue_share: f64,

    /// `expected_lift = churn_probability * uplift_factor`
    pub uplift_factor: f64,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            churn_cutoff: 0.5,
            retained_revenue_share: 0.7,
            uplift_factor: 0.3,
        }
    }
}

/// Baseline vs engine comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueEvaluation {
    pub cases: usize,
    pub baseline_interventions: usize,
    pub engine_interventions: usize,
    pub engine_flags: usize,
    pub baseline_net: f64,
    pub engine_net: f64,

    /// `None` when the baseline net revenue is zero
    pub uplift_pct: Option<f64>,
}

#[derive(Default)]
struct Ledger {
    revenue: f64,
    cost: f64,
    interventions: usize,
}

impl Ledger {
    fn settle(&mut self, intervened: bool, revenue_per_user: f64, incentive_cost: f64, share: f64) {
        if intervened {
            self.interventions += 1;
            self.cost += incentive_cost;
            self.revenue += revenue_per_user * share;
        } else {
            self.revenue += revenue_per_user;
        }
    }

    fn net(&self) -> f64 {
        self.revenue - self.cost
    }
}

impl RevenueEvaluation {
    /// Run both policies. Decisions are classified without audit emission.
    pub fn run(
        engine: &DecisionEngine,
        cases: &[EvaluationCase],
        policy: &EvaluationPolicy,
    ) -> Result<Self> {
        let config = engine.config();
        let mut baseline = Ledger::default();
        let mut forge = Ledger::default();
        let mut engine_flags = 0;

        for case in cases {
            let input = DecisionInput::new(
                case.anomaly_score,
                case.request_count_today,
                case.churn_probability * policy.uplift_factor,
            )?
            .with_churn(case.churn_probability)?;

            baseline.settle(
                case.churn_probability > policy.churn_cutoff,
                config.revenue_per_user,
                config.incentive_cost,
                policy.retained_revenue_share,
            );

            let decision = engine.classify(&input);
            if decision.outcome() == Outcome::Flag {
                engine_flags += 1;
            }
            forge.settle(
                decision.outcome() == Outcome::Intervene,
                config.revenue_per_user,
                config.incentive_cost,
                policy.retained_revenue_share,
            );
        }

        let baseline_net = baseline.net();
        let engine_net = forge.net();
        let uplift_pct =
            (baseline_net != 0.0).then(|| (engine_net - baseline_net) / baseline_net * 100.0);

        tracing::info!(
            cases = cases.len(),
            baseline_net,
            engine_net,
            "Revenue evaluation complete"
        );

        Ok(Self {
            cases: cases.len(),
            baseline_interventions: baseline.interventions,
            engine_interventions: forge.interventions,
            engine_flags,
            baseline_net,
            engine_net,
            uplift_pct,
        })
    }
}
