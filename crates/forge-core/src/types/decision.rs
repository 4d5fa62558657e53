//! Decisions, outcomes and reasons

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of one evaluated case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Offer a retention incentive
    Intervene,
    /// Take no action
    DoNothing,
    /// Suspected abuse or fraud
    Flag,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Intervene, Outcome::DoNothing, Outcome::Flag];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Intervene => "INTERVENE",
            Outcome::DoNothing => "DO_NOTHING",
            Outcome::Flag => "FLAG",
        }
    }

    /// The single reason paired with this outcome
    pub fn reason(&self) -> Reason {
        match self {
            Outcome::Intervene => Reason::RoiPositive,
            Outcome::DoNothing => Reason::RoiNegative,
            Outcome::Flag => Reason::HighRisk,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an outcome was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    HighRisk,
    RoiPositive,
    RoiNegative,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::HighRisk => "HIGH_RISK",
            Reason::RoiPositive => "ROI_POSITIVE",
            Reason::RoiNegative => "ROI_NEGATIVE",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round a monetary amount to 2 decimal places
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Result of classifying one case. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    outcome: Outcome,
    reason: Reason,
    expected_value: f64,
}

impl Decision {
    /// High-risk decision; value computation is skipped
    pub fn flag() -> Self {
        Self {
            outcome: Outcome::Flag,
            reason: Reason::HighRisk,
            expected_value: 0.0,
        }
    }

    /// Positive-ROI intervention
    pub fn intervene(expected_value: f64) -> Self {
        Self {
            outcome: Outcome::Intervene,
            reason: Reason::RoiPositive,
            expected_value: round_currency(expected_value),
        }
    }

    /// Non-positive ROI, no action
    pub fn do_nothing(expected_value: f64) -> Self {
        Self {
            outcome: Outcome::DoNothing,
            reason: Reason::RoiNegative,
            expected_value: round_currency(expected_value),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn expected_value(&self) -> f64 {
        self.expected_value
    }

    /// Outcomes that call for follow-up actions (intervention or review)
    pub fn is_actionable(&self) -> bool {
        matches!(self.outcome, Outcome::Intervene | Outcome::Flag)
    }
}
