//! Retention offer selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Retention offer tier, chosen from expected value and churn probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferTier {
    /// 25% off for 6 months
    Premium,
    /// 20% off for 3 months
    Standard,
    /// 15% off for 2 months
    Basic,
}

impl OfferTier {
    /// Pick a tier. A missing churn probability counts as 0.
    pub fn select(expected_value: f64, churn: Option<f64>) -> Self {
        let churn = churn.unwrap_or(0.0);
        if expected_value > 1000.0 || churn > 0.8 {
            OfferTier::Premium
        } else if expected_value > 500.0 || churn > 0.6 {
            OfferTier::Standard
        } else {
            OfferTier::Basic
        }
    }

    pub fn discount_pct(&self) -> u32 {
        match self {
            OfferTier::Premium => 25,
            OfferTier::Standard => 20,
            OfferTier::Basic => 15,
        }
    }

    pub fn duration_months(&self) -> u32 {
        match self {
            OfferTier::Premium => 6,
            OfferTier::Standard => 3,
            OfferTier::Basic => 2,
        }
    }

    /// Human-readable offer, e.g. "20% discount for 3 months"
    pub fn description(&self) -> String {
        format!(
            "{}% discount for {} months",
            self.discount_pct(),
            self.duration_months()
        )
    }
}

impl fmt::Display for OfferTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
