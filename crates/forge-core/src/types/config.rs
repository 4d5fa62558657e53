//! Engine configuration
//!
//! One `EngineConfig` is loaded per engine instance and never changes afterwards.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Keys that must be present in every configuration source, as dotted paths
pub const REQUIRED_KEYS: &[&str] = &[
    "revenue_per_user",
    "incentive_cost",
    "security.anomaly_threshold",
    "security.max_requests_per_day",
];

/// Client label used in audit records when no client name is configured
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Risk screening thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Anomaly scores at or above this value are high risk
    pub anomaly_threshold: f64,

    /// Request counts strictly above this value are high risk
    pub max_requests_per_day: u64,
}

impl SecurityConfig {
    pub fn new(anomaly_threshold: f64, max_requests_per_day: u64) -> Self {
        Self {
            anomaly_threshold,
            max_requests_per_day,
        }
    }
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Revenue generated if the customer is retained
    pub revenue_per_user: f64,

    /// Cost of one retention incentive
    pub incentive_cost: f64,

    /// Expected values strictly above this threshold trigger an intervention
    #[serde(default)]
    pub roi_threshold: f64,

    /// Risk screening thresholds
    pub security: SecurityConfig,

    /// Client name (audit metadata only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl EngineConfig {
    /// Create a new configuration with `roi_threshold` at 0 and no client name
    pub fn new(revenue_per_user: f64, incentive_cost: f64, security: SecurityConfig) -> Self {
        Self {
            revenue_per_user,
            incentive_cost,
            roi_threshold: 0.0,
            security,
            client_name: None,
        }
    }

    /// Set the ROI threshold
    pub fn with_roi_threshold(mut self, roi_threshold: f64) -> Self {
        self.roi_threshold = roi_threshold;
        self
    }

    /// Set the client name
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Build a configuration from a loosely-typed document.
    ///
    /// Every key in [`REQUIRED_KEYS`] is checked before deserialization so that an
    /// absent key is reported by its dotted path.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CoreError::InvalidConfiguration(
                "configuration document must be a mapping".to_string(),
            ));
        }

        for key in REQUIRED_KEYS {
            if lookup_path(value, key).map_or(true, |v| v.is_null()) {
                return Err(CoreError::configuration(*key));
            }
        }

        let config: EngineConfig = serde_json::from_value(value.clone())
            .map_err(|e| CoreError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite monetary values and thresholds
    pub fn validate(&self) -> Result<()> {
        let numeric = [
            ("revenue_per_user", self.revenue_per_user),
            ("incentive_cost", self.incentive_cost),
            ("roi_threshold", self.roi_threshold),
            ("security.anomaly_threshold", self.security.anomaly_threshold),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(CoreError::InvalidConfiguration(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Client label for audit records
    pub fn client_label(&self) -> &str {
        self.client_name.as_deref().unwrap_or(UNKNOWN_CLIENT)
    }
}

fn lookup_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    path.split('.').try_fold(value, |current, segment| current.get(segment))
}
