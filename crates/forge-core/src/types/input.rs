//! Decision inputs
//!
//! A `DecisionInput` can only be built through validated constructors, so a value
//! that reaches the engine is always in range.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Loosely-typed input record, as received from an upstream boundary
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

const ANOMALY_SCORE: &str = "anomaly_score";
const REQUEST_COUNT_TODAY: &str = "request_count_today";
const EXPECTED_LIFT: &str = "expected_lift";
const CHURN: &str = "churn";

/// One evaluated case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecisionInput")]
pub struct DecisionInput {
    anomaly_score: f64,
    request_count_today: u64,
    expected_lift: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    churn: Option<f64>,
}

#[derive(Deserialize)]
struct RawDecisionInput {
    anomaly_score: f64,
    request_count_today: u64,
    expected_lift: f64,
    #[serde(default)]
    churn: Option<f64>,
}

impl TryFrom<RawDecisionInput> for DecisionInput {
    type Error = CoreError;

    fn try_from(raw: RawDecisionInput) -> Result<Self> {
        let input = DecisionInput::new(raw.anomaly_score, raw.request_count_today, raw.expected_lift)?;
        match raw.churn {
            Some(churn) => input.with_churn(churn),
            None => Ok(input),
        }
    }
}

impl DecisionInput {
    /// Create a validated input. Scores must lie in `[0, 1]`.
    pub fn new(anomaly_score: f64, request_count_today: u64, expected_lift: f64) -> Result<Self> {
        Ok(Self {
            anomaly_score: unit_interval(ANOMALY_SCORE, anomaly_score)?,
            request_count_today,
            expected_lift: unit_interval(EXPECTED_LIFT, expected_lift)?,
            churn: None,
        })
    }

    /// Attach a churn probability
    pub fn with_churn(mut self, churn: f64) -> Result<Self> {
        self.churn = Some(unit_interval(CHURN, churn)?);
        Ok(self)
    }

    /// Extract an input from a loose key/value record.
    ///
    /// Required keys are checked in the order `anomaly_score`,
    /// `request_count_today`, `expected_lift`; a `null` value counts as absent.
    /// Unknown keys are ignored.
    pub fn from_fields(fields: &FieldMap) -> Result<Self> {
        let anomaly_score = required_number(fields, ANOMALY_SCORE)?;
        let request_count_today = required_count(fields, REQUEST_COUNT_TODAY)?;
        let expected_lift = required_number(fields, EXPECTED_LIFT)?;

        let input = Self::new(anomaly_score, request_count_today, expected_lift)?;
        match optional_number(fields, CHURN)? {
            Some(churn) => input.with_churn(churn),
            None => Ok(input),
        }
    }

    pub fn anomaly_score(&self) -> f64 {
        self.anomaly_score
    }

    pub fn request_count_today(&self) -> u64 {
        self.request_count_today
    }

    pub fn expected_lift(&self) -> f64 {
        self.expected_lift
    }

    pub fn churn(&self) -> Option<f64> {
        self.churn
    }

    /// Render back into a field map (used for audit records and prompts)
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(ANOMALY_SCORE.to_string(), self.anomaly_score.into());
        fields.insert(
            REQUEST_COUNT_TODAY.to_string(),
            self.request_count_today.into(),
        );
        fields.insert(EXPECTED_LIFT.to_string(), self.expected_lift.into());
        if let Some(churn) = self.churn {
            fields.insert(CHURN.to_string(), churn.into());
        }
        fields
    }
}

fn unit_interval(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::RangeViolation {
            field: field.to_string(),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn present<'a>(fields: &'a FieldMap, field: &str) -> Option<&'a serde_json::Value> {
    fields.get(field).filter(|v| !v.is_null())
}

fn required_number(fields: &FieldMap, field: &str) -> Result<f64> {
    let value = present(fields, field).ok_or_else(|| CoreError::missing_field(field))?;
    value.as_f64().ok_or_else(|| CoreError::InvalidField {
        field: field.to_string(),
        expected: "number".to_string(),
    })
}

fn optional_number(fields: &FieldMap, field: &str) -> Result<Option<f64>> {
    match present(fields, field) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| CoreError::InvalidField {
            field: field.to_string(),
            expected: "number".to_string(),
        }),
    }
}

fn required_count(fields: &FieldMap, field: &str) -> Result<u64> {
    let value = present(fields, field).ok_or_else(|| CoreError::missing_field(field))?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }

    let number = value.as_f64().ok_or_else(|| CoreError::InvalidField {
        field: field.to_string(),
        expected: "non-negative integer".to_string(),
    })?;

    if number < 0.0 {
        return Err(CoreError::RangeViolation {
            field: field.to_string(),
            value: number,
            min: 0.0,
            max: f64::INFINITY,
        });
    }

    // Whole floats such as `15.0` are accepted
    if number.is_finite() && number.fract() == 0.0 && number <= u64::MAX as f64 {
        Ok(number as u64)
    } else {
        Err(CoreError::InvalidField {
            field: field.to_string(),
            expected: "non-negative integer".to_string(),
        })
    }
}
