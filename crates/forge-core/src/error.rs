//! Error types for DecisionForge Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A required configuration key is absent
    #[error("Configuration error: missing required key '{field}'")]
    Configuration { field: String },

    /// Configuration is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required input field is absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input field has the wrong type
    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField { field: String, expected: String },

    /// An input value lies outside its documented range
    #[error("Field '{field}' out of range: {value} not in [{min}, {max}]")]
    RangeViolation {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoreError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        CoreError::MissingField {
            field: field.into(),
        }
    }

    pub fn configuration(field: impl Into<String>) -> Self {
        CoreError::Configuration {
            field: field.into(),
        }
    }

    /// True for errors that belong to a single evaluated case rather than the engine setup
    pub fn is_case_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField { .. }
                | CoreError::InvalidField { .. }
                | CoreError::RangeViolation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
