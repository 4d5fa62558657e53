//! Runtime error types

use forge_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// An audit sink could not accept a record
    #[error("Audit sink '{sink}' failed: {reason}")]
    AuditSink { sink: String, reason: String },

    /// Not enough recorded decisions for the requested analysis
    #[error("Insufficient data: {available} decisions recorded, {required} required")]
    InsufficientData { available: usize, required: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Data model error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
