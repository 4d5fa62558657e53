//! Errors raised while talking to an LLM provider

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LLMError>;

#[derive(Debug, Error)]
pub enum LLMError {
    /// The provider could not be reached, or its reply could not be read
    #[error("LLM transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status
    #[error("LLM provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider reported a failure of its own
    #[error("LLM provider failed: {0}")]
    Provider(String),

    /// Client settings were unusable
    #[error("LLM client setup failed: {0}")]
    Setup(String),

    /// Reply body was not valid JSON
    #[error("LLM reply is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reply was JSON but lacked an expected field
    #[error("LLM reply is missing {0}")]
    MalformedReply(String),
}
