//! DecisionForge LLM Integration
//!
//! This crate provides the language-model client used by the explanation and
//! insights layer:
//! - A provider-neutral client trait (`LLMClient`)
//! - A local Ollama provider (HTTP)
//! - A mock provider for tests and offline runs
//!
//! **Note**: LLM calls are slow and may fail. Decisions never wait on them; the
//! SDK calls a provider only after a decision is complete.

// Re-export core types
pub use client::{GenerationOptions, LLMClient, LLMRequest, LLMResponse, TokenUsage};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{MockProvider, OllamaProvider, DEFAULT_OLLAMA_URL};

pub mod client;
pub mod error;
pub mod provider;
