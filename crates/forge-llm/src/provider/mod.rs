//! LLM provider implementations

mod mock;
mod ollama;

pub use mock::MockProvider;
pub use ollama::{OllamaProvider, DEFAULT_OLLAMA_URL};
