//! Ollama provider implementation (local models over HTTP)

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Default address of a local Ollama server
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Ollama chat provider
pub struct OllamaProvider {
    base_url: String,
    client: Client,
}

impl OllamaProvider {
    /// Create a provider for the local default server
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_OLLAMA_URL.to_string())
    }

    /// Create with custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create with a per-request timeout. The provider never retries.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::Setup(format!("HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for OllamaProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(json!({
                "role": "system",
                "content": system
            }));
        }
        messages.push(json!({
            "role": "user",
            "content": request.prompt
        }));

        let mut body = json!({
            "model": request.model,
            "messages": messages,
            "stream": false,
        });

        if !request.options.is_empty() {
            let mut options = serde_json::Map::new();
            if let Some(temperature) = request.options.temperature {
                options.insert("temperature".to_string(), json!(temperature));
            }
            if let Some(max_tokens) = request.options.max_tokens {
                options.insert("num_predict".to_string(), json!(max_tokens));
            }
            body["options"] = serde_json::Value::Object(options);
        }

        tracing::debug!(model = %request.model, "Calling Ollama chat endpoint");

        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let resp_text = resp.text().await?;

        if !status.is_success() {
            return Err(LLMError::Status {
                status: status.as_u16(),
                body: resp_text,
            });
        }

        let resp_json: serde_json::Value = serde_json::from_str(&resp_text)?;

        let content = resp_json["message"]["content"]
            .as_str()
            .ok_or_else(|| LLMError::MalformedReply("message.content".to_string()))?
            .to_string();

        let finish_reason = resp_json["done_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        Ok(LLMResponse::new(content, request.model)
            .with_usage(
                token_count(&resp_json["prompt_eval_count"]),
                token_count(&resp_json["eval_count"]),
            )
            .with_finish_reason(finish_reason))
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

fn token_count(value: &serde_json::Value) -> u32 {
    value
        .as_u64()
        .map_or(0, |count| u32::try_from(count).unwrap_or(u32::MAX))
}
