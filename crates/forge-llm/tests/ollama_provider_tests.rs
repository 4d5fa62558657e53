//! Ollama provider tests
//!
//! These tests use mockito to mock the Ollama chat endpoint.

use forge_llm::{LLMClient, LLMError, LLMRequest, OllamaProvider};
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_ollama_chat_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "llama3.2",
            "stream": false,
            "messages": [{ "role": "user", "content": "Explain the decision" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "model": "llama3.2",
                "message": { "role": "assistant", "content": "Intervene: value is positive." },
                "done": true,
                "done_reason": "stop",
                "prompt_eval_count": 12,
                "eval_count": 8
            }"#,
        )
        .create_async()
        .await;

    let provider = OllamaProvider::with_base_url(server.url());
    let request = LLMRequest::new("Explain the decision".to_string(), "llama3.2".to_string());
    let response = provider.call(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "Intervene: value is positive.");
    assert_eq!(response.usage.prompt_tokens, 12);
    assert_eq!(response.usage.total(), 20);
    assert_eq!(response.finish_reason, "stop");
}

#[tokio::test]
async fn test_ollama_sends_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "messages": [
                { "role": "system", "content": "Be brief" },
                { "role": "user", "content": "Hi" }
            ],
            "options": { "num_predict": 64 }
        })))
        .with_status(200)
        .with_body(r#"{"message": {"content": "ok"}}"#)
        .create_async()
        .await;

    let provider = OllamaProvider::with_base_url(server.url());
    let request = LLMRequest::new("Hi", "llama3.2")
        .with_system("Be brief")
        .with_max_tokens(64);
    let response = provider.call(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "ok");
    assert_eq!(response.usage.total(), 0);
}

#[tokio::test]
async fn test_ollama_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(404)
        .with_body(r#"{"error": "model 'llama9' not found"}"#)
        .create_async()
        .await;

    let provider = OllamaProvider::with_base_url(server.url());
    let request = LLMRequest::new("Hi".to_string(), "llama9".to_string());
    let err = provider.call(request).await.unwrap_err();

    match err {
        LLMError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ollama_missing_content() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"done": true}"#)
        .create_async()
        .await;

    let provider = OllamaProvider::with_base_url(server.url());
    let request = LLMRequest::new("Hi".to_string(), "llama3.2".to_string());
    let err = provider.call(request).await.unwrap_err();

    assert!(matches!(err, LLMError::MalformedReply(ref field) if field == "message.content"));
}

#[tokio::test]
async fn test_ollama_unreachable_server() {
    let provider = OllamaProvider::with_base_url("http://127.0.0.1:1".to_string());
    let request = LLMRequest::new("Hi", "llama3.2");
    let err = provider.call(request).await.unwrap_err();

    assert!(matches!(err, LLMError::Transport(_)));
}

#[tokio::test]
async fn test_ollama_invalid_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let provider = OllamaProvider::with_base_url(server.url());
    let err = provider
        .call(LLMRequest::new("Hi", "llama3.2"))
        .await
        .unwrap_err();

    assert!(matches!(err, LLMError::Decode(_)));
}
