//! Integration tests for the OpenAI provider
//!
//! Tests behavioral contracts against a local mock server:
//! - request/response handling
//! - error scenarios (auth failures, rate limits, malformed bodies)

use agentspec::llm::provider::{CompletionRequest, LlmError, LlmProvider, Message};
use agentspec::llm::providers::openai::{OpenAiConfig, OpenAiProvider};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> OpenAiConfig {
    OpenAiConfig {
        api_key: "test-api-key".to_string(),
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn test_request(model: &str) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            Message::system("Be concise and answer in one sentence."),
            Message::user("Where does 'Hello World' come from?"),
        ],
        model: model.to_string(),
        temperature: Some(0.7),
        max_tokens: None,
    }
}

#[tokio::test]
async fn test_successful_completion() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-3.5-turbo",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "It first appeared in a 1972 Bell Labs tutorial."
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 15,
            "total_tokens": 25
        }
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::new(test_config(&mock_server.uri())).unwrap();
    let response = provider.complete(test_request("gpt-3.5-turbo")).await.unwrap();

    assert_eq!(
        response.content,
        Some("It first appeared in a 1972 Bell Labs tutorial.".to_string())
    );
    assert_eq!(response.model, "gpt-3.5-turbo");
    assert_eq!(response.usage.total_tokens, 25);
}

#[tokio::test]
async fn test_authentication_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.complete(test_request("gpt-3.5-turbo")).await;

    assert!(matches!(result, Err(LlmError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.complete(test_request("gpt-3.5-turbo")).await;

    assert!(matches!(result, Err(LlmError::RateLimitExceeded(_))));
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.complete(test_request("gpt-3.5-turbo")).await;

    assert!(matches!(result, Err(LlmError::ApiError(_))));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = OpenAiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.complete(test_request("gpt-3.5-turbo")).await;

    assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
}
