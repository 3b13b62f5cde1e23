//! Mock implementations for testing

use crate::llm::provider::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, TokenUsage,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock LLM provider for testing
///
/// Returns canned responses in sequence, cycling when the batch is longer than
/// the response list. `with_failure` makes every call fail.
#[derive(Debug)]
pub struct MockProvider {
    pub responses: Vec<String>,
    pub current_response: Arc<Mutex<usize>>,
    pub should_fail: bool,
}

impl MockProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            current_response: Arc::new(Mutex::new(0)),
            should_fail: false,
        }
    }

    pub fn single_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    pub fn with_failure() -> Self {
        Self {
            responses: vec![],
            current_response: Arc::new(Mutex::new(0)),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if self.should_fail {
            return Err(LlmError::RequestFailed("Mock LLM failure".to_string()));
        }

        let mut current = self.current_response.lock().await;
        let response_idx = *current % self.responses.len().max(1);
        *current += 1;

        let content = if self.responses.is_empty() {
            "Mock response".to_string()
        } else {
            self.responses[response_idx].clone()
        };

        Ok(CompletionResponse {
            content: Some(content),
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            },
        })
    }
}
