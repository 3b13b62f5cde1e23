//! Agent wiring
//!
//! An [`Agent`] ties an injected [`LlmProvider`] to a [`TaskRunner`]. A run
//! submits the query to the provider and executes the task batch locally,
//! returning the response text alongside the per-task results.

use crate::config::AgentSpec;
use crate::error::AgentResult;
use crate::llm::provider::{CompletionRequest, LlmProvider, Message};
use crate::tasks::{TaskRequest, TaskRunner};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a single agent run
#[derive(Debug, Clone)]
pub struct AgentResponse {
    /// Response text from the completion provider
    pub data: String,
    /// One result string per task request, in input order
    pub task_results: Vec<String>,
}

/// An agent: prompt settings, an LLM provider, and a task runner.
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    model: String,
    system_prompt: String,
    temperature: Option<f32>,
    runner: TaskRunner,
}

impl Agent {
    /// Create an agent with the builtin tasks registered.
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            system_prompt: system_prompt.into(),
            temperature: None,
            runner: TaskRunner::with_builtin_tasks(),
        }
    }

    /// Build an agent from a loaded spec.
    pub fn from_spec(spec: &AgentSpec, provider: Arc<dyn LlmProvider>) -> Self {
        Self::new(provider, &spec.model, &spec.system_prompt)
            .with_temperature(spec.temperature as f32)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The task runner, for registering additional handlers.
    pub fn runner_mut(&mut self) -> &mut TaskRunner {
        &mut self.runner
    }

    pub fn runner(&self) -> &TaskRunner {
        &self.runner
    }

    /// Submit a query and execute a task batch.
    ///
    /// The provider call and the task batch are independent: provider errors
    /// and task binding errors both abort the run, and task results keep the
    /// order of the requests.
    pub async fn run(&self, query: &str, tasks: &[TaskRequest]) -> AgentResult<AgentResponse> {
        info!(
            provider = %self.provider.name(),
            model = %self.model,
            task_count = tasks.len(),
            "running agent"
        );

        let request = CompletionRequest {
            messages: vec![
                Message::system(&self.system_prompt),
                Message::user(query),
            ],
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: None,
        };

        let completion = self.provider.complete(request).await?;
        debug!(
            total_tokens = completion.usage.total_tokens,
            "completion received"
        );

        let task_results = self.runner.run(tasks)?;

        Ok(AgentResponse {
            data: completion.content.unwrap_or_default(),
            task_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{TaskDescription, TaskError, TaskHandler};
    use crate::testing::MockProvider;
    use serde_json::{json, Map, Value};

    struct EchoTask;

    impl TaskHandler for EchoTask {
        fn describe(&self) -> TaskDescription {
            TaskDescription {
                name: "echo".to_string(),
                description: "Echo the input back".to_string(),
                parameters: json!({"type": "object"}),
            }
        }

        fn execute(&self, params: &Map<String, Value>) -> Result<String, TaskError> {
            let text = params.get("text").and_then(|v| v.as_str()).unwrap_or("");
            Ok(format!("Echo Task: {text}"))
        }
    }

    #[tokio::test]
    async fn test_agent_runs_query_and_tasks() {
        let provider = Arc::new(MockProvider::single_response("One sentence."));
        let agent = Agent::new(provider, "mock-model", "Be concise.");

        let tasks = vec![TaskRequest::new("greet").with_param("message", "Test")];
        let response = agent.run("Where does 'Hello World' come from?", &tasks).await.unwrap();

        assert_eq!(response.data, "One sentence.");
        assert_eq!(response.task_results, vec!["Greet Task: Test"]);
    }

    #[tokio::test]
    async fn test_custom_handler_registration() {
        let provider = Arc::new(MockProvider::single_response("ok"));
        let mut agent = Agent::new(provider, "mock-model", "");
        agent.runner_mut().register(Box::new(EchoTask));

        let tasks = vec![TaskRequest::new("echo").with_param("text", "hi")];
        let response = agent.run("query", &tasks).await.unwrap();
        assert_eq!(response.task_results, vec!["Echo Task: hi"]);
    }

    #[tokio::test]
    async fn test_from_spec_applies_temperature() {
        let spec = AgentSpec::from_json(
            r#"{"name": "a", "model": "gpt-3.5-turbo", "temperature": 0.2}"#,
        )
        .unwrap();
        let agent = Agent::from_spec(&spec, Arc::new(MockProvider::single_response("ok")));
        assert_eq!(agent.temperature, Some(0.2));
        assert_eq!(agent.model, "gpt-3.5-turbo");
    }
}
