//! Integration tests for the agent surface
//!
//! Uses the mock provider throughout; no live network or model dependency.

use agentspec::agent::Agent;
use agentspec::config::AgentSpec;
use agentspec::error::AgentError;
use agentspec::tasks::TaskRequest;
use agentspec::testing::MockProvider;
use std::sync::Arc;

fn hello_world_tasks() -> Vec<TaskRequest> {
    vec![
        TaskRequest::new("greet").with_param("message", "Hello from the task runner!"),
        TaskRequest::new("compute")
            .with_param("x", 5.0)
            .with_param("y", 7.0),
        TaskRequest::new("sleep").with_param("duration_sec", 0.01),
    ]
}

#[tokio::test]
async fn test_agent_returns_response_text_and_task_results() {
    let provider = Arc::new(MockProvider::single_response(
        "It first appeared in a 1972 Bell Labs tutorial.",
    ));
    let agent = Agent::new(provider, "gpt-3.5-turbo", "Be concise and answer in one sentence.");

    let response = agent
        .run("Where does 'Hello World' come from?", &hello_world_tasks())
        .await
        .unwrap();

    assert_eq!(response.data, "It first appeared in a 1972 Bell Labs tutorial.");
    assert_eq!(
        response.task_results,
        vec![
            "Greet Task: Hello from the task runner!",
            "Compute Task: 5.0 * 7.0 = 35.0",
            "Sleep Task Complete",
        ]
    );
}

#[tokio::test]
async fn test_agent_with_empty_task_batch() {
    let provider = Arc::new(MockProvider::single_response("answer"));
    let agent = Agent::new(provider, "gpt-3.5-turbo", "");

    let response = agent.run("a question", &[]).await.unwrap();
    assert_eq!(response.data, "answer");
    assert!(response.task_results.is_empty());
}

#[tokio::test]
async fn test_provider_failure_aborts_the_run() {
    let provider = Arc::new(MockProvider::with_failure());
    let agent = Agent::new(provider, "gpt-3.5-turbo", "");

    let result = agent.run("a question", &hello_world_tasks()).await;
    assert!(matches!(result, Err(AgentError::Llm(_))));
}

#[tokio::test]
async fn test_task_binding_failure_aborts_the_run() {
    let provider = Arc::new(MockProvider::single_response("answer"));
    let agent = Agent::new(provider, "gpt-3.5-turbo", "");

    let tasks = vec![TaskRequest::new("compute").with_param("x", true).with_param("y", 2)];
    let result = agent.run("a question", &tasks).await;
    assert!(matches!(result, Err(AgentError::Task(_))));
}

#[tokio::test]
async fn test_unknown_task_flows_through_as_result() {
    let provider = Arc::new(MockProvider::single_response("answer"));
    let agent = Agent::new(provider, "gpt-3.5-turbo", "");

    let response = agent
        .run("a question", &[TaskRequest::new("unknown")])
        .await
        .unwrap();
    assert_eq!(response.task_results, vec!["Unknown Task: unknown"]);
}

#[tokio::test]
async fn test_agent_built_from_spec_runs_its_tasks() {
    let spec = AgentSpec::from_json(
        r#"{
            "name": "HelloWorldAgent",
            "model": "gpt-3.5-turbo",
            "system_prompt": "Be concise and answer in one sentence.",
            "query": "Where does 'Hello World' come from?",
            "temperature": 0.7,
            "tasks": [
                {"task_name": "greet", "params": {"message": "Test message"}},
                {"task_name": "compute", "params": {"x": 2.0, "y": 3.0}}
            ]
        }"#,
    )
    .unwrap();

    let agent = Agent::from_spec(&spec, Arc::new(MockProvider::single_response("ok")));
    let response = agent.run(&spec.query, &spec.tasks).await.unwrap();

    assert_eq!(
        response.task_results,
        vec!["Greet Task: Test message", "Compute Task: 2.0 * 3.0 = 6.0"]
    );
}
