//! Crate-level error type
//!
//! Folds the module error enums into one [`AgentError`] for callers that span
//! spec loading, task execution, and provider calls.

use crate::codegen::CodegenError;
use crate::config::ConfigError;
use crate::llm::provider::LlmError;
use crate::tasks::TaskError;
use thiserror::Error;

/// Main error type for agentspec operations
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    #[error("LLM provider error: {0}")]
    Llm(#[from] LlmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Code generation error: {0}")]
    Codegen(#[from] CodegenError),
}

/// Result type for agentspec operations
pub type AgentResult<T> = Result<T, AgentError>;
