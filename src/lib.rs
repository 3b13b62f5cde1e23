//! agentspec - Universal agent spec toolkit
//!
//! A framework-agnostic agent specification with a task batch runner, an
//! opaque LLM provider seam, and transpilation of specs into Python agent
//! frameworks.
//!
//! # Overview
//!
//! This crate provides:
//! - A task dispatch table mapping task names to handlers, with builtin
//!   `greet`, `compute`, and `sleep` tasks
//! - Agent spec loading from JSON or TOML files
//! - An LLM provider abstraction with an OpenAI-compatible backend and a mock
//!   for tests
//! - Python code generation targeting pydantic-ai and LangChain
//!
//! # Quick Start
//!
//! ```rust
//! use agentspec::tasks::{TaskRequest, TaskRunner};
//!
//! let runner = TaskRunner::with_builtin_tasks();
//! let tasks = vec![
//!     TaskRequest::new("greet").with_param("message", "Hello from the task runner!"),
//!     TaskRequest::new("compute").with_param("x", 5.0).with_param("y", 7.0),
//!     TaskRequest::new("retry"),
//! ];
//!
//! let results = runner.run(&tasks).unwrap();
//! assert_eq!(results[0], "Greet Task: Hello from the task runner!");
//! assert_eq!(results[1], "Compute Task: 5.0 * 7.0 = 35.0");
//! assert_eq!(results[2], "Unknown Task: retry");
//! ```

pub mod agent;
pub mod codegen;
pub mod config;
pub mod error;
pub mod llm;
pub mod observability;
pub mod tasks;
pub mod testing;

pub use agent::{Agent, AgentResponse};
pub use config::{AgentSpec, ConfigError};
pub use error::{AgentError, AgentResult};
pub use tasks::{TaskDescription, TaskError, TaskHandler, TaskRequest, TaskRunner};
