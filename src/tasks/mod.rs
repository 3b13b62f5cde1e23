//! Task dispatch system
//!
//! A task batch is an ordered list of [`TaskRequest`] records. The runner maps
//! each `task_name` to a registered handler and collects one string result per
//! request, in input order. Unrecognized names are not errors: they yield the
//! sentinel result `"Unknown Task: <name>"` and processing continues. Malformed
//! parameters for a recognized task, on the other hand, abort the batch and
//! propagate to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

pub mod builtin;
pub mod params;

pub use builtin::{compute, greet, sleep, DEFAULT_GREETING};
pub use params::Number;

/// A single task invocation: an operation name plus named parameters.
///
/// Requests have no identity beyond their position in the batch and are
/// consumed once by the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub task_name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl TaskRequest {
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            params: Map::new(),
        }
    }

    /// Builder-style parameter insertion, mainly for tests and examples.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// Task handler metadata: name, human description, and a JSON Schema fragment
/// describing the accepted parameters.
#[derive(Debug, Clone)]
pub struct TaskDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A named operation executable by the runner.
///
/// Handlers bind their own parameters from the request's `params` map; the
/// runner does not validate parameters against the schema in `describe()`.
pub trait TaskHandler: Send + Sync {
    fn describe(&self) -> TaskDescription;

    fn execute(&self, params: &Map<String, Value>) -> Result<String, TaskError>;
}

/// Task runner holding the dispatch table from task name to handler.
pub struct TaskRunner {
    handlers: HashMap<String, Box<dyn TaskHandler>>,
}

impl TaskRunner {
    /// Create an empty runner with no registered tasks.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a runner with the builtin `greet`, `compute`, and `sleep` tasks.
    pub fn with_builtin_tasks() -> Self {
        let mut runner = Self::new();
        runner.register(Box::new(builtin::GreetTask));
        runner.register(Box::new(builtin::ComputeTask));
        runner.register(Box::new(builtin::SleepTask));
        runner
    }

    /// Register a handler under the name from its description, replacing any
    /// previous handler with that name.
    pub fn register(&mut self, handler: Box<dyn TaskHandler>) {
        self.handlers.insert(handler.describe().name, handler);
    }

    /// Execute a batch of requests strictly in order.
    ///
    /// Returns one result string per request. An unknown `task_name` produces
    /// the `"Unknown Task: <name>"` sentinel and the batch continues; a handler
    /// error aborts the batch, and no partial result list is returned.
    pub fn run(&self, tasks: &[TaskRequest]) -> Result<Vec<String>, TaskError> {
        let mut results = Vec::with_capacity(tasks.len());

        for task in tasks {
            match self.handlers.get(&task.task_name) {
                Some(handler) => {
                    tracing::debug!(task_name = %task.task_name, "executing task");
                    results.push(handler.execute(&task.params)?);
                }
                None => {
                    tracing::debug!(task_name = %task.task_name, "unknown task name");
                    results.push(format!("Unknown Task: {}", task.task_name));
                }
            }
        }

        Ok(results)
    }

    /// Get the description of a registered task.
    pub fn describe_task(&self, task_name: &str) -> Option<TaskDescription> {
        self.handlers.get(task_name).map(|h| h.describe())
    }

    /// Descriptions of all registered tasks, sorted by name.
    pub fn descriptions(&self) -> Vec<TaskDescription> {
        let mut all: Vec<TaskDescription> =
            self.handlers.values().map(|h| h.describe()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Names of all registered tasks.
    pub fn list_tasks(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised while binding or executing a task's parameters.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task '{task}' missing required parameter '{param}'")]
    MissingParameter { task: String, param: String },
    #[error("task '{task}' got unexpected parameter '{param}'")]
    UnexpectedParameter { task: String, param: String },
    #[error("task '{task}' parameter '{param}' must be a string, got: {value}")]
    InvalidString {
        task: String,
        param: String,
        value: String,
    },
    #[error("task '{task}' parameter '{param}' is not a number: {value}")]
    InvalidNumber {
        task: String,
        param: String,
        value: String,
    },
}
