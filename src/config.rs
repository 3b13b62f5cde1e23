//! Agent spec loading
//!
//! An [`AgentSpec`] is the framework-agnostic description of an agent: its
//! identity, model settings, query, and an optional task batch. Specs are read
//! from JSON or TOML files, chosen by file extension.

use crate::tasks::TaskRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Framework-agnostic agent specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskRequest>,
}

fn default_temperature() -> f64 {
    0.7
}

/// Spec loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read spec file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Unsupported spec file format: {0}")]
    UnsupportedFormat(String),
}

impl AgentSpec {
    /// Load a spec from a JSON or TOML file, dispatching on the extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::from_json(&content)?),
            Some("toml") => Ok(Self::from_toml(&content)?),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Create a test spec for unit testing
    #[cfg(test)]
    pub fn test_spec() -> Self {
        let json_content = r#"
        {
            "name": "HelloWorldAgent",
            "model": "gpt-3.5-turbo",
            "system_prompt": "Be concise and answer in one sentence.",
            "query": "Where does 'Hello World' come from?",
            "temperature": 0.7,
            "tasks": [
                {"task_name": "greet", "params": {"message": "Hello from the task runner!"}},
                {"task_name": "compute", "params": {"x": 5.0, "y": 7.0}},
                {"task_name": "sleep", "params": {"duration_sec": 0.01}}
            ]
        }
        "#;
        Self::from_json(json_content).expect("Test spec should parse")
    }
}
