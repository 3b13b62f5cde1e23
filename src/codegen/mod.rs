//! Spec transpilation and export
//!
//! Turns an [`AgentSpec`] into runnable Python source for a target agent
//! framework, or into a serialized export of the spec itself. Task batches are
//! a runtime concern and do not appear in the generated code.

use crate::config::AgentSpec;
use std::str::FromStr;
use thiserror::Error;

/// Python agent frameworks a spec can be transpiled to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFramework {
    PydanticAi,
    LangChain,
}

impl FromStr for TargetFramework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pydanticai" | "pydantic-ai" => Ok(TargetFramework::PydanticAi),
            "langchain" => Ok(TargetFramework::LangChain),
            other => Err(CodegenError::UnsupportedFramework(other.to_string())),
        }
    }
}

/// Export formats for the spec itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" => Ok(ExportFormat::Yaml),
            other => Err(CodegenError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Code generation errors
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("YAML export not implemented yet")]
    YamlNotImplemented,
    #[error("Failed to serialize spec: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Generate Python source for the target framework.
pub fn generate(framework: TargetFramework, spec: &AgentSpec) -> String {
    match framework {
        TargetFramework::PydanticAi => generate_pydantic_ai(spec),
        TargetFramework::LangChain => generate_langchain(spec),
    }
}

/// Export the spec in the requested format.
pub fn export(format: ExportFormat, spec: &AgentSpec) -> Result<String, CodegenError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(spec)?),
        ExportFormat::Yaml => Err(CodegenError::YamlNotImplemented),
    }
}

fn generate_pydantic_ai(spec: &AgentSpec) -> String {
    format!(
        r#"from pydantic_ai import Agent

agent = Agent(
    "{model}",
    system_prompt="{system_prompt}"
)

result = agent.run_sync("{query}")
print(result.data)
"#,
        model = spec.model,
        system_prompt = spec.system_prompt,
        query = spec.query,
    )
}

fn generate_langchain(spec: &AgentSpec) -> String {
    format!(
        r#"from langchain.llms import OpenAI

llm = OpenAI(model_name="{model}", temperature={temperature})
response = llm("{query}")
print(response)
"#,
        model = spec.model,
        temperature = spec.temperature,
        query = spec.query,
    )
}
