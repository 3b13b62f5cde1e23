//! agentspec - Main Entry Point
//!
//! CLI over a universal agent spec: run its task batch, submit its query to a
//! live provider, transpile it to a Python agent framework, or export it.

use agentspec::agent::Agent;
use agentspec::codegen::{self, ExportFormat, TargetFramework};
use agentspec::config::AgentSpec;
use agentspec::error::AgentResult;
use agentspec::llm::providers::openai::{OpenAiConfig, OpenAiProvider};
use agentspec::observability::init_default_logging;
use agentspec::tasks::TaskRunner;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

/// Universal agent spec toolkit
#[derive(Parser)]
#[command(name = "agentspec")]
#[command(about = "Run, transpile, and export universal agent specs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute the spec's task batch locally
    Run {
        /// Spec file (.json or .toml)
        spec: PathBuf,
    },
    /// Submit the spec's query to the configured provider and run its tasks
    Query {
        /// Spec file (.json or .toml)
        spec: PathBuf,

        /// OpenAI API key
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Generate Python code for a target agent framework
    Transpile {
        /// Spec file (.json or .toml)
        spec: PathBuf,

        /// Target framework: pydanticai or langchain
        #[arg(short, long, default_value = "pydanticai")]
        framework: String,
    },
    /// Export the spec in a serialized format
    Export {
        /// Spec file (.json or .toml)
        spec: PathBuf,

        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// List the builtin tasks and their parameter schemas
    Tasks,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let result = match cli.command {
        Commands::Run { spec } => run_spec(&spec).await,
        Commands::Query { spec, api_key } => query_spec(&spec, api_key).await,
        Commands::Transpile { spec, framework } => transpile_spec(&spec, &framework),
        Commands::Export { spec, format } => export_spec(&spec, &format),
        Commands::Tasks => {
            list_tasks();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Execute the spec's task batch without touching any provider.
async fn run_spec(path: &Path) -> AgentResult<()> {
    let spec = AgentSpec::from_file(path)?;

    println!(
        "Running Agent: {}\nModel: {}\nSystem Prompt: {}\nQuery: {}\n",
        spec.name, spec.model, spec.system_prompt, spec.query
    );

    if spec.tasks.is_empty() {
        println!("No tasks defined. Simulating query execution...");
        sleep(Duration::from_secs(1)).await;
        println!("Query executed.");
        return Ok(());
    }

    let runner = TaskRunner::with_builtin_tasks();
    let results = runner.run(&spec.tasks)?;

    println!("All tasks completed. Results:");
    for (i, result) in results.iter().enumerate() {
        println!("Task {} result: {}", i + 1, result);
    }

    Ok(())
}

/// Submit the spec's query to OpenAI and run its task batch.
async fn query_spec(path: &Path, api_key: String) -> AgentResult<()> {
    let spec = AgentSpec::from_file(path)?;
    info!(agent = %spec.name, model = %spec.model, "loaded spec");

    let provider = OpenAiProvider::new(OpenAiConfig {
        api_key,
        ..OpenAiConfig::default()
    })?;
    let agent = Agent::from_spec(&spec, Arc::new(provider));

    let response = agent.run(&spec.query, &spec.tasks).await?;

    println!("Query Response: {}", response.data);
    for (i, result) in response.task_results.iter().enumerate() {
        println!("Task {} result: {}", i + 1, result);
    }

    Ok(())
}

fn transpile_spec(path: &Path, framework: &str) -> AgentResult<()> {
    let spec = AgentSpec::from_file(path)?;
    let framework: TargetFramework = framework.parse()?;

    println!("{}", codegen::generate(framework, &spec));
    Ok(())
}

fn export_spec(path: &Path, format: &str) -> AgentResult<()> {
    let spec = AgentSpec::from_file(path)?;
    let format: ExportFormat = format.parse()?;

    println!("{}", codegen::export(format, &spec)?);
    Ok(())
}

fn list_tasks() {
    let runner = TaskRunner::with_builtin_tasks();
    for description in runner.descriptions() {
        println!("{} - {}", description.name, description.description);
        println!("  parameters: {}", description.parameters);
    }
}
