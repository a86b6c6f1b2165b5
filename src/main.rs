//! tinyagent - Command-Line Entry Point
//!
//! Parses the prompt, loads configuration, runs the agent loop, and prints
//! the model's final answer to stdout.

use clap::Parser;
use tinyagent::{agent::Agent, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run a prompt through a tool-calling agent loop.
#[derive(Debug, Parser)]
#[command(name = "tinyagent", version, about)]
struct Args {
    /// The user prompt to send to the model
    #[arg(short = 'p', long = "prompt")]
    prompt: String,

    /// Model to use (overrides DEFAULT_MODEL)
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging. Everything goes to stderr so stdout carries only
    // the final answer.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinyagent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Configuration errors (a missing API key) surface here, before any
    // network call is made.
    let config = Config::from_env()?;
    let model = args
        .model
        .unwrap_or_else(|| config.default_model.clone());
    info!("Loaded configuration: model={}", model);

    let agent = Agent::new(config);
    let outcome = agent.run_task(&args.prompt, &model).await?;

    info!(
        "Task finished in {} iteration(s), {} prompt / {} completion tokens",
        outcome.iterations, outcome.usage.prompt_tokens, outcome.usage.completion_tokens
    );
    println!("{}", outcome.response);

    Ok(())
}
