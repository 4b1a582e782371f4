use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use reunite_push::event::EventContext;
use reunite_push::github::client::EnvClient;
use reunite_push::inputs::{self, EnvInputs};
use reunite_push::run::{self, failure_command};
use reunite_push::workflow;

#[derive(Parser)]
#[command(
    name = "reunite-push",
    version,
    about = "Normalize a push or pull request event for documentation sync"
)]
struct Cli {
    /// Path to a redocly config file. Overrides the `configPath` input.
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries workflow commands and the artifact.
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            println!("{}", failure_command(&err));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let workspace_root = inputs::workspace_root();
    let ctx = EventContext::from_env()?;

    // Single await point: the commit lookup.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    let artifact = runtime.block_on(run::run(
        &EnvInputs,
        &workspace_root,
        &ctx,
        &EnvClient,
        cli.config.as_deref(),
    ))?;

    let json = serde_json::to_string_pretty(&artifact).context("serializing push artifact")?;
    println!("{json}");

    if let Ok(output) = std::env::var("GITHUB_OUTPUT")
        && !output.is_empty()
    {
        workflow::set_output(Path::new(&output), "descriptor", &json)?;
    }
    Ok(())
}
