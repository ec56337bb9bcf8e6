//! Dossier CLI
//!
//! Command-line demo for a managed vector store: upload a document, wait
//! for the ingest job, ask a grounded question, clean up the remote
//! resources.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dossier")]
#[command(about = "Document Q&A demo against a managed vector store", long_about = None)]
struct Cli {
    /// Service endpoint, e.g. https://my-resource.openai.azure.com
    #[arg(long, env = "DOSSIER_ENDPOINT")]
    endpoint: String,

    /// Model deployment used for answer generation
    #[arg(long, env = "DOSSIER_DEPLOYMENT")]
    deployment: String,

    /// Service API version
    #[arg(long, env = "DOSSIER_API_VERSION", default_value = "2025-04-01-preview")]
    api_version: String,

    /// Shared key credential
    #[arg(long, env = "DOSSIER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Bearer token credential; wins over the shared key when both are set
    #[arg(long, env = "DOSSIER_BEARER_TOKEN", hide_env_values = true)]
    bearer_token: Option<String>,

    /// Reuse an already-uploaded file id instead of uploading again
    #[arg(long, env = "DOSSIER_FILE_ID")]
    file_id: Option<String>,

    /// Seconds between ingest status checks
    #[arg(long, env = "DOSSIER_POLL_INTERVAL", default_value_t = 5)]
    poll_interval: u64,

    /// Overall bound in seconds on the ingest wait, 0 to poll forever
    #[arg(long, env = "DOSSIER_POLL_TIMEOUT", default_value_t = 600)]
    poll_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dossier_cli=info,dossier_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        endpoint: cli.endpoint,
        deployment: cli.deployment,
        api_version: cli.api_version,
        api_key: cli.api_key,
        bearer_token: cli.bearer_token,
        file_id: cli.file_id,
        poll_interval: Duration::from_secs(cli.poll_interval),
        poll_timeout: (cli.poll_timeout > 0).then(|| Duration::from_secs(cli.poll_timeout)),
    };
    config.validate()?;

    debug!(endpoint = %config.endpoint, deployment = %config.deployment, "configuration loaded");

    handle_command(cli.command, &config).await
}
