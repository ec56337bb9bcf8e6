//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod ask;
mod cleanup;
mod ingest;
mod run;

pub use ask::AskArgs;
pub use cleanup::CleanupArgs;
pub use ingest::IngestArgs;
pub use run::RunArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Upload a document and ingest it into a new vector store
    Ingest(IngestArgs),
    /// Ask a question against an existing vector store
    Ask(AskArgs),
    /// Run the whole demo: ingest, ask, clean up
    Run(RunArgs),
    /// Delete remote resources left over from a previous run
    Cleanup(CleanupArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Ingest(args) => ingest::handle_ingest(args, config).await.map(|_| ()),
        Commands::Ask(args) => ask::handle_ask(args, config).await,
        Commands::Run(args) => run::handle_run(args, config).await,
        Commands::Cleanup(args) => cleanup::handle_cleanup(args, config).await,
    }
}
