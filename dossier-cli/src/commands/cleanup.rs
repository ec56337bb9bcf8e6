//! Cleanup command handler
//!
//! Deletes remote resources by id, best-effort, for runs that kept them or
//! were interrupted.

use anyhow::Result;
use clap::Args;
use colored::*;

use dossier_client::cleanup::{self, CleanupTargets};

use crate::config::Config;

/// Cleanup command arguments
#[derive(Args)]
pub struct CleanupArgs {
    /// Vector store id to delete (repeatable)
    #[arg(long = "store-id")]
    pub store_ids: Vec<String>,

    /// Response id to delete (repeatable)
    #[arg(long = "response-id")]
    pub response_ids: Vec<String>,

    /// Uploaded file id to delete
    #[arg(long = "file-id")]
    pub file_id: Option<String>,
}

/// Handle the cleanup command
pub async fn handle_cleanup(args: CleanupArgs, config: &Config) -> Result<()> {
    let targets = CleanupTargets {
        vector_store_ids: args.store_ids,
        response_ids: args.response_ids,
        file_id: args.file_id,
    };

    if targets.is_empty() {
        println!("{}", "Nothing to delete.".yellow());
        return Ok(());
    }

    let client = config.client();
    cleanup::delete_resources(&client, &targets).await;
    println!("{}", "Cleanup completed.".green());

    Ok(())
}
