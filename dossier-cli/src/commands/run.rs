//! End-to-end demo command
//!
//! The full flow in one shot: upload a document, ingest it into a fresh
//! vector store, ask a grounded question, then delete everything that was
//! created along the way.

use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use dossier_client::cleanup::{self, CleanupTargets};
use dossier_core::dto::response::AttributeFilter;

use crate::config::Config;
use crate::types::AttributePair;

use super::{ask, ingest};

/// Run command arguments
#[derive(Args)]
pub struct RunArgs {
    /// Path to the document to upload
    pub file: PathBuf,

    /// Question to ask once the document is searchable
    pub question: String,

    /// Name of the vector store to create
    #[arg(long, default_value = "Travel Brochure")]
    pub store_name: String,

    /// Days of inactivity before the store expires
    #[arg(long, default_value_t = 7)]
    pub expires_days: u32,

    /// Maximum chunk size in tokens
    #[arg(long, default_value_t = 100)]
    pub max_chunk_tokens: u32,

    /// Overlap between consecutive chunks in tokens
    #[arg(long, default_value_t = 20)]
    pub chunk_overlap_tokens: u32,

    /// Attribute attached to every chunk, as key=value (repeatable)
    #[arg(long = "attribute", value_parser = AttributePair::parse)]
    pub attributes: Vec<AttributePair>,

    /// Only search chunks whose attribute equals this key=value
    #[arg(long, value_parser = crate::types::parse_filter)]
    pub filter: Option<AttributeFilter>,

    /// Maximum number of search results handed to the model
    #[arg(long, default_value_t = 1)]
    pub max_results: u32,

    /// Drop search results scoring below this threshold
    #[arg(long, default_value_t = 0.01)]
    pub score_threshold: f64,

    /// Keep the remote resources instead of deleting them at the end
    #[arg(long)]
    pub keep: bool,
}

/// Handle the run command
///
/// Failures are reported as plain text; cleanup still runs for everything
/// that was created before the failure. A failed ingest already deletes
/// its store (but not the file) and aborts before the question is sent.
pub async fn handle_run(args: RunArgs, config: &Config) -> Result<()> {
    let client = config.client();
    let mut targets = CleanupTargets::default();

    let outcome = run_flow(&args, config, &mut targets).await;

    if let Err(e) = &outcome {
        eprintln!("{}", format!("An error occurred: {:#}", e).red());
    }

    if args.keep {
        print_kept_targets(&targets);
        return outcome;
    }

    if !targets.is_empty() {
        println!("{}", "Cleaning up remote resources...".dimmed());
        cleanup::delete_resources(&client, &targets).await;
        println!("{}", "Cleanup completed.".dimmed());
    }

    outcome
}

async fn run_flow(args: &RunArgs, config: &Config, targets: &mut CleanupTargets) -> Result<()> {
    let outcome = ingest::handle_ingest(
        ingest::IngestArgs {
            file: args.file.clone(),
            store_name: args.store_name.clone(),
            expires_days: args.expires_days,
            max_chunk_tokens: args.max_chunk_tokens,
            chunk_overlap_tokens: args.chunk_overlap_tokens,
            attributes: args.attributes.clone(),
        },
        config,
    )
    .await?;

    targets.vector_store_ids.push(outcome.vector_store_id.clone());
    // deleted at the end even when a pre-existing file id was reused
    targets.file_id = Some(outcome.file_id.clone());

    let client = config.client();
    let response = ask::send_question(
        &client,
        config,
        &outcome.vector_store_id,
        &args.question,
        args.max_results,
        args.filter.clone(),
        args.score_threshold,
    )
    .await?;
    targets.response_ids.push(response.id.clone());

    println!();
    ask::print_response(&response, false)
}

fn print_kept_targets(targets: &CleanupTargets) {
    if targets.is_empty() {
        return;
    }

    println!();
    println!("{}", "Keeping remote resources:".bold());
    for vector_store_id in &targets.vector_store_ids {
        println!("  Vector store: {}", vector_store_id.cyan());
    }
    for response_id in &targets.response_ids {
        println!("  Response:     {}", response_id.cyan());
    }
    if let Some(file_id) = &targets.file_id {
        println!("  File:         {}", file_id.cyan());
    }
    println!(
        "{}",
        "Pass these ids to `dossier cleanup` when you are done.".dimmed()
    );
}
