//! Ingest command handler
//!
//! Uploads a document, creates a vector store, attaches the file and waits
//! for the ingest job to reach a terminal state.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::*;
use std::path::PathBuf;

use dossier_client::cleanup::{self, CleanupTargets};
use dossier_client::{IngestPoller, RemoteIngestProbe};
use dossier_core::domain::file::FilePurpose;
use dossier_core::dto::ingest::{AttachFile, ChunkingStrategy};
use dossier_core::dto::store::{CreateVectorStore, ExpiresAfter};

use crate::config::Config;
use crate::types::AttributePair;

/// Ingest command arguments
#[derive(Args)]
pub struct IngestArgs {
    /// Path to the document to upload
    pub file: PathBuf,

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
}

/// Ids of the resources a successful ingest leaves behind
pub struct IngestOutcome {
    pub vector_store_id: String,
    pub file_id: String,
}

/// Handle the ingest command
///
/// On a failed ingest job the vector store is deleted and the flow aborts;
/// the uploaded file is kept so a fixed configuration can reuse its id.
pub async fn handle_ingest(args: IngestArgs, config: &Config) -> Result<IngestOutcome> {
    let client = config.client();

    let file_id = match &config.file_id {
        Some(id) => {
            println!("Using existing file ID: {}", id.cyan());
            id.clone()
        }
        None => {
            let filename = args
                .file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("document")
                .to_string();
            let content = tokio::fs::read(&args.file)
                .await
                .with_context(|| format!("Failed to read {}", args.file.display()))?;

            let file = client
                .upload_file(&filename, content, FilePurpose::Assistants)
                .await
                .context("Failed to upload file")?;
            println!("File ID: {}", file.id.cyan());
            file.id
        }
    };

    let store = client
        .create_vector_store(CreateVectorStore {
            name: args.store_name.clone(),
            expires_after: Some(ExpiresAfter::last_active(args.expires_days)),
        })
        .await
        .context("Failed to create vector store")?;
    println!("Vector Store ID: {}", store.id.cyan());

    let attributes = args
        .attributes
        .into_iter()
        .map(|a| (a.key, a.value))
        .collect();

    let job = client
        .attach_file(
            &store.id,
            AttachFile {
                file_id: file_id.clone(),
                chunking_strategy: Some(ChunkingStrategy::fixed(
                    args.max_chunk_tokens,
                    args.chunk_overlap_tokens,
                )),
                attributes,
            },
        )
        .await
        .context("Failed to attach file to vector store")?;

    println!("{}", "Waiting for ingestion to complete...".dimmed());

    let poller = IngestPoller::new(config.poll_policy());
    let probe = RemoteIngestProbe::new(&client, &store.id, &job.id);

    match poller.wait_until_terminal(&probe).await {
        Ok(_) => {
            println!("{}", "File ingested successfully.".green());
            Ok(IngestOutcome {
                vector_store_id: store.id,
                file_id,
            })
        }
        Err(e) => {
            eprintln!("{}", format!("Ingestion did not complete: {}", e).red());
            cleanup::delete_resources(&client, &CleanupTargets::store(store.id.clone())).await;
            bail!("ingestion of file {} into store {} aborted", file_id, store.id);
        }
    }
}
