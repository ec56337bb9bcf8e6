//! Ask command handler
//!
//! Sends a question to the model with a file search tool scoped to an
//! existing vector store and prints the grounded answer.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use dossier_client::DossierClient;
use dossier_client::cleanup::{self, CleanupTargets};
use dossier_core::domain::response::ModelResponse;
use dossier_core::dto::response::{
    AttributeFilter, CreateResponse, FileSearchTool, INCLUDE_SEARCH_RESULTS, RankingOptions, Tool,
};

use crate::config::Config;

/// Ask command arguments
#[derive(Args)]
pub struct AskArgs {
    /// Question to ask
    pub question: String,

    /// Vector store to search
    #[arg(long)]
    pub store_id: String,

    /// Maximum number of search results handed to the model
    #[arg(long, default_value_t = 1)]
    pub max_results: u32,

    /// Only search chunks whose attribute equals this key=value
    #[arg(long, value_parser = crate::types::parse_filter)]
    pub filter: Option<AttributeFilter>,

    /// Drop search results scoring below this threshold
    #[arg(long, default_value_t = 0.01)]
    pub score_threshold: f64,

    /// Print the full response JSON instead of the extracted answer
    #[arg(long)]
    pub json: bool,

    /// Delete the stored response after printing it
    #[arg(long)]
    pub forget: bool,
}

/// Handle the ask command
pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let client = config.client();

    let response = send_question(
        &client,
        config,
        &args.store_id,
        &args.question,
        args.max_results,
        args.filter.clone(),
        args.score_threshold,
    )
    .await?;

    print_response(&response, args.json)?;

    if args.forget {
        cleanup::delete_resources(
            &client,
            &CleanupTargets {
                response_ids: vec![response.id.clone()],
                ..Default::default()
            },
        )
        .await;
    }

    Ok(())
}

/// Build and send the grounded response request
pub(crate) async fn send_question(
    client: &DossierClient,
    config: &Config,
    store_id: &str,
    question: &str,
    max_results: u32,
    filter: Option<AttributeFilter>,
    score_threshold: f64,
) -> Result<ModelResponse> {
    let request = CreateResponse {
        model: config.deployment.clone(),
        input: question.to_string(),
        tools: vec![Tool::FileSearch(FileSearchTool {
            vector_store_ids: vec![store_id.to_string()],
            max_num_results: Some(max_results),
            filters: filter,
            ranking_options: Some(RankingOptions::auto(score_threshold)),
        })],
        include: vec![INCLUDE_SEARCH_RESULTS.to_string()],
    };

    client
        .create_response(request)
        .await
        .context("Failed to generate response")
}

/// Print the answer, its supporting chunks, and optionally the raw JSON
pub(crate) fn print_response(response: &ModelResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    let answer = response.output_text();
    if answer.is_empty() {
        println!("{}", "The model returned no answer text.".yellow());
    } else {
        println!("{}", "Answer:".bold());
        println!("  {}", answer);
    }

    let results = response.search_results();
    if !results.is_empty() {
        println!();
        println!("{}", format!("Supporting chunks ({}):", results.len()).bold());
        for result in results {
            let name = result.filename.as_deref().unwrap_or(&result.file_id);
            println!("  {} {} (score {:.2})", "▸".cyan(), name, result.score);
            if let Some(text) = &result.text {
                println!("    {}", text.dimmed());
            }
        }
    }

    println!();
    println!("Response ID: {}", response.id.dimmed());

    Ok(())
}
