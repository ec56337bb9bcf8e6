//! Dossier HTTP Client
//!
//! A typed HTTP client for an Azure OpenAI–compatible document service:
//! file upload, vector store management, asynchronous ingest jobs and
//! file-search-grounded model responses.
//!
//! The interesting work (chunking, embedding, ranking, search) happens
//! server-side; this crate covers request construction, response parsing,
//! the ingest poll loop and best-effort resource cleanup.
//!
//! # Example
//!
//! ```no_run
//! use dossier_client::{Credential, DossierClient};
//! use dossier_core::dto::store::{CreateVectorStore, ExpiresAfter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dossier_client::ClientError> {
//!     let client = DossierClient::new(
//!         "https://my-resource.openai.azure.com",
//!         "2025-04-01-preview",
//!         Credential::ApiKey("secret".to_string()),
//!     );
//!
//!     let store = client
//!         .create_vector_store(CreateVectorStore {
//!             name: "Travel Brochure".to_string(),
//!             expires_after: Some(ExpiresAfter::last_active(7)),
//!         })
//!         .await?;
//!
//!     println!("Vector store: {}", store.id);
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod error;
mod files;
mod ingest;
pub mod poller;
mod responses;
mod stores;

// Re-export commonly used types
pub use cleanup::CleanupTargets;
pub use error::{ClientError, Result};
pub use poller::{IngestPoller, IngestProbe, PollError, PollPolicy, RemoteIngestProbe};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Credential presented to the service on every request
#[derive(Clone)]
pub enum Credential {
    /// Shared key sent in the `api-key` header
    ApiKey(String),
    /// OAuth bearer token sent in the `Authorization` header
    Bearer(String),
}

impl std::fmt::Debug for Credential {
    // secrets stay out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("Credential::ApiKey(..)"),
            Credential::Bearer(_) => f.write_str("Credential::Bearer(..)"),
        }
    }
}

/// HTTP client for the document service API
///
/// This client provides methods for every endpoint the demo flow touches,
/// organized into logical groups:
/// - File upload and deletion
/// - Vector store lifecycle (create, get, delete)
/// - Ingest jobs (attach a file, check status)
/// - Model responses with file search tools
#[derive(Debug, Clone)]
pub struct DossierClient {
    /// Base URL of the service (e.g., "https://my-resource.openai.azure.com")
    base_url: String,
    /// Value of the `api-version` query parameter sent with every request
    api_version: String,
    /// Credential applied to every request
    credential: Credential,
    /// HTTP client instance
    client: Client,
}

impl DossierClient {
    /// Create a new service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service
    /// * `api_version` - The service API version to pin requests to
    /// * `credential` - API key or bearer token
    pub fn new(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self::with_client(base_url, api_version, credential, Client::new())
    }

    /// Create a new service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        credential: Credential,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            credential,
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full endpoint URL with the pinned api-version
    fn url(&self, path: &str) -> String {
        format!(
            "{}/openai/{}?api-version={}",
            self.base_url, path, self.api_version
        )
    }

    /// Attach the configured credential to a request
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::ApiKey(key) => request.header("api-key", key),
            Credential::Bearer(token) => request.bearer_auth(token),
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
