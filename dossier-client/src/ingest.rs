//! Ingest job endpoints

use crate::DossierClient;
use crate::error::Result;
use dossier_core::domain::ingest::IngestJob;
use dossier_core::dto::ingest::AttachFile;

impl DossierClient {
    // =============================================================================
    // Ingest Jobs
    // =============================================================================

    /// Attach an uploaded file to a vector store
    ///
    /// Starts an asynchronous ingest job on the service side. The returned
    /// job is usually still non-terminal; pass it to the poller to wait for
    /// completion.
    ///
    /// # Arguments
    /// * `vector_store_id` - The store to ingest into
    /// * `req` - File id, chunking configuration and chunk attributes
    pub async fn attach_file(&self, vector_store_id: &str, req: AttachFile) -> Result<IngestJob> {
        let url = self.url(&format!("vector_stores/{}/files", vector_store_id));
        let response = self
            .authorize(self.client.post(&url))
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of an ingest job
    ///
    /// # Arguments
    /// * `vector_store_id` - The store the file was attached to
    /// * `file_id` - The ingest job id returned by [`attach_file`](Self::attach_file)
    pub async fn get_ingest_job(&self, vector_store_id: &str, file_id: &str) -> Result<IngestJob> {
        let url = self.url(&format!("vector_stores/{}/files/{}", vector_store_id, file_id));
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credential;
    use dossier_core::domain::ingest::IngestStatus;
    use dossier_core::dto::ingest::ChunkingStrategy;
    use serde_json::json;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_attach_file_sends_chunking_and_attributes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/openai/vector_stores/vs_123/files")
            .match_query(mockito::Matcher::Any)
            .match_body(mockito::Matcher::Json(json!({
                "file_id": "file-abc",
                "chunking_strategy": {
                    "type": "static",
                    "static": {"max_chunk_size_tokens": 100, "chunk_overlap_tokens": 20}
                },
                "attributes": {"source": "Contoso", "category": "Marketing"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "file-abc",
                    "vector_store_id": "vs_123",
                    "status": "in_progress",
                    "created_at": 1733000000,
                    "last_error": null
                }"#,
            )
            .create_async()
            .await;

        let client = DossierClient::new(
            server.url(),
            "2025-04-01-preview",
            Credential::ApiKey("secret".to_string()),
        );

        let mut attributes = HashMap::new();
        attributes.insert("source".to_string(), json!("Contoso"));
        attributes.insert("category".to_string(), json!("Marketing"));

        let job = client
            .attach_file(
                "vs_123",
                AttachFile {
                    file_id: "file-abc".to_string(),
                    chunking_strategy: Some(ChunkingStrategy::fixed(100, 20)),
                    attributes,
                },
            )
            .await
            .unwrap();

        assert_eq!(job.status, IngestStatus::InProgress);
        assert!(job.last_error.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_ingest_job_reports_failure_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/openai/vector_stores/vs_123/files/file-abc")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "id": "file-abc",
                    "vector_store_id": "vs_123",
                    "status": "failed",
                    "created_at": 1733000000,
                    "last_error": {"code": "unsupported_file", "message": "Cannot parse file"}
                }"#,
            )
            .create_async()
            .await;

        let client = DossierClient::new(
            server.url(),
            "2025-04-01-preview",
            Credential::ApiKey("secret".to_string()),
        );
        let job = client.get_ingest_job("vs_123", "file-abc").await.unwrap();

        assert_eq!(job.status, IngestStatus::Failed);
        let error = job.last_error.unwrap();
        assert_eq!(error.code, "unsupported_file");
    }
}
