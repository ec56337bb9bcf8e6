//! File endpoints

use crate::DossierClient;
use crate::error::{ClientError, Result};
use dossier_core::domain::file::{FilePurpose, StoredFile};
use dossier_core::dto::DeletionStatus;
use reqwest::multipart;

impl DossierClient {
    // =============================================================================
    // File Upload & Deletion
    // =============================================================================

    /// Upload a document for later ingestion
    ///
    /// Files destined for a vector store are uploaded with
    /// [`FilePurpose::Assistants`].
    ///
    /// # Arguments
    /// * `filename` - Name stored alongside the content
    /// * `content` - Raw file bytes
    /// * `purpose` - Declared purpose of the upload
    ///
    /// # Returns
    /// The stored file record, including the id used everywhere else
    pub async fn upload_file(
        &self,
        filename: &str,
        content: Vec<u8>,
        purpose: FilePurpose,
    ) -> Result<StoredFile> {
        let part = multipart::Part::bytes(content)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| ClientError::ParseError(format!("Invalid mime type: {}", e)))?;

        let form = multipart::Form::new()
            .text("purpose", purpose.as_str())
            .part("file", part);

        let url = self.url("files");
        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a stored file by ID
    pub async fn get_file(&self, file_id: &str) -> Result<StoredFile> {
        let url = self.url(&format!("files/{}", file_id));
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Delete a stored file
    ///
    /// # Arguments
    /// * `file_id` - The file to delete
    ///
    /// # Returns
    /// Deletion acknowledgement from the service
    pub async fn delete_file(&self, file_id: &str) -> Result<DeletionStatus> {
        let url = self.url(&format!("files/{}", file_id));
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.handle_response(response).await
    }
}
