//! Response endpoints

use crate::DossierClient;
use crate::error::Result;
use dossier_core::domain::response::ModelResponse;
use dossier_core::dto::DeletionStatus;
use dossier_core::dto::response::CreateResponse;

impl DossierClient {
    // =============================================================================
    // Model Responses
    // =============================================================================

    /// Generate a model response
    ///
    /// With a file search tool in `req.tools`, the service searches the
    /// configured vector stores before answering and grounds the message in
    /// the retrieved chunks.
    pub async fn create_response(&self, req: CreateResponse) -> Result<ModelResponse> {
        let url = self.url("responses");
        let response = self
            .authorize(self.client.post(&url))
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a previously generated response by ID
    pub async fn get_response(&self, response_id: &str) -> Result<ModelResponse> {
        let url = self.url(&format!("responses/{}", response_id));
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Delete a stored response
    pub async fn delete_response(&self, response_id: &str) -> Result<DeletionStatus> {
        let url = self.url(&format!("responses/{}", response_id));
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.handle_response(response).await
    }
}
