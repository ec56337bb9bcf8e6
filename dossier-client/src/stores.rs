//! Vector store endpoints

use crate::DossierClient;
use crate::error::Result;
use dossier_core::domain::store::VectorStore;
use dossier_core::dto::DeletionStatus;
use dossier_core::dto::store::CreateVectorStore;

impl DossierClient {
    // =============================================================================
    // Vector Store Lifecycle
    // =============================================================================

    /// Create a new vector store
    ///
    /// # Arguments
    /// * `req` - The store creation request (name and expiration policy)
    ///
    /// # Returns
    /// The created store
    pub async fn create_vector_store(&self, req: CreateVectorStore) -> Result<VectorStore> {
        let url = self.url("vector_stores");
        let response = self
            .authorize(self.client.post(&url))
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a vector store by ID
    pub async fn get_vector_store(&self, vector_store_id: &str) -> Result<VectorStore> {
        let url = self.url(&format!("vector_stores/{}", vector_store_id));
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Delete a vector store
    ///
    /// Chunks indexed from attached files are discarded with the store;
    /// the uploaded files themselves survive.
    pub async fn delete_vector_store(&self, vector_store_id: &str) -> Result<DeletionStatus> {
        let url = self.url(&format!("vector_stores/{}", vector_store_id));
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credential;
    use dossier_core::domain::store::StoreStatus;
    use dossier_core::dto::store::ExpiresAfter;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_vector_store_sends_expiration_policy() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/openai/vector_stores")
            .match_query(mockito::Matcher::UrlEncoded(
                "api-version".into(),
                "2025-04-01-preview".into(),
            ))
            .match_body(mockito::Matcher::Json(json!({
                "name": "Travel Brochure",
                "expires_after": {"anchor": "last_active_at", "days": 7}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "vs_123",
                    "name": "Travel Brochure",
                    "status": "completed",
                    "file_counts": {"in_progress": 0, "completed": 0, "failed": 0, "cancelled": 0, "total": 0},
                    "created_at": 1733000000,
                    "expires_at": null
                }"#,
            )
            .create_async()
            .await;

        let client = DossierClient::new(
            server.url(),
            "2025-04-01-preview",
            Credential::ApiKey("secret".to_string()),
        );
        let store = client
            .create_vector_store(CreateVectorStore {
                name: "Travel Brochure".to_string(),
                expires_after: Some(ExpiresAfter::last_active(7)),
            })
            .await
            .unwrap();

        assert_eq!(store.id, "vs_123");
        assert_eq!(store.status, StoreStatus::Completed);
        assert!(store.expires_at.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_vector_store_returns_acknowledgement() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/openai/vector_stores/vs_123")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"id": "vs_123", "deleted": true}"#)
            .create_async()
            .await;

        let client = DossierClient::new(
            server.url(),
            "2025-04-01-preview",
            Credential::ApiKey("secret".to_string()),
        );
        let ack = client.delete_vector_store("vs_123").await.unwrap();

        assert_eq!(ack.id, "vs_123");
        assert!(ack.deleted);
    }
}
