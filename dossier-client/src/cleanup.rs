//! Best-effort deletion of remote resources
//!
//! Every id collected while a flow ran gets deleted at the end: vector
//! stores first, then responses, then the uploaded file. Failures are
//! logged per resource and never stop the remaining deletions.

use tracing::{debug, info, warn};

use crate::DossierClient;

/// Remote resource ids collected during a run
#[derive(Debug, Clone, Default)]
pub struct CleanupTargets {
    pub vector_store_ids: Vec<String>,
    pub response_ids: Vec<String>,
    pub file_id: Option<String>,
}

impl CleanupTargets {
    /// Targets consisting of a single vector store
    pub fn store(vector_store_id: impl Into<String>) -> Self {
        Self {
            vector_store_ids: vec![vector_store_id.into()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vector_store_ids.is_empty() && self.response_ids.is_empty() && self.file_id.is_none()
    }
}

/// Delete every target, tolerating per-resource failures
///
/// Deleting an already-deleted or nonexistent id is logged and swallowed,
/// so cleanup stays idempotent per resource. Nothing here propagates an
/// error to the caller.
pub async fn delete_resources(client: &DossierClient, targets: &CleanupTargets) {
    for vector_store_id in &targets.vector_store_ids {
        info!(%vector_store_id, "deleting vector store");
        match client.delete_vector_store(vector_store_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => debug!(%vector_store_id, "vector store already gone"),
            Err(e) => warn!(%vector_store_id, error = %e, "failed to delete vector store"),
        }
    }

    for response_id in &targets.response_ids {
        info!(%response_id, "deleting response");
        match client.delete_response(response_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => debug!(%response_id, "response already gone"),
            Err(e) => warn!(%response_id, error = %e, "failed to delete response"),
        }
    }

    if let Some(file_id) = &targets.file_id {
        info!(%file_id, "deleting uploaded file");
        match client.delete_file(file_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => debug!(%file_id, "file already gone"),
            Err(e) => warn!(%file_id, error = %e, "failed to delete file"),
        }
    }
}
