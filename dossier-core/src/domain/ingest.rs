//! Ingest job domain types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asynchronous job ingesting an uploaded file into a vector store
///
/// Attaching a file to a store returns one of these immediately; chunking
/// and embedding happen server-side while the status stays non-terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestJob {
    pub id: String,
    pub vector_store_id: String,
    pub status: IngestStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub last_error: Option<IngestError>,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Ingest job status as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    Cancelled,
}

impl IngestStatus {
    /// Whether the service will report no further transition for this job
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            IngestStatus::Completed | IngestStatus::Failed | IngestStatus::Cancelled
        )
    }
}

/// Error detail attached to a failed ingest job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestError {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(IngestStatus::Completed.is_terminal());
        assert!(IngestStatus::Failed.is_terminal());
        assert!(IngestStatus::Cancelled.is_terminal());
        assert!(!IngestStatus::Pending.is_terminal());
        assert!(!IngestStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_wire_names() {
        let status: IngestStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, IngestStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&IngestStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
