//! Vector store domain types

use serde::{Deserialize, Serialize};

/// Vendor-managed index of document chunks
///
/// Created with a name and an expiration policy; files are attached through
/// asynchronous ingest jobs tracked in [`FileCounts`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStore {
    pub id: String,
    pub name: String,
    pub status: StoreStatus,
    #[serde(default)]
    pub file_counts: FileCounts,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Vector store lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    InProgress,
    Completed,
    Expired,
}

/// Ingest job tallies per terminal and non-terminal state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FileCounts {
    pub in_progress: u32,
    pub completed: u32,
    pub failed: u32,
    pub cancelled: u32,
    pub total: u32,
}
