//! Uploaded file domain types

use serde::{Deserialize, Serialize};

/// A file uploaded to the service for later ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: String,
    pub filename: String,
    pub bytes: u64,
    pub purpose: FilePurpose,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Purpose declared at upload time
///
/// Files ingested into a vector store are uploaded with `Assistants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    Assistants,
    Batch,
    UserData,
}

impl FilePurpose {
    /// Wire name of the purpose, as sent in the upload form
    pub fn as_str(self) -> &'static str {
        match self {
            FilePurpose::Assistants => "assistants",
            FilePurpose::Batch => "batch",
            FilePurpose::UserData => "user_data",
        }
    }
}
