//! Vector store request payloads

use serde::{Deserialize, Serialize};

/// Request to create a vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVectorStore {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
}

/// Expiration policy for a vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiresAfter {
    pub anchor: ExpirationAnchor,
    pub days: u32,
}

/// Event the expiration countdown is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationAnchor {
    LastActiveAt,
}

impl ExpiresAfter {
    /// Expire `days` after the store was last used
    pub fn last_active(days: u32) -> Self {
        Self {
            anchor: ExpirationAnchor::LastActiveAt,
            days,
        }
    }
}
