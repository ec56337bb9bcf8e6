//! Ingest request payloads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to attach an uploaded file to a vector store
///
/// Starts an asynchronous ingest job; attributes become filterable metadata
/// on every chunk produced from the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachFile {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// How the service splits the document into chunks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Service-chosen chunk size and overlap
    Auto,
    /// Fixed chunk size and overlap
    Static {
        #[serde(rename = "static")]
        config: StaticChunking,
    },
}

/// Parameters for [`ChunkingStrategy::Static`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticChunking {
    pub max_chunk_size_tokens: u32,
    pub chunk_overlap_tokens: u32,
}

impl ChunkingStrategy {
    /// Static strategy with the given chunk size and overlap in tokens
    pub fn fixed(max_chunk_size_tokens: u32, chunk_overlap_tokens: u32) -> Self {
        ChunkingStrategy::Static {
            config: StaticChunking {
                max_chunk_size_tokens,
                chunk_overlap_tokens,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_static_chunking_wire_shape() {
        let strategy = ChunkingStrategy::fixed(100, 20);
        let value = serde_json::to_value(&strategy).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "static",
                "static": {
                    "max_chunk_size_tokens": 100,
                    "chunk_overlap_tokens": 20
                }
            })
        );
    }

    #[test]
    fn test_auto_chunking_wire_shape() {
        let value = serde_json::to_value(&ChunkingStrategy::Auto).unwrap();
        assert_eq!(value, json!({"type": "auto"}));
    }

    #[test]
    fn test_attach_file_skips_empty_fields() {
        let req = AttachFile {
            file_id: "file-abc".to_string(),
            chunking_strategy: None,
            attributes: HashMap::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"file_id": "file-abc"}));
    }
}
