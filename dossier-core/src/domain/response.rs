//! Model response domain types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response returned by the generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub id: String,
    pub model: String,
    pub status: ResponseStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// Response lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    InProgress,
    Completed,
    Incomplete,
    Failed,
}

/// Single item in the response output array
///
/// The service interleaves tool invocations and assistant messages. Item
/// kinds this client does not interpret are preserved as raw JSON so new
/// server-side item types never break deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// Assistant message content
    Message {
        id: String,
        role: String,
        content: Vec<ContentPart>,
    },
    /// File search tool invocation, with results when they were requested
    FileSearchCall {
        id: String,
        status: Option<String>,
        #[serde(default)]
        queries: Vec<String>,
        results: Option<Vec<SearchResult>>,
    },
    #[serde(untagged)]
    Other(serde_json::Value),
}

/// Part of an assistant message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText { text: String },
    #[serde(untagged)]
    Other(serde_json::Value),
}

/// Scored chunk returned by the file search tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub file_id: String,
    pub filename: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    pub text: Option<String>,
}

impl ModelResponse {
    /// Concatenated text of every assistant message part in the output
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let OutputItem::Message { content, .. } = item {
                for part in content {
                    if let ContentPart::OutputText { text: t } = part {
                        text.push_str(t);
                    }
                }
            }
        }
        text
    }

    /// Search results across all file search calls in the output
    pub fn search_results(&self) -> Vec<&SearchResult> {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::FileSearchCall {
                    results: Some(results),
                    ..
                } => Some(results.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_output_item_is_preserved() {
        let json = r#"{
            "id": "resp_1",
            "model": "gpt-4.1",
            "status": "completed",
            "created_at": 1733000000,
            "output": [
                {"type": "reasoning", "id": "rs_1", "summary": []},
                {
                    "type": "message",
                    "id": "msg_1",
                    "role": "assistant",
                    "content": [{"type": "output_text", "text": "555-0100"}]
                }
            ]
        }"#;

        let response: ModelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.output.len(), 2);
        assert!(matches!(response.output[0], OutputItem::Other(_)));
        assert_eq!(response.output_text(), "555-0100");
    }

    #[test]
    fn test_search_results_extraction() {
        let json = r#"{
            "id": "resp_2",
            "model": "gpt-4.1",
            "status": "completed",
            "created_at": 1733000000,
            "output": [{
                "type": "file_search_call",
                "id": "fsc_1",
                "status": "completed",
                "queries": ["phone number"],
                "results": [{
                    "file_id": "file-abc",
                    "filename": "brochure.pdf",
                    "score": 0.87,
                    "attributes": {"category": "Marketing"},
                    "text": "Call us at 555-0100."
                }]
            }]
        }"#;

        let response: ModelResponse = serde_json::from_str(json).unwrap();
        let results = response.search_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file_id, "file-abc");
        assert_eq!(response.output_text(), "");
    }
}
