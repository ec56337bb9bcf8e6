//! Response request payloads

use serde::{Deserialize, Serialize};

/// `include` entry that asks the service to return search results inside
/// the file search call output item
pub const INCLUDE_SEARCH_RESULTS: &str = "file_search_call.results";

/// Request to generate a model response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub model: String,
    pub input: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

/// Tool made available to the model for a single response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    /// Semantic search over vector stores
    FileSearch(FileSearchTool),
}

/// Configuration of the file search tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSearchTool {
    pub vector_store_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<AttributeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_options: Option<RankingOptions>,
}

impl FileSearchTool {
    /// Search tool scoped to a single vector store, everything else default
    pub fn for_store(vector_store_id: impl Into<String>) -> Self {
        Self {
            vector_store_ids: vec![vector_store_id.into()],
            max_num_results: None,
            filters: None,
            ranking_options: None,
        }
    }
}

/// Single comparison over a file attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeFilter {
    #[serde(rename = "type")]
    pub op: ComparisonOp,
    pub key: String,
    pub value: serde_json::Value,
}

impl AttributeFilter {
    /// Equality filter on an attribute key
    pub fn eq(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: ComparisonOp::Eq,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Comparison operator of an [`AttributeFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// Ranker selection and score cutoff for search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingOptions {
    pub ranker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f64>,
}

impl RankingOptions {
    /// Service-chosen ranker with a minimum score for returned chunks
    pub fn auto(score_threshold: f64) -> Self {
        Self {
            ranker: "auto".to_string(),
            score_threshold: Some(score_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_search_tool_wire_shape() {
        let tool = Tool::FileSearch(FileSearchTool {
            max_num_results: Some(1),
            filters: Some(AttributeFilter::eq("category", "Marketing")),
            ranking_options: Some(RankingOptions::auto(0.01)),
            ..FileSearchTool::for_store("vs_123")
        });

        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "file_search",
                "vector_store_ids": ["vs_123"],
                "max_num_results": 1,
                "filters": {"type": "eq", "key": "category", "value": "Marketing"},
                "ranking_options": {"ranker": "auto", "score_threshold": 0.01}
            })
        );
    }

    #[test]
    fn test_create_response_skips_empty_lists() {
        let req = CreateResponse {
            model: "gpt-4.1".to_string(),
            input: "hello".to_string(),
            tools: Vec::new(),
            include: Vec::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"model": "gpt-4.1", "input": "hello"}));
    }
}
