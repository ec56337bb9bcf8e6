//! Common types used across CLI modules

use anyhow::{Result, anyhow};
use dossier_core::dto::response::AttributeFilter;

/// `key=value` pair attached to ingested chunks as a filterable attribute
///
/// Values that parse as booleans or numbers are sent typed; everything
/// else stays a string.
#[derive(Debug, Clone)]
pub struct AttributePair {
    pub key: String,
    pub value: serde_json::Value,
}

impl AttributePair {
    /// Parse a `key=value` argument
    pub fn parse(input: &str) -> Result<Self> {
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got '{}'", input))?;

        if key.is_empty() {
            return Err(anyhow!("attribute key cannot be empty in '{}'", input));
        }

        Ok(Self {
            key: key.to_string(),
            value: coerce(raw),
        })
    }
}

/// Parse a `key=value` argument into an equality filter
pub fn parse_filter(input: &str) -> Result<AttributeFilter> {
    let pair = AttributePair::parse(input)?;
    Ok(AttributeFilter::eq(pair.key, pair.value))
}

fn coerce(raw: &str) -> serde_json::Value {
    if let Ok(b) = raw.parse::<bool>() {
        return b.into();
    }
    if let Ok(n) = raw.parse::<i64>() {
        return n.into();
    }
    if let Ok(f) = raw.parse::<f64>() {
        return f.into();
    }
    serde_json::Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::dto::response::ComparisonOp;
    use serde_json::json;

    #[test]
    fn test_parse_string_attribute() {
        let pair = AttributePair::parse("category=Marketing").unwrap();
        assert_eq!(pair.key, "category");
        assert_eq!(pair.value, json!("Marketing"));
    }

    #[test]
    fn test_parse_coerces_numbers_and_booleans() {
        assert_eq!(AttributePair::parse("year=2026").unwrap().value, json!(2026));
        assert_eq!(AttributePair::parse("internal=true").unwrap().value, json!(true));
        assert_eq!(AttributePair::parse("weight=0.5").unwrap().value, json!(0.5));
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let pair = AttributePair::parse("note=a=b").unwrap();
        assert_eq!(pair.key, "note");
        assert_eq!(pair.value, json!("a=b"));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(AttributePair::parse("no-separator").is_err());
        assert!(AttributePair::parse("=value").is_err());
    }

    #[test]
    fn test_parse_filter_is_equality() {
        let filter = parse_filter("category=Marketing").unwrap();
        assert_eq!(filter.op, ComparisonOp::Eq);
        assert_eq!(filter.key, "category");
        assert_eq!(filter.value, json!("Marketing"));
    }
}
