//! Forgiving field deserializers for upstream-extracted resume JSON.
//!
//! A field whose JSON type does not match the model is treated as absent
//! instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `T`, falling back to `T::default()` on a type mismatch
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a sequence, keeping only the items that fit `T`
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Description bullets arrive either as a list or as one newline-separated string
pub fn bullets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_seq")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "bullets")]
        description: Vec<String>,
    }

    #[test]
    fn test_wrong_scalar_type_becomes_absent() {
        let sample: Sample = serde_json::from_value(json!({ "name": 42 })).unwrap();
        assert_eq!(sample.name, None);
    }

    #[test]
    fn test_sequence_drops_foreign_items() {
        let sample: Sample =
            serde_json::from_value(json!({ "tags": ["rust", 7, null, "sql"] })).unwrap();
        assert_eq!(sample.tags, vec!["rust", "sql"]);
    }

    #[test]
    fn test_non_sequence_becomes_empty() {
        let sample: Sample = serde_json::from_value(json!({ "tags": "rust" })).unwrap();
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_string_description_is_split_into_lines() {
        let sample: Sample = serde_json::from_value(json!({
            "description": "Built a parser\n\n   Shipped v2  \n"
        }))
        .unwrap();
        assert_eq!(sample.description, vec!["Built a parser", "Shipped v2"]);
    }

    #[test]
    fn test_null_description_is_empty() {
        let sample: Sample = serde_json::from_value(json!({ "description": null })).unwrap();
        assert!(sample.description.is_empty());
    }
}
