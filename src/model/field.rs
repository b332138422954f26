//! Lenient request-field deserializers.
//!
//! Request bodies are validated field by field after deserialization, so the
//! DTOs accept any scalar where text is expected and let the validators decide
//! whether the text is acceptable. Only malformed JSON is rejected up front.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Deserializes any JSON scalar into its text form; `null` becomes `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// Deserializes a JSON array (or a single scalar) into a list of texts.
///
/// Array entries that are `null` are kept as empty strings so they fail id
/// validation instead of silently disappearing.
pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| value_to_text(item).unwrap_or_default())
                .collect(),
        ),
        Some(other) => value_to_text(other).map(|text| vec![text]),
    })
}
