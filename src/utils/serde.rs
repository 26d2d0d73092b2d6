//! Serde helpers for values whose source type varies.
//!
//! The platform API sends identifiers as strings or integers. The configuration
//! layer parses environment variables eagerly, so an all-digit token or a `true`
//! arrives as a number or boolean. Both normalise to `String` here.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a string, accepting integers in its place
pub fn deserialize_string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "identifier must be a string or integer, got {other}"
        ))),
    }
}

/// Deserialize free text, accepting any scalar that was parsed ahead of us
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_text::<D::Error>(Value::deserialize(deserializer)?)
}

/// Optional variant of [`deserialize_text`]; `null` stays `None`.
///
/// Use together with `#[serde(default)]` so a missing field is also `None`.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_text::<D::Error>(value).map(Some),
    }
}

fn scalar_to_text<E: Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!("expected a string, got {other}"))),
    }
}
