//! Literal token substitution in stored values.
//!
//! Tokens are plain strings such as `[VAR]`; there is no escaping and no
//! pattern syntax. Replacements apply in the order given.

use conf_schema::Value;
use serde_json::Value as Json;

/// Replace every token in `value` with its replacement.
///
/// Strings are rewritten directly. Arrays are walked recursively, including
/// nested arrays. Every other value comes back unchanged.
pub fn substitute_placeholders<K, V>(value: &Value, replacements: &[(K, V)]) -> Value
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    match value {
        Value::String(s) => Value::String(substitute_str(s, replacements)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| substitute_json(item, replacements))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn substitute_json<K, V>(value: &Json, replacements: &[(K, V)]) -> Json
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    match value {
        Json::String(s) => Json::String(substitute_str(s, replacements)),
        Json::Array(items) => Json::Array(
            items
                .iter()
                .map(|item| substitute_json(item, replacements))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn substitute_str<K, V>(text: &str, replacements: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    replacements
        .iter()
        .filter(|(token, _)| !token.as_ref().is_empty())
        .fold(text.to_string(), |acc, (token, replacement)| {
            acc.replace(token.as_ref(), replacement.as_ref())
        })
}
