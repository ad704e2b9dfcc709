//! Postman environment exports.
//!
//! ```json
//! { "id": "5d1c...", "name": "staging", "values": [ { "key": "host", "value": "x", "enabled": true } ] }
//! ```
//!
//! All variables land in one section named after the environment. Postman's
//! own `type` strings (`default`, `secret`) are not casting tags and coerce to
//! text.

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;
use serde_json::Value as Json;

use super::records;
use crate::{Error, ParsedSection, Result, ValidationError};

/// String `id`, string `name` and an array `values`.
pub fn matches(doc: &RawDocument) -> bool {
    doc.get("id").is_some_and(Json::is_string)
        && doc.get("name").is_some_and(Json::is_string)
        && doc.get("values").is_some_and(Json::is_array)
}

pub fn parse(doc: &RawDocument, _resolver: &ExecutableResolver) -> Result<ParsedSection> {
    let name = doc
        .get("name")
        .and_then(Json::as_str)
        .ok_or(Error::NoMatchingSchema)?;
    let values = doc
        .get("values")
        .and_then(Json::as_array)
        .ok_or(Error::NoMatchingSchema)?;

    let mut parsed = ParsedSection::new();
    records::parse_records(name, values, &mut parsed)?;
    Ok(parsed)
}

pub fn validate(doc: &RawDocument, _resolver: &ExecutableResolver) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    for field in ["id", "name"] {
        match doc.get(field) {
            None => findings.push(ValidationError::new(field, format!("missing `{field}`"))),
            Some(v) if !v.is_string() => {
                findings.push(ValidationError::new(field, format!("`{field}` must be a string")))
            }
            Some(_) => {}
        }
    }
    match doc.get("values") {
        None => findings.push(ValidationError::new("values", "missing `values`")),
        Some(Json::Array(items)) => records::validate_records("values", items, false, &mut findings),
        Some(_) => findings.push(ValidationError::new("values", "`values` must be an array")),
    }
    findings
}
