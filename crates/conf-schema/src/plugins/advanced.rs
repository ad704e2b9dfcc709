//! Advanced structured documents mix three section styles:
//!
//! - flat lists of scalars: `"tags": ["a", "b"]`
//! - string-to-scalar mappings: `"limits": {"max": 5}`
//! - key/value record lists, as in [`super::structured`]
//!
//! Flat lists and mappings are stored without casting; flat lists are keyed
//! by position (`"0"`, `"1"`, ...).
//!
//! Every section must be non-empty. A single `[]` or `{}` section fails the
//! predicate for the whole document, which then falls through to
//! [`super::structured`] and keeps only its record sections.

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;
use serde_json::Value as Json;

use super::records;
use crate::validation::{child, index};
use crate::{ParsedSection, Result, ValidationError, Value, shape};

/// Every section is flat, mapping or record, with at least one record section
/// and at least one of the other two.
pub fn matches(doc: &RawDocument) -> bool {
    let Some(sections) = shape::sections(doc) else {
        return false;
    };

    let mut plain = 0;
    let mut record = 0;
    for body in sections.values() {
        if shape::is_record_section(body) {
            record += 1;
        } else if shape::is_flat_section(body) || shape::is_mapping_section(body) {
            plain += 1;
        } else {
            return false;
        }
    }
    plain > 0 && record > 0
}

pub fn parse(doc: &RawDocument, _resolver: &ExecutableResolver) -> Result<ParsedSection> {
    let mut parsed = ParsedSection::new();
    let Some(sections) = shape::sections(doc) else {
        return Ok(parsed);
    };

    for (name, body) in sections {
        if shape::is_flat_section(body) {
            let items = body.as_array().map(Vec::as_slice).unwrap_or_default();
            parsed.ensure_section(name);
            for (i, item) in items.iter().enumerate() {
                parsed.insert(name, i.to_string(), Value::from_json(item));
            }
        } else if shape::is_mapping_section(body) {
            parsed.ensure_section(name);
            for (key, item) in body.as_object().into_iter().flatten() {
                parsed.insert(name, key.clone(), Value::from_json(item));
            }
        } else if let Some(items) = body.as_array() {
            records::parse_records(name, items, &mut parsed)?;
        }
    }
    Ok(parsed)
}

pub fn validate(doc: &RawDocument, _resolver: &ExecutableResolver) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    let Some(sections) = shape::sections(doc) else {
        findings.push(ValidationError::new("$", "document must be a non-empty object"));
        return findings;
    };

    for (name, body) in sections {
        let at = child("", name);
        match body {
            Json::Array(items) if items.iter().all(shape::is_scalar) => {}
            Json::Array(items) if items.iter().all(Json::is_object) => {
                records::validate_records(&at, items, true, &mut findings);
            }
            Json::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !shape::is_scalar(item) {
                        findings.push(ValidationError::new(
                            index(&at, i),
                            "flat list elements must be scalars",
                        ));
                    }
                }
            }
            Json::Object(map) => {
                for (key, item) in map {
                    if !shape::is_scalar(item) {
                        findings.push(ValidationError::new(
                            child(&at, key),
                            "mapping values must be scalars",
                        ));
                    }
                }
            }
            _ => findings.push(ValidationError::new(
                at,
                "section must be a flat list, a mapping, or a list of key/value records",
            )),
        }
    }
    findings
}
