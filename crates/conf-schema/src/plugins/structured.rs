//! Structured documents: sections of `{key, value, type, enabled}` records.
//!
//! ```json
//! { "General": [ { "key": "timeout", "value": "30", "type": "int" } ] }
//! ```
//!
//! This is the fallback shape, tried last.

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;

use super::records;
use crate::validation::child;
use crate::{ParsedSection, Result, ValidationError, shape};

/// At least one section is a list of key/value records.
pub fn matches(doc: &RawDocument) -> bool {
    shape::sections(doc).is_some_and(|sections| sections.values().any(shape::is_record_section))
}

/// Parse every list-of-objects section; other sections are ignored.
pub fn parse(doc: &RawDocument, _resolver: &ExecutableResolver) -> Result<ParsedSection> {
    let mut parsed = ParsedSection::new();
    let Some(sections) = shape::sections(doc) else {
        return Ok(parsed);
    };

    for (name, body) in sections {
        match body.as_array() {
            Some(items) if items.iter().any(|item| item.is_object()) => {
                records::parse_records(name, items, &mut parsed)?;
            }
            _ => tracing::debug!(section = %name, "Ignoring section without records"),
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

    let mut record_sections = 0;
    for (name, body) in sections {
        if let Some(items) = body.as_array() {
            record_sections += 1;
            records::validate_records(&child("", name), items, true, &mut findings);
        }
    }
    if record_sections == 0 {
        findings.push(ValidationError::new(
            "$",
            "no section contains key/value records",
        ));
    }
    findings
}
