//! `{key, value, type, enabled}` records, shared by the data schemas

use serde_json::{Map, Value as Json};

use crate::cast::{TypeTag, cast, is_truthy};
use crate::validation::{child, index};
use crate::{Error, ParsedSection, Result, ValidationError, Value};

/// Parse one list of records into `out[section]`.
///
/// Disabled records are skipped before the key is checked.
pub(crate) fn parse_records(section: &str, records: &[Json], out: &mut ParsedSection) -> Result<()> {
    out.ensure_section(section);

    for (i, record) in records.iter().enumerate() {
        let Some(record) = record.as_object() else {
            tracing::warn!(section, index = i, "Skipping record that is not an object");
            continue;
        };
        if !is_enabled(record) {
            continue;
        }

        let key = record_key(record).ok_or_else(|| Error::MissingKey {
            section: section.to_string(),
            index: i,
        })?;
        let raw = record.get("value").unwrap_or(&Json::Null);
        let value = match record.get("type").and_then(Json::as_str) {
            Some(tag) => cast(raw, tag),
            None => Value::from_json(raw),
        };
        out.insert(section, key, value);
    }
    Ok(())
}

/// A present, falsy `enabled` disables the record.
fn is_enabled(record: &Map<String, Json>) -> bool {
    record.get("enabled").is_none_or(is_truthy)
}

fn record_key(record: &Map<String, Json>) -> Option<String> {
    match record.get("key")? {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Collect findings for one list of records located at `prefix`.
pub(crate) fn validate_records(
    prefix: &str,
    records: &[Json],
    check_type_tags: bool,
    findings: &mut Vec<ValidationError>,
) {
    for (i, record) in records.iter().enumerate() {
        let at = index(prefix, i);
        let Some(obj) = record.as_object() else {
            findings.push(ValidationError::new(at, "record must be an object"));
            continue;
        };

        match obj.get("key") {
            None => findings.push(ValidationError::new(&at, "missing `key`")),
            Some(Json::String(_) | Json::Number(_)) => {}
            Some(_) => findings.push(ValidationError::new(
                child(&at, "key"),
                "`key` must be a string or number",
            )),
        }
        if !obj.contains_key("value") {
            findings.push(ValidationError::new(&at, "missing `value`"));
        }
        if obj
            .get("enabled")
            .is_some_and(|enabled| enabled.is_array() || enabled.is_object())
        {
            findings.push(ValidationError::new(
                child(&at, "enabled"),
                "`enabled` must be a boolean",
            ));
        }
        match obj.get("type") {
            None => {}
            Some(Json::String(tag)) => {
                if check_type_tags && !TypeTag::is_known(tag) {
                    findings.push(ValidationError::new(
                        child(&at, "type"),
                        format!("unknown type `{tag}`"),
                    ));
                }
            }
            Some(_) => findings.push(ValidationError::new(
                child(&at, "type"),
                "`type` must be a string",
            )),
        }
    }
}
