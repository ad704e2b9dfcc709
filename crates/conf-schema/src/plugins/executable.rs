//! Executable documents: named tools with a path to resolve.
//!
//! ```json
//! { "tools": { "qpdf": { "path": "qpdf", "required": true, "arguments": ["--linearize"] } } }
//! ```
//!
//! The descriptor assembly here is shared with [`super::cross_platform`],
//! which only changes which fields the path and arguments are read from.

use std::path::Path;

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;
use serde_json::{Map, Value as Json};

use crate::cast::{TypeTag, cast_as};
use crate::shape::{self, ExecutableEntry};
use crate::validation::{child, index};
use crate::{Error, ExecutableDescriptor, ParsedSection, Result, ValidationError, Value};

/// Where to read the path and argument lists from, most specific field first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSelection {
    pub path: &'static [&'static str],
    pub arguments: &'static [&'static str],
    pub debug_arguments: &'static [&'static str],
}

pub(crate) const GENERIC_FIELDS: FieldSelection = FieldSelection {
    path: &["path"],
    arguments: &["arguments"],
    debug_arguments: &["debugArguments"],
};

/// Every entry has a generic `path` and no platform-specific path.
pub fn matches(doc: &RawDocument) -> bool {
    let Some(entries) = shape::executable_entries(doc) else {
        return false;
    };
    !entries.is_empty()
        && entries.iter().all(|e| {
            e.entry.as_object().is_some_and(|obj| {
                obj.contains_key("path")
                    && !obj.contains_key("windowsPath")
                    && !obj.contains_key("linuxPath")
            })
        })
}

pub fn parse(doc: &RawDocument, resolver: &ExecutableResolver) -> Result<ParsedSection> {
    parse_with(doc, resolver, GENERIC_FIELDS)
}

pub fn validate(doc: &RawDocument, _resolver: &ExecutableResolver) -> Vec<ValidationError> {
    validate_entries(doc, |at, obj, findings| {
        match obj.get("path") {
            None => findings.push(ValidationError::new(at, "missing `path`")),
            Some(path) => check_string(&child(at, "path"), path, findings),
        }
        for field in ["windowsPath", "linuxPath"] {
            if obj.contains_key(field) {
                findings.push(ValidationError::new(
                    child(at, field),
                    format!("`{field}` is not allowed in a plain executable entry"),
                ));
            }
        }
    })
}

/// Parse every entry, reading fields according to `fields`.
pub(crate) fn parse_with(
    doc: &RawDocument,
    resolver: &ExecutableResolver,
    fields: FieldSelection,
) -> Result<ParsedSection> {
    let mut parsed = ParsedSection::new();
    for section in shape::sections(doc).into_iter().flat_map(|s| s.keys()) {
        parsed.ensure_section(section);
    }

    for entry in shape::executable_entries(doc).unwrap_or_default() {
        let descriptor = assemble(&entry, resolver, fields)?;
        parsed.insert(entry.section, entry.name, descriptor);
    }
    Ok(parsed)
}

/// Build one descriptor, resolving its path and checking auxiliary files.
///
/// Failures are fatal only for `required` entries; otherwise they are logged
/// and the descriptor keeps a `None` path.
fn assemble(
    entry: &ExecutableEntry<'_>,
    resolver: &ExecutableResolver,
    fields: FieldSelection,
) -> Result<ExecutableDescriptor> {
    let invalid = |message: String| Error::InvalidEntry {
        section: entry.section.to_string(),
        name: entry.name.to_string(),
        message,
    };
    let obj = entry
        .entry
        .as_object()
        .ok_or_else(|| invalid("entry must be an object".into()))?;

    let command = match first_present(obj, fields.path) {
        None | Some(Json::Null) => None,
        Some(Json::String(s)) => Some(s.clone()),
        Some(_) => return Err(invalid(format!("`{}` must be a string", fields.path[0]))),
    };
    let required = obj
        .get("required")
        .is_some_and(|v| cast_as(v, TypeTag::Bool) == Value::Boolean(true));

    let descriptor = ExecutableDescriptor {
        path: command.as_deref().and_then(|c| resolver.resolve(c)),
        required,
        description: obj
            .get("description")
            .and_then(Json::as_str)
            .unwrap_or_default()
            .to_string(),
        arguments: string_list(first_present(obj, fields.arguments)),
        debug_arguments: string_list(first_present(obj, fields.debug_arguments)),
        files_to_check: string_list(obj.get("filesToCheck")),
    };

    if descriptor.path.is_none() {
        let command = command.unwrap_or_default();
        if required {
            return Err(Error::ExecutableNotFound {
                section: entry.section.to_string(),
                name: entry.name.to_string(),
                command,
            });
        }
        tracing::warn!(
            section = entry.section,
            name = entry.name,
            command = %command,
            "Executable not found"
        );
    }

    for file in &descriptor.files_to_check {
        if auxiliary_file_ok(Path::new(file)) {
            continue;
        }
        if required {
            return Err(Error::AuxiliaryFileMissing {
                section: entry.section.to_string(),
                name: entry.name.to_string(),
                file: file.clone(),
            });
        }
        tracing::warn!(
            section = entry.section,
            name = entry.name,
            file = %file,
            "Auxiliary file missing"
        );
    }

    Ok(descriptor)
}

/// `exists()` follows symlinks, so a symlink passes exactly when its target exists.
fn auxiliary_file_ok(path: &Path) -> bool {
    path.exists()
}

/// The first of `fields` that is present in `obj`.
fn first_present<'a>(obj: &'a Map<String, Json>, fields: &[&str]) -> Option<&'a Json> {
    fields.iter().find_map(|field| obj.get(*field))
}

/// A list of strings; a lone string is a one-element list.
fn string_list(raw: Option<&Json>) -> Vec<String> {
    match raw {
        Some(Json::Array(items)) => items
            .iter()
            .map(|item| match item {
                Json::String(s) => s.clone(),
                other => cast_as(other, TypeTag::Text).to_string(),
            })
            .collect(),
        Some(Json::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Walk every entry, checking the fields common to both executable shapes and
/// delegating path rules to `check_paths`.
pub(crate) fn validate_entries(
    doc: &RawDocument,
    check_paths: impl Fn(&str, &Map<String, Json>, &mut Vec<ValidationError>),
) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    let Some(sections) = shape::sections(doc) else {
        findings.push(ValidationError::new("$", "document must be a non-empty object"));
        return findings;
    };

    for (section, body) in sections {
        let Some(entries) = body.as_object() else {
            findings.push(ValidationError::new(
                child("", section),
                "section must map entry names to executable entries",
            ));
            continue;
        };
        for (name, entry) in entries {
            let at = child(section, name);
            let Some(obj) = entry.as_object() else {
                findings.push(ValidationError::new(at, "entry must be an object"));
                continue;
            };
            check_paths(&at, obj, &mut findings);
            check_common_fields(&at, obj, &mut findings);
        }
    }
    findings
}

const LIST_FIELDS: &[&str] = &[
    "arguments",
    "debugArguments",
    "filesToCheck",
    "windowsArguments",
    "windowsDebugArguments",
    "linuxArguments",
    "linuxDebugArguments",
];

fn check_common_fields(at: &str, obj: &Map<String, Json>, findings: &mut Vec<ValidationError>) {
    if obj.get("required").is_some_and(|v| !v.is_boolean()) {
        findings.push(ValidationError::new(
            child(at, "required"),
            "`required` must be a boolean",
        ));
    }
    if let Some(description) = obj.get("description") {
        check_string(&child(at, "description"), description, findings);
    }
    for field in LIST_FIELDS {
        let Some(raw) = obj.get(*field) else {
            continue;
        };
        let field_at = child(at, field);
        match raw {
            Json::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        findings.push(ValidationError::new(
                            index(&field_at, i),
                            "list elements must be strings",
                        ));
                    }
                }
            }
            _ => findings.push(ValidationError::new(
                field_at,
                format!("`{field}` must be an array of strings"),
            )),
        }
    }
}

pub(crate) fn check_string(at: &str, raw: &Json, findings: &mut Vec<ValidationError>) {
    if !raw.is_string() {
        findings.push(ValidationError::new(at, "must be a string"));
    }
}
