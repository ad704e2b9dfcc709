//! Structural predicates shared by the plugins. Pure functions of the JSON tree.

use serde_json::{Map, Value as Json};

/// Top-level sections of a document; `None` for non-objects and `{}`.
pub(crate) fn sections(doc: &Json) -> Option<&Map<String, Json>> {
    doc.as_object().filter(|map| !map.is_empty())
}

pub(crate) fn is_scalar(value: &Json) -> bool {
    !value.is_array() && !value.is_object()
}

/// An object carrying both `key` and `value`.
pub(crate) fn is_record(value: &Json) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("key") && obj.contains_key("value"))
}

/// A non-empty list whose every element is a record.
pub(crate) fn is_record_section(value: &Json) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(is_record))
}

/// A non-empty list of scalars.
pub(crate) fn is_flat_section(value: &Json) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(is_scalar))
}

/// A non-empty object whose every value is a scalar.
pub(crate) fn is_mapping_section(value: &Json) -> bool {
    value
        .as_object()
        .is_some_and(|obj| !obj.is_empty() && obj.values().all(is_scalar))
}

/// One entry of an executable document.
pub(crate) struct ExecutableEntry<'a> {
    pub section: &'a str,
    pub name: &'a str,
    pub entry: &'a Json,
}

/// Every `section -> name -> entry` triple, or `None` when a section is not an object.
pub(crate) fn executable_entries(doc: &Json) -> Option<Vec<ExecutableEntry<'_>>> {
    let mut entries = Vec::new();
    for (section, body) in sections(doc)? {
        for (name, entry) in body.as_object()? {
            entries.push(ExecutableEntry {
                section,
                name,
                entry,
            });
        }
    }
    Some(entries)
}
