//! Parsed document model
//!
//! A parsed document is a two-level mapping: section name, then key, then
//! either a [`Value`] (data schemas) or an [`ExecutableDescriptor`]
//! (executable schemas). Writing a key twice keeps the later entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Value;

/// A resolvable executable and its invocation arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableDescriptor {
    /// Absolute, verified path; `None` when resolution failed.
    pub path: Option<PathBuf>,
    pub required: bool,
    pub description: String,
    pub arguments: Vec<String>,
    pub debug_arguments: Vec<String>,
    pub files_to_check: Vec<String>,
}

impl ExecutableDescriptor {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.path.is_some()
    }
}

/// One stored leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Value(Value),
    Executable(ExecutableDescriptor),
}

impl Entry {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Executable(_) => None,
        }
    }

    pub fn as_executable(&self) -> Option<&ExecutableDescriptor> {
        match self {
            Self::Executable(e) => Some(e),
            Self::Value(_) => None,
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ExecutableDescriptor> for Entry {
    fn from(descriptor: ExecutableDescriptor) -> Self {
        Self::Executable(descriptor)
    }
}

/// Entries of one section, keyed by name.
pub type Section = BTreeMap<String, Entry>;

/// The normalized output of parsing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedSection {
    sections: BTreeMap<String, Section>,
}

impl ParsedSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `section` exists, even if it ends up empty.
    pub fn ensure_section(&mut self, section: &str) -> &mut Section {
        self.sections.entry(section.to_string()).or_default()
    }

    /// Store `entry` under `section[key]`, replacing any earlier entry.
    pub fn insert(&mut self, section: &str, key: impl Into<String>, entry: impl Into<Entry>) {
        self.ensure_section(section).insert(key.into(), entry.into());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Entry> {
        self.sections.get(section)?.get(key)
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    pub fn into_sections(self) -> BTreeMap<String, Section> {
        self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn later_insert_replaces_earlier() {
        let mut parsed = ParsedSection::new();
        parsed.insert("General", "name", Value::from("a"));
        parsed.insert("General", "name", Value::from("b"));

        assert_eq!(parsed.get("General", "name"), Some(&Entry::Value(Value::from("b"))));
        assert_eq!(parsed.section("General").map(|s| s.len()), Some(1));
    }

    #[test]
    fn serializes_as_nested_maps() {
        let mut parsed = ParsedSection::new();
        parsed.insert("General", "count", Value::Integer(3));
        parsed.insert(
            "Tools",
            "qpdf",
            ExecutableDescriptor {
                path: Some(PathBuf::from("/usr/bin/qpdf")),
                required: true,
                debug_arguments: vec!["--verbose".into()],
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["General"]["count"], json!(3));
        assert_eq!(json["Tools"]["qpdf"]["path"], json!("/usr/bin/qpdf"));
        assert_eq!(json["Tools"]["qpdf"]["debugArguments"], json!(["--verbose"]));
        assert_eq!(json["Tools"]["qpdf"]["filesToCheck"], json!([]));
    }
}
