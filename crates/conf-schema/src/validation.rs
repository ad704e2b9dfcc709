//! Soft validation findings
//!
//! `validate` never aborts; it reports what is wrong with a document in the
//! shape of one plugin. An empty list means the document is valid.

use serde::Serialize;

/// One human-readable finding, located by a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Location such as `tools.qpdf.arguments[1]`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Join a parent path and a child name with a dot.
pub(crate) fn child(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Append an index to a path.
pub(crate) fn index(parent: &str, i: usize) -> String {
    format!("{parent}[{i}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = ValidationError::new("tools.qpdf", "missing `path`");
        assert_eq!(err.to_string(), "tools.qpdf: missing `path`");
    }

    #[test]
    fn path_helpers() {
        assert_eq!(child("", "tools"), "tools");
        assert_eq!(child("tools", "qpdf"), "tools.qpdf");
        assert_eq!(index("values", 2), "values[2]");
    }
}
