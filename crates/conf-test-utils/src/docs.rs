//! Temp-directory JSON documents

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Write `doc` as pretty JSON to `dir/name` and return the full path.
pub fn write_document(dir: &Path, name: &str, doc: &Value) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create document directory");
    }
    let text = serde_json::to_string_pretty(doc).expect("Failed to serialize document");
    fs::write(&path, text).expect("Failed to write document");
    path
}

/// A temp directory holding configuration documents.
pub struct TestDocs {
    temp: TempDir,
}

impl TestDocs {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a JSON document and return its path.
    pub fn write(&self, name: &str, doc: &Value) -> PathBuf {
        write_document(self.temp.path(), name, doc)
    }

    /// Write raw text (for malformed-input tests) and return its path.
    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, text).expect("Failed to write raw document");
        path
    }
}

impl Default for TestDocs {
    fn default() -> Self {
        Self::new()
    }
}
