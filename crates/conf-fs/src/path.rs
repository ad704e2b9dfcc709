//! Normalized document paths
//!
//! Loaded documents are remembered by path, so two spellings of the same file
//! (`./a.json`, `/srv/cfg/a.json`, `C:\cfg\a.json` vs `C:/cfg/a.json`) must
//! compare equal. [`NormalizedPath::canonicalize`] resolves the file on disk
//! and stores it with forward slashes.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes. No filesystem access.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Resolve `path` to its canonical on-disk form.
    ///
    /// Uses `dunce` so Windows paths come back without the `\\?\` prefix.
    /// Fails with [`Error::NotFound`] when the file does not exist.
    pub fn canonicalize(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(canonical))
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
