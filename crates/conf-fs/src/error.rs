//! Error types for conf-fs

use std::path::PathBuf;

/// Result type for conf-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed JSON in {path}: {message}")]
    MalformedJson { path: PathBuf, message: String },
}

impl Error {
    /// Wrap an I/O error, mapping `NotFound` onto the dedicated variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io { path, source }
    }
}
