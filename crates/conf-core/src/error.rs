//! Error types for conf-core

/// Result type for conf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort loading a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from conf-fs
    #[error(transparent)]
    Fs(#[from] conf_fs::Error),

    /// Detection or parse error from conf-schema
    #[error(transparent)]
    Schema(#[from] conf_schema::Error),

    /// In-memory JSON text that does not decode
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
