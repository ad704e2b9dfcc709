//! Error types for conf-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from conf-core
    #[error(transparent)]
    Core(#[from] conf_core::Error),

    /// Error from conf-fs
    #[error(transparent)]
    Fs(#[from] conf_fs::Error),

    /// Error from conf-schema
    #[error(transparent)]
    Schema(#[from] conf_schema::Error),

    /// JSON output failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
