//! Error types for conf-schema

/// Result type for conf-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort parsing of a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is empty or no plugin recognises its shape
    #[error("No schema matches the document")]
    NoMatchingSchema,

    /// A key/value record lacks its `key` field
    #[error("Record {index} in section '{section}' has no 'key' field")]
    MissingKey { section: String, index: usize },

    /// A required executable could not be located
    #[error(
        "Required executable '{name}' in section '{section}' could not be resolved (command: '{command}')"
    )]
    ExecutableNotFound {
        section: String,
        name: String,
        command: String,
    },

    /// A required executable declares an auxiliary file that does not exist
    #[error("Required file '{file}' for executable '{name}' in section '{section}' does not exist")]
    AuxiliaryFileMissing {
        section: String,
        name: String,
        file: String,
    },

    /// An entry of the matched shape carries a field of the wrong type
    #[error("Invalid entry '{name}' in section '{section}': {message}")]
    InvalidEntry {
        section: String,
        name: String,
        message: String,
    },
}
