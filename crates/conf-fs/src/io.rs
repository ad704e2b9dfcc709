//! Reading and decoding configuration documents

use std::fs;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// An untyped JSON tree with no schema attached yet.
pub type RawDocument = serde_json::Value;

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Decode JSON text into a [`RawDocument`].
///
/// `origin` is only used to label the error; the decoder's own diagnostic
/// (with line and column) is carried in the message.
pub fn decode_json(text: &str, origin: &Path) -> Result<RawDocument> {
    serde_json::from_str(text).map_err(|e| Error::MalformedJson {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a document from disk and decode it.
pub fn read_document(path: &NormalizedPath) -> Result<RawDocument> {
    let text = read_text(path)?;
    tracing::debug!(path = %path, bytes = text.len(), "Read configuration document");
    decode_json(&text, &path.to_native())
}
