//! Filesystem layer for confload
//!
//! Reads JSON configuration documents into an untyped [`RawDocument`] and
//! gives every document on disk a canonical identity, so the store above can
//! tell when the same file is loaded twice.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{RawDocument, decode_json, read_document, read_text};
pub use path::NormalizedPath;
