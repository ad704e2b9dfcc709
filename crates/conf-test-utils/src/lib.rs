//! Shared test utilities for the confload workspace.
//!
//! Dev-dependency only. Provides scratch documents and fake executables so
//! suites never touch real system directories or the process environment.
//!
//! # Modules
//!
//! - [`docs`] - JSON documents written into a temp directory
//! - [`bins`] - fake executables and PATH directory sets

pub mod bins;
pub mod docs;

pub use bins::{TestPathDirs, make_executable, make_plain_file};
pub use docs::{TestDocs, write_document};
