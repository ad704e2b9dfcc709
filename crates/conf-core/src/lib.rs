//! Config store for confload
//!
//! [`ConfigStore`] owns the schema [`Cascade`](conf_schema::Cascade) and the
//! [`ExecutableResolver`](conf_resolver::ExecutableResolver) and accumulates
//! the parsed sections of every document loaded into it. Later documents
//! override earlier ones key by key.
//!
//! ```no_run
//! use conf_core::{ConfigStore, LoadOptions};
//!
//! let mut store = ConfigStore::default();
//! store.load_file("defaults.json", LoadOptions::default())?;
//! store.load_file("local.json", LoadOptions::default())?;
//! let timeout = store.get_or("General", "timeout", 30_i64.into());
//! # Ok::<(), conf_core::Error>(())
//! ```

pub mod error;
pub mod placeholders;
pub mod store;

pub use error::{Error, Result};
pub use placeholders::substitute_placeholders;
pub use store::{BatchPolicy, BatchReport, ConfigStore, LoadOptions, LoadOutcome};
