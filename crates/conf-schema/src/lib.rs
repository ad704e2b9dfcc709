//! Schema detection and parsing for confload.
//!
//! A JSON document of unknown shape goes through the [`Cascade`], which asks
//! each registered [`SchemaPlugin`] in priority order whether the document is
//! its shape. The first match parses the document into a [`ParsedSection`]:
//! data schemas cast every leaf through [`cast()`], executable schemas resolve
//! every entry through [`conf_resolver::ExecutableResolver`].

pub mod cast;
pub mod cascade;
pub mod error;
pub mod plugins;
pub mod registry;
pub mod section;
mod shape;
pub mod validation;
pub mod value;

pub use cascade::Cascade;
pub use cast::{TypeTag, cast, cast_as};
pub use error::{Error, Result};
pub use plugins::{SchemaKind, SchemaPlugin};
pub use registry::{BUILTIN_COUNT, SchemaRegistry, builtin_plugins};
pub use section::{Entry, ExecutableDescriptor, ParsedSection, Section};
pub use validation::ValidationError;
pub use value::Value;
