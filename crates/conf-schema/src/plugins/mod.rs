//! Schema plugins
//!
//! Each plugin is a row in a dispatch table: a [`SchemaKind`] plus three plain
//! functions (`matches`, `parse`, `validate`). Predicates are pure functions
//! of the document. Parsing may touch the filesystem through the resolver.

pub mod advanced;
pub mod cross_platform;
pub mod executable;
pub mod postman;
mod records;
pub mod structured;

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;
use serde::Serialize;

use crate::{ParsedSection, Result, ValidationError};

/// Signature of a shape predicate.
pub type MatchFn = fn(&RawDocument) -> bool;
/// Signature of a parser.
pub type ParseFn = fn(&RawDocument, &ExecutableResolver) -> Result<ParsedSection>;
/// Signature of a validator.
pub type ValidateFn = fn(&RawDocument, &ExecutableResolver) -> Vec<ValidationError>;

/// The closed set of recognised document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    Postman,
    CrossPlatformExecutable,
    Executable,
    AdvancedStructured,
    Structured,
}

impl SchemaKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Postman => "postman",
            Self::CrossPlatformExecutable => "cross-platform-executable",
            Self::Executable => "executable",
            Self::AdvancedStructured => "advanced-structured",
            Self::Structured => "structured",
        }
    }

    /// Whether documents of this shape produce executable descriptors.
    pub fn is_executable(self) -> bool {
        matches!(self, Self::Executable | Self::CrossPlatformExecutable)
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered plugin: identity plus its three operations.
#[derive(Debug, Clone, Copy)]
pub struct SchemaPlugin {
    kind: SchemaKind,
    matches: MatchFn,
    parse: ParseFn,
    validate: ValidateFn,
}

impl SchemaPlugin {
    pub const fn new(
        kind: SchemaKind,
        matches: MatchFn,
        parse: ParseFn,
        validate: ValidateFn,
    ) -> Self {
        Self {
            kind,
            matches,
            parse,
            validate,
        }
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Does `doc` have this plugin's shape?
    pub fn matches(&self, doc: &RawDocument) -> bool {
        (self.matches)(doc)
    }

    /// Parse `doc` into normalized sections.
    pub fn parse(&self, doc: &RawDocument, resolver: &ExecutableResolver) -> Result<ParsedSection> {
        (self.parse)(doc, resolver)
    }

    /// Report everything wrong with `doc` in this plugin's shape.
    pub fn validate(&self, doc: &RawDocument, resolver: &ExecutableResolver) -> Vec<ValidationError> {
        (self.validate)(doc, resolver)
    }
}

pub const POSTMAN: SchemaPlugin = SchemaPlugin::new(
    SchemaKind::Postman,
    postman::matches,
    postman::parse,
    postman::validate,
);

pub const CROSS_PLATFORM_EXECUTABLE: SchemaPlugin = SchemaPlugin::new(
    SchemaKind::CrossPlatformExecutable,
    cross_platform::matches,
    cross_platform::parse,
    cross_platform::validate,
);

pub const EXECUTABLE: SchemaPlugin = SchemaPlugin::new(
    SchemaKind::Executable,
    executable::matches,
    executable::parse,
    executable::validate,
);

pub const ADVANCED_STRUCTURED: SchemaPlugin = SchemaPlugin::new(
    SchemaKind::AdvancedStructured,
    advanced::matches,
    advanced::parse,
    advanced::validate,
);

pub const STRUCTURED: SchemaPlugin = SchemaPlugin::new(
    SchemaKind::Structured,
    structured::matches,
    structured::parse,
    structured::validate,
);
