//! The schema cascade: first matching plugin wins.

use conf_fs::RawDocument;
use conf_resolver::ExecutableResolver;

use crate::registry::SchemaRegistry;
use crate::{Error, ParsedSection, Result, SchemaKind, SchemaPlugin, ValidationError};

/// Classifies documents against a [`SchemaRegistry`] in its given order.
#[derive(Debug, Clone, Default)]
pub struct Cascade {
    registry: SchemaRegistry,
}

impl Cascade {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The first plugin whose predicate accepts `doc`.
    ///
    /// Non-objects and empty objects never match.
    pub fn detect(&self, doc: &RawDocument) -> Result<&SchemaPlugin> {
        if doc.as_object().is_none_or(|obj| obj.is_empty()) {
            tracing::debug!("Document is empty or not an object");
            return Err(Error::NoMatchingSchema);
        }

        for plugin in self.registry.list_plugins() {
            if plugin.matches(doc) {
                tracing::debug!(schema = plugin.name(), "Schema matched");
                return Ok(plugin);
            }
            tracing::debug!(schema = plugin.name(), "Schema rejected");
        }
        Err(Error::NoMatchingSchema)
    }

    /// Detect, then parse with the matched plugin.
    pub fn parse(
        &self,
        doc: &RawDocument,
        resolver: &ExecutableResolver,
    ) -> Result<(SchemaKind, ParsedSection)> {
        let plugin = self.detect(doc)?;
        let parsed = plugin.parse(doc, resolver)?;
        Ok((plugin.kind(), parsed))
    }

    /// Detect, then validate with the matched plugin.
    pub fn validate(
        &self,
        doc: &RawDocument,
        resolver: &ExecutableResolver,
    ) -> Result<(SchemaKind, Vec<ValidationError>)> {
        let plugin = self.detect(doc)?;
        Ok((plugin.kind(), plugin.validate(doc, resolver)))
    }
}
