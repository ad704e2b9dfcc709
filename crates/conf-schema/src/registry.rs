//! Compile-time plugin registry.
//!
//! The built-in plugins are listed once, in cascade priority order. Nothing
//! scans the filesystem for implementations; adding a shape means adding a
//! row to [`builtin_plugins`].

use crate::plugins::{self, SchemaKind, SchemaPlugin};

/// Number of built-in schema plugins.
pub const BUILTIN_COUNT: usize = 5;

/// All built-in plugins, most specific first.
///
/// The order matters because the predicates overlap: a Postman export also
/// looks like a structured document, and a cross-platform document whose
/// entries all carry a generic `path` looks like a plain executable one.
pub fn builtin_plugins() -> Vec<SchemaPlugin> {
    vec![
        plugins::POSTMAN,
        plugins::CROSS_PLATFORM_EXECUTABLE,
        plugins::EXECUTABLE,
        plugins::ADVANCED_STRUCTURED,
        // Fallback
        plugins::STRUCTURED,
    ]
}

/// An ordered list of schema plugins.
///
/// Built once at startup and consumed by the [`crate::Cascade`], which never
/// re-orders it.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    plugins: Vec<SchemaPlugin>,
}

impl SchemaRegistry {
    /// A registry holding the built-in plugins in priority order.
    pub fn with_builtins() -> Self {
        Self {
            plugins: builtin_plugins(),
        }
    }

    /// A registry with an explicit plugin order.
    pub fn from_plugins(plugins: Vec<SchemaPlugin>) -> Self {
        Self { plugins }
    }

    /// The plugins in priority order.
    pub fn list_plugins(&self) -> &[SchemaPlugin] {
        &self.plugins
    }

    /// Look up a plugin by kind.
    pub fn get(&self, kind: SchemaKind) -> Option<&SchemaPlugin> {
        self.plugins.iter().find(|p| p.kind() == kind)
    }

    /// Look up a plugin by its name (`"postman"`, `"structured"`, ...).
    pub fn by_name(&self, name: &str) -> Option<&SchemaPlugin> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count() {
        assert_eq!(builtin_plugins().len(), BUILTIN_COUNT);
        assert_eq!(SchemaRegistry::default().len(), BUILTIN_COUNT);
    }

    #[test]
    fn test_no_duplicate_kinds() {
        let plugins = builtin_plugins();
        let kinds: HashSet<_> = plugins.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds.len(), BUILTIN_COUNT, "Duplicate kinds found");
    }

    #[test]
    fn test_priority_order() {
        let names: Vec<_> = SchemaRegistry::with_builtins()
            .list_plugins()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "postman",
                "cross-platform-executable",
                "executable",
                "advanced-structured",
                "structured",
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let registry = SchemaRegistry::with_builtins();
        assert_eq!(
            registry.get(SchemaKind::Executable).map(|p| p.name()),
            Some("executable")
        );
        assert_eq!(
            registry.by_name("postman").map(|p| p.kind()),
            Some(SchemaKind::Postman)
        );
        assert!(registry.by_name("yaml").is_none());
    }

    #[test]
    fn test_custom_order_is_kept() {
        let registry =
            SchemaRegistry::from_plugins(vec![plugins::STRUCTURED, plugins::POSTMAN]);
        assert_eq!(registry.list_plugins()[0].kind(), SchemaKind::Structured);
        assert!(!registry.is_empty());
        assert!(SchemaRegistry::from_plugins(Vec::new()).is_empty());
    }
}
