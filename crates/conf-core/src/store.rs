//! The config store: sections accumulated from loaded documents.
//!
//! Loading is idempotent per canonical file path. Merging is a union at the
//! section level with later entries overwriting earlier ones.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use conf_fs::{NormalizedPath, RawDocument};
use conf_resolver::ExecutableResolver;
use conf_schema::{Cascade, Entry, ExecutableDescriptor, ParsedSection, SchemaKind, Section, Value};
use serde::{Serialize, Serializer};

use crate::placeholders::substitute_placeholders;
use crate::{Error, Result};

/// Options for [`ConfigStore::load_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Load and merge again even if this file was loaded before.
    pub force_reload: bool,
}

impl LoadOptions {
    pub fn forced() -> Self {
        Self { force_reload: true }
    }
}

/// What a successful [`ConfigStore::load_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum LoadOutcome {
    /// The document was parsed and merged.
    Loaded { schema: SchemaKind },
    /// The file was loaded before; the store is unchanged.
    AlreadyLoaded,
}

/// How [`ConfigStore::load_batch`] reacts to a failing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failure. Documents already merged stay merged.
    #[default]
    FailFast,
    /// Record the failure and move on to the next document.
    ContinueOnError,
}

/// Per-file results of a batch load, in load order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub loaded: Vec<(PathBuf, LoadOutcome)>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// True when no document failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// The first failure, if any, as an error.
    pub fn into_result(self) -> Result<Vec<(PathBuf, LoadOutcome)>> {
        match self.failed.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(self.loaded),
        }
    }
}

/// Normalized configuration merged from any number of documents.
///
/// Owned by whoever needs it; there is no global instance. Serializes as
/// `section -> key -> value or executable descriptor`.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    cascade: Cascade,
    resolver: ExecutableResolver,
    sections: BTreeMap<String, Section>,
    loaded: BTreeSet<NormalizedPath>,
}

impl ConfigStore {
    /// An empty store using the built-in schemas and `resolver`.
    pub fn new(resolver: ExecutableResolver) -> Self {
        Self::with_cascade(Cascade::default(), resolver)
    }

    pub fn with_cascade(cascade: Cascade, resolver: ExecutableResolver) -> Self {
        Self {
            cascade,
            resolver,
            sections: BTreeMap::new(),
            loaded: BTreeSet::new(),
        }
    }

    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    pub fn resolver(&self) -> &ExecutableResolver {
        &self.resolver
    }

    /// Load a JSON document from disk.
    ///
    /// The file is identified by its canonical path; loading it again is a
    /// no-op unless `options.force_reload` is set.
    pub fn load_file(&mut self, path: impl AsRef<Path>, options: LoadOptions) -> Result<LoadOutcome> {
        let canonical = NormalizedPath::canonicalize(path)?;

        if self.loaded.contains(&canonical) && !options.force_reload {
            tracing::debug!(path = %canonical, "Document already loaded");
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let doc = conf_fs::read_document(&canonical)?;
        let schema = self.load_document(&doc)?;
        tracing::info!(path = %canonical, schema = schema.name(), "Loaded document");
        self.loaded.insert(canonical);
        Ok(LoadOutcome::Loaded { schema })
    }

    /// Load a JSON document held in memory. No identity is tracked.
    pub fn load_str(&mut self, text: &str) -> Result<SchemaKind> {
        let doc: RawDocument = serde_json::from_str(text)?;
        self.load_document(&doc)
    }

    /// Detect, parse and merge an already decoded document.
    pub fn load_document(&mut self, doc: &RawDocument) -> Result<SchemaKind> {
        let (schema, parsed) = self.cascade.parse(doc, &self.resolver)?;
        self.merge(parsed);
        Ok(schema)
    }

    /// Load `paths` in order.
    pub fn load_batch<P: AsRef<Path>>(
        &mut self,
        paths: impl IntoIterator<Item = P>,
        policy: BatchPolicy,
    ) -> BatchReport {
        self.load_batch_with(paths, policy, LoadOptions::default())
    }

    /// [`load_batch`](Self::load_batch) with explicit per-file options.
    pub fn load_batch_with<P: AsRef<Path>>(
        &mut self,
        paths: impl IntoIterator<Item = P>,
        policy: BatchPolicy,
        options: LoadOptions,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for path in paths {
            let path = path.as_ref();
            match self.load_file(path, options) {
                Ok(outcome) => report.loaded.push((path.to_path_buf(), outcome)),
                Err(e) => {
                    report.failed.push((path.to_path_buf(), e));
                    if policy == BatchPolicy::FailFast {
                        break;
                    }
                }
            }
        }
        report
    }

    /// Load every `*.json` file directly inside `dir`, in file-name order.
    ///
    /// Files that fail are logged and reported but do not stop the others.
    pub fn load_directory(&mut self, dir: impl AsRef<Path>) -> Result<BatchReport> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| conf_fs::Error::io(dir, e))?;

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let report = self.load_batch(&files, BatchPolicy::ContinueOnError);
        for (path, err) in &report.failed {
            tracing::warn!(path = %path.display(), error = %err, "Failed to load document");
        }
        Ok(report)
    }

    /// Merge parsed sections into the store; incoming entries win.
    pub fn merge(&mut self, parsed: ParsedSection) {
        for (name, incoming) in parsed.into_sections() {
            let section = self.sections.entry(name).or_default();
            for (key, entry) in incoming {
                section.insert(key, entry);
            }
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Entry> {
        self.sections.get(section)?.get(key)
    }

    /// The plain value at `section.key`; `None` for executables.
    pub fn value(&self, section: &str, key: &str) -> Option<&Value> {
        self.get(section, key).and_then(Entry::as_value)
    }

    /// The executable descriptor at `section.key`.
    pub fn executable(&self, section: &str, key: &str) -> Option<&ExecutableDescriptor> {
        self.get(section, key).and_then(Entry::as_executable)
    }

    /// The plain value at `section.key`, or `default`.
    pub fn get_or(&self, section: &str, key: &str, default: Value) -> Value {
        self.value(section, key).cloned().unwrap_or(default)
    }

    /// Look up a value and substitute placeholder tokens in it.
    pub fn get_substituted<K, V>(
        &self,
        section: &str,
        key: &str,
        replacements: &[(K, V)],
    ) -> Option<Value>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.value(section, key)
            .map(|value| substitute_placeholders(value, replacements))
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Canonical paths of every file loaded so far.
    pub fn loaded_documents(&self) -> impl Iterator<Item = &NormalizedPath> {
        self.loaded.iter()
    }

    /// Forget all sections and loaded files.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.loaded.clear();
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}
