//! Command implementations for conf-cli

pub mod detect;
pub mod get;
pub mod load;
pub mod resolve;
pub mod validate;

pub use detect::run_detect;
pub use get::{GetRequest, run_get};
pub use load::run_load;
pub use resolve::{run_resolve, run_schemas};
pub use validate::run_validate;

use std::path::Path;

use colored::Colorize;
use conf_core::ConfigStore;
use conf_fs::{NormalizedPath, RawDocument};
use conf_resolver::{ExecutableResolver, Platform, ResolverEnv, ResolverOptions};
use conf_schema::{Cascade, Entry, Section};

use crate::error::Result;

/// Process-wide settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    cascade: Cascade,
    resolver: ExecutableResolver,
}

impl Context {
    /// Snapshot the environment once; `no_subprocess` overrides it.
    pub fn new(no_subprocess: bool) -> Self {
        let options = if no_subprocess {
            ResolverOptions::without_subprocess()
        } else {
            ResolverOptions::from_env()
        };
        Self {
            cascade: Cascade::default(),
            resolver: ExecutableResolver::new(Platform::current(), ResolverEnv::capture(), options),
        }
    }

    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    pub fn resolver(&self) -> &ExecutableResolver {
        &self.resolver
    }

    /// A fresh, empty store sharing this context's resolver.
    pub fn store(&self) -> ConfigStore {
        ConfigStore::with_cascade(self.cascade.clone(), self.resolver.clone())
    }
}

pub(crate) fn read_document(file: &Path) -> Result<RawDocument> {
    Ok(conf_fs::read_document(&NormalizedPath::new(file))?)
}

/// `key = value` lines, or `key -> path` for executables.
pub(crate) fn print_section(name: &str, section: &Section) {
    println!("{}", format!("[{name}]").cyan().bold());
    for (key, entry) in section {
        match entry {
            Entry::Value(value) => println!("  {key} = {value}"),
            Entry::Executable(exe) => {
                let path = match exe.path() {
                    Some(path) => path.display().to_string().green(),
                    None => "<not found>".yellow(),
                };
                let required = if exe.required { " (required)" } else { "" };
                println!("  {key} -> {path}{required}");
            }
        }
    }
}
