//! Strategy orchestration

use std::path::PathBuf;

use crate::conventions::{self, ConventionRoots};
use crate::{Platform, ResolverEnv, ResolverOptions, path_walk, shell};

/// One resolution technique, in the order [`ExecutableResolver::resolve`] tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    LiteralPath,
    PathWalk,
    ShellLookup,
    DirectoryConvention,
}

impl Strategy {
    /// The fallback chain for names that are not absolute paths.
    pub const FALLBACKS: [Strategy; 3] = [
        Strategy::PathWalk,
        Strategy::ShellLookup,
        Strategy::DirectoryConvention,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LiteralPath => "literal-path",
            Self::PathWalk => "path-walk",
            Self::ShellLookup => "shell-lookup",
            Self::DirectoryConvention => "directory-convention",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves logical command names to verified absolute paths.
///
/// # Example
///
/// ```
/// use conf_resolver::{ExecutableResolver, Platform, ResolverEnv, ResolverOptions};
///
/// let resolver = ExecutableResolver::new(
///     Platform::Unix,
///     ResolverEnv::default(),
///     ResolverOptions::without_subprocess(),
/// );
/// assert_eq!(resolver.resolve("/definitely/not/here"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ExecutableResolver {
    platform: Platform,
    env: ResolverEnv,
    options: ResolverOptions,
    roots: ConventionRoots,
}

impl ExecutableResolver {
    /// Create a resolver with the conventional roots for `platform`.
    pub fn new(platform: Platform, env: ResolverEnv, options: ResolverOptions) -> Self {
        let roots = ConventionRoots::for_platform(platform, &env);
        Self {
            platform,
            env,
            options,
            roots,
        }
    }

    /// Resolver for the running host, configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            Platform::current(),
            ResolverEnv::capture(),
            ResolverOptions::from_env(),
        )
    }

    /// Replace the directory-convention roots.
    pub fn with_convention_roots(mut self, roots: ConventionRoots) -> Self {
        self.roots = roots;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn env(&self) -> &ResolverEnv {
        &self.env
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn convention_roots(&self) -> &ConventionRoots {
        &self.roots
    }

    /// Resolve `command` to an absolute path, or `None` if nothing matches.
    ///
    /// An absolute command is only checked for existence; it is never retried
    /// as a `PATH`-relative name.
    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        let command = command.trim();
        if command.is_empty() {
            return None;
        }

        if self.platform.looks_absolute(command) {
            let found = self.resolve_with(Strategy::LiteralPath, command);
            tracing::debug!(command, found = ?found, "Resolved literal path");
            return found;
        }

        for strategy in Strategy::FALLBACKS {
            if let Some(found) = self.resolve_with(strategy, command) {
                tracing::debug!(command, %strategy, path = %found.display(), "Resolved executable");
                return Some(found);
            }
            tracing::debug!(command, %strategy, "No match");
        }
        None
    }

    /// Run a single strategy.
    ///
    /// `ShellLookup` yields `None` when subprocesses are not allowed.
    pub fn resolve_with(&self, strategy: Strategy, command: &str) -> Option<PathBuf> {
        match strategy {
            Strategy::LiteralPath => {
                let path = PathBuf::from(command);
                path.is_file().then_some(path)
            }
            Strategy::PathWalk => path_walk::walk_path(command, self.platform, &self.env),
            Strategy::ShellLookup => {
                if !self.options.allow_subprocess {
                    return None;
                }
                shell::shell_lookup(command, self.platform, &self.env)
            }
            Strategy::DirectoryConvention => {
                conventions::probe_conventions(command, self.platform, &self.roots)
            }
        }
    }
}

impl Default for ExecutableResolver {
    fn default() -> Self {
        Self::from_env()
    }
}
