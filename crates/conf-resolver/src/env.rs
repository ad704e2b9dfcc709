//! Environment snapshot and resolver options
//!
//! The resolver reads `PATH`, `PATHEXT`, `LOCALAPPDATA`, `APPDATA` and `HOME`.
//! They are captured once into a [`ResolverEnv`] so resolution is a function
//! of explicit inputs.

use std::path::PathBuf;

/// Extensions tried on Windows when `PATHEXT` is unset.
pub const DEFAULT_PATHEXT: &str = ".EXE;.BAT;.CMD;.COM";

/// Setting this variable to a truthy value disables the `which`/`where` strategy.
pub const DISABLE_SUBPROCESS_VAR: &str = "CONFLOAD_DISABLE_SUBPROCESS";

/// The environment variables consulted during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverEnv {
    pub path: Option<String>,
    pub pathext: Option<String>,
    pub local_app_data: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl ResolverEnv {
    /// Snapshot the current process environment.
    ///
    /// `HOME` falls back to the platform home directory when unset.
    pub fn capture() -> Self {
        let var = |name: &str| {
            std::env::var_os(name)
                .map(|v| v.to_string_lossy().into_owned())
                .filter(|v| !v.is_empty())
        };

        Self {
            path: var("PATH"),
            pathext: var("PATHEXT"),
            local_app_data: var("LOCALAPPDATA").map(PathBuf::from),
            app_data: var("APPDATA").map(PathBuf::from),
            home: var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
        }
    }

    /// Replace the `PATH` value.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replace the `PATHEXT` value.
    pub fn with_pathext(mut self, pathext: impl Into<String>) -> Self {
        self.pathext = Some(pathext.into());
        self
    }

    /// Replace the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Lower-cased `PATHEXT` entries, in declaration order, empties dropped.
    pub fn path_extensions(&self) -> Vec<String> {
        self.pathext
            .as_deref()
            .unwrap_or(DEFAULT_PATHEXT)
            .split(';')
            .map(|ext| ext.trim().to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect()
    }
}

/// Knobs controlling which strategies may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Whether the `which`/`where` subprocess may be spawned.
    pub allow_subprocess: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            allow_subprocess: true,
        }
    }
}

impl ResolverOptions {
    /// Read options from the process environment.
    pub fn from_env() -> Self {
        let disabled = std::env::var(DISABLE_SUBPROCESS_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        Self {
            allow_subprocess: !disabled,
        }
    }

    /// Options for hardened hosts where spawning processes is not allowed.
    pub fn without_subprocess() -> Self {
        Self {
            allow_subprocess: false,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
