//! Target platform model
//!
//! Resolution rules differ between Windows and everything else. The platform
//! is a value rather than a `cfg!` switch so Windows rules can run anywhere.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Drive-letter (`C:\`, `C:/`) or UNC (`\\server`, `//server`) prefix.
static WINDOWS_ABSOLUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]:[\\/]|\\\\|//)").unwrap());

/// Platform family whose conventions the resolver follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    /// Separator between entries of `PATH`.
    pub fn path_list_separator(self) -> char {
        match self {
            Self::Windows => ';',
            Self::Unix => ':',
        }
    }

    /// Split a `PATH`-style list, dropping empty segments.
    pub fn split_path_list(self, value: &str) -> Vec<PathBuf> {
        value
            .split(self.path_list_separator())
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Whether `command` is written as an absolute path for this platform.
    pub fn looks_absolute(self, command: &str) -> bool {
        match self {
            Self::Unix => command.starts_with('/'),
            Self::Windows => WINDOWS_ABSOLUTE.is_match(command),
        }
    }

    /// The lookup tool that lists matches without running them.
    pub fn lookup_command(self) -> &'static str {
        match self {
            Self::Windows => "where",
            Self::Unix => "which",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Unix => "unix",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
