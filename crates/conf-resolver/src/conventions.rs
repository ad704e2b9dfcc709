//! Conventional install directories
//!
//! Last-resort probing of the places tools usually land when they are not on
//! `PATH`. On Windows this includes a shallow scan of Program Files for
//! versioned folders such as `qpdf 12.2.0`.

use std::path::{Path, PathBuf};

use crate::{Platform, ResolverEnv, probe};

/// Binary directories probed on non-Windows platforms.
const UNIX_BIN_DIRS: &[&str] = &[
    "/usr/bin",
    "/usr/local/bin",
    "/bin",
    "/usr/sbin",
    "/sbin",
    "/opt/bin",
    "/snap/bin",
];

/// Subfolders of a Windows install root that may hold the binary.
/// The command's base name is appended at probe time.
const WINDOWS_SUBFOLDERS: &[&str] = &["", "bin", "tools"];

/// File extensions tried in each Windows directory.
const WINDOWS_SUFFIXES: &[&str] = &["exe", "cmd", "bat"];

/// Subfolders searched inside a matching Program Files entry.
const TYPICAL_SUBFOLDERS: &[&str] = &["", "bin", "tools", "exe", "app"];

/// Directories searched by the convention strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionRoots {
    /// Probed directly (and, on Windows, with the fixed subfolder patterns).
    pub install_roots: Vec<PathBuf>,
    /// Windows only: children whose names contain the command are searched.
    pub scan_roots: Vec<PathBuf>,
}

impl ConventionRoots {
    /// The conventional roots for `platform`.
    pub fn for_platform(platform: Platform, env: &ResolverEnv) -> Self {
        match platform {
            Platform::Windows => {
                let program_files = vec![
                    PathBuf::from(r"C:\Program Files"),
                    PathBuf::from(r"C:\Program Files (x86)"),
                ];
                let mut install_roots = vec![PathBuf::from(r"C:\Windows\System32")];
                install_roots.extend(program_files.iter().cloned());
                if let Some(local) = &env.local_app_data {
                    install_roots.push(local.join("Programs"));
                }
                if let Some(roaming) = &env.app_data {
                    install_roots.push(roaming.join("Programs"));
                }
                Self {
                    install_roots,
                    scan_roots: program_files,
                }
            }
            Platform::Unix => {
                let mut install_roots: Vec<PathBuf> =
                    UNIX_BIN_DIRS.iter().map(PathBuf::from).collect();
                if let Some(home) = &env.home {
                    install_roots.push(home.join(".local").join("bin"));
                    install_roots.push(home.join("bin"));
                }
                Self {
                    install_roots,
                    scan_roots: Vec::new(),
                }
            }
        }
    }
}

/// Probe the conventional directories for `command`.
pub(crate) fn probe_conventions(
    command: &str,
    platform: Platform,
    roots: &ConventionRoots,
) -> Option<PathBuf> {
    let found = match platform {
        Platform::Windows => probe_windows(command, roots),
        Platform::Unix => roots
            .install_roots
            .iter()
            .map(|dir| dir.join(command))
            .find(|candidate| probe::is_executable(Platform::Unix, candidate)),
    };
    found.and_then(probe::make_absolute)
}

fn probe_windows(command: &str, roots: &ConventionRoots) -> Option<PathBuf> {
    let base = base_name(command)?;

    for root in roots.install_roots.iter().filter(|r| !probe::is_skipped_dir(r)) {
        let subfolders = WINDOWS_SUBFOLDERS.iter().copied().chain([base.as_str()]);
        for sub in subfolders {
            let dir = subdir(root, sub);
            if probe::is_skipped_dir(&dir) {
                continue;
            }
            if let Some(hit) = probe_windows_dir(&dir, &base) {
                return Some(hit);
            }
        }
    }

    scan_versioned_installs(&base, roots)
}

/// One level into each scan root, one more into the typical subfolders.
fn scan_versioned_installs(base: &str, roots: &ConventionRoots) -> Option<PathBuf> {
    let needle = base.to_lowercase();

    for root in roots.scan_roots.iter().filter(|r| !probe::is_skipped_dir(r)) {
        for install in probe::list_subdirs(root) {
            if probe::is_skipped_dir(&install) {
                continue;
            }
            let matches_name = install
                .file_name()
                .is_some_and(|name| name.to_string_lossy().to_lowercase().contains(&needle));
            if !matches_name {
                continue;
            }

            for sub in TYPICAL_SUBFOLDERS {
                if let Some(hit) = probe_windows_dir(&subdir(&install, sub), base) {
                    return Some(hit);
                }
            }
        }
    }
    None
}

fn probe_windows_dir(dir: &Path, base: &str) -> Option<PathBuf> {
    WINDOWS_SUFFIXES
        .iter()
        .map(|ext| dir.join(format!("{base}.{ext}")))
        .find(|candidate| candidate.is_file())
}

fn subdir(root: &Path, sub: &str) -> PathBuf {
    if sub.is_empty() {
        root.to_path_buf()
    } else {
        root.join(sub)
    }
}

/// `qpdf.exe` -> `qpdf`, `git` -> `git`.
fn base_name(command: &str) -> Option<String> {
    Path::new(command)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
