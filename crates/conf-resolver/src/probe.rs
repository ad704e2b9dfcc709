//! Filesystem probes that decide whether a candidate is a usable executable
//!
//! Nothing here runs the candidate. Windows has no reliable executable bit,
//! so there a file is accepted by name and size instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Platform;

/// Tools accepted from a `which`/`where` listing without further checks.
pub const SAFE_TOOLS: &[&str] = &[
    "ping",
    "git",
    "python",
    "python3",
    "bash",
    "sh",
    "cmd.exe",
    "powershell.exe",
    "pwsh",
    "node",
    "php",
    "perl",
    "java",
    "curl",
    "tar",
];

/// GUI programs on Windows that must never be accepted from a lookup.
pub const GUI_PROGRAMS: &[&str] = &[
    "notepad.exe",
    "calc.exe",
    "mspaint.exe",
    "wordpad.exe",
    "write.exe",
    "explorer.exe",
    "taskmgr.exe",
    "regedit.exe",
    "mmc.exe",
    "control.exe",
    "charmap.exe",
    "snippingtool.exe",
    "magnify.exe",
    "osk.exe",
];

/// Windows directories that raise access-denied errors when listed.
pub const SKIPPED_DIRS: &[&str] = &[
    "windowsapps",
    "winsxs",
    "system volume information",
    "$recycle.bin",
];

fn lower_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

/// Whether `path` names a tool on the fixed allow-list.
///
/// Matches the full file name (`cmd.exe`) or its stem (`git` for `git.exe`).
pub fn is_safe_tool(path: &Path) -> bool {
    let Some(name) = lower_file_name(path) else {
        return false;
    };
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SAFE_TOOLS.contains(&name.as_str()) || SAFE_TOOLS.contains(&stem.as_str())
}

/// Whether `path` names a known Windows GUI program.
pub fn is_gui_program(path: &Path) -> bool {
    lower_file_name(path).is_some_and(|name| GUI_PROGRAMS.contains(&name.as_str()))
}

/// Whether a directory should be skipped rather than listed.
pub fn is_skipped_dir(path: &Path) -> bool {
    lower_file_name(path).is_some_and(|name| SKIPPED_DIRS.contains(&name.as_str()))
}

/// Whether `path` is a regular file the platform would execute.
///
/// Windows only needs the file to exist. Elsewhere an execute bit must be set.
pub fn is_executable(platform: Platform, path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    if platform.is_windows() {
        return true;
    }
    has_execute_bit(path)
}

#[cfg(unix)]
fn has_execute_bit(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn has_execute_bit(path: &Path) -> bool {
    path.is_file()
}

/// Anchor an accepted candidate to the working directory.
///
/// Relative `PATH` entries and lookup listings yield relative candidates; the
/// resolver only hands out absolute paths.
pub(crate) fn make_absolute(path: PathBuf) -> Option<PathBuf> {
    if path.is_absolute() {
        return Some(path);
    }
    match std::path::absolute(&path) {
        Ok(absolute) => Some(absolute),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Cannot make candidate absolute");
            None
        }
    }
}

/// Check a lookup result without executing it.
///
/// Non-Windows: the execute bit. Windows: not a GUI program, a `.exe`
/// extension and a non-zero size.
pub fn quick_executable_check(platform: Platform, path: &Path) -> bool {
    if !platform.is_windows() {
        return is_executable(platform, path);
    }
    if is_gui_program(path) {
        return false;
    }
    let is_exe = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"));
    is_exe && fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// List subdirectories of `dir`, sorted by name.
///
/// Unreadable directories yield an empty list.
pub fn list_subdirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Directory not readable, skipping");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use conf_test_utils::{make_executable, make_plain_file};
    use tempfile::TempDir;

    #[test]
    fn test_allow_and_deny_lists_are_disjoint() {
        for tool in SAFE_TOOLS {
            assert!(!GUI_PROGRAMS.contains(tool), "{tool} is on both lists");
        }
    }

    #[test]
    fn test_safe_tool_matches_name_or_stem() {
        assert!(is_safe_tool(Path::new("/usr/bin/git")));
        assert!(is_safe_tool(Path::new("C:/Program Files/Git/bin/git.exe")));
        assert!(is_safe_tool(Path::new("C:/Windows/System32/CMD.EXE")));
        assert!(!is_safe_tool(Path::new("/usr/bin/qpdf")));
    }

    #[test]
    fn test_gui_program_detection() {
        assert!(is_gui_program(Path::new("C:/Windows/notepad.exe")));
        assert!(is_gui_program(Path::new("C:/Windows/System32/Calc.exe")));
        assert!(!is_gui_program(Path::new("C:/Windows/System32/ping.exe")));
    }

    #[test]
    fn test_skipped_dirs() {
        assert!(is_skipped_dir(Path::new("C:/Program Files/WindowsApps")));
        assert!(is_skipped_dir(Path::new("C:/$Recycle.Bin")));
        assert!(!is_skipped_dir(Path::new("C:/Program Files/qpdf 12.2.0")));
    }

    #[test]
    fn test_windows_quick_check_requires_exe_and_size() {
        let temp = TempDir::new().unwrap();
        let exe = make_plain_file(temp.path(), "tool.exe");
        let script = make_plain_file(temp.path(), "tool.cmd");
        let empty = temp.path().join("empty.exe");
        fs::write(&empty, b"").unwrap();
        let gui = make_plain_file(temp.path(), "notepad.exe");

        assert!(quick_executable_check(Platform::Windows, &exe));
        assert!(!quick_executable_check(Platform::Windows, &script));
        assert!(!quick_executable_check(Platform::Windows, &empty));
        assert!(!quick_executable_check(Platform::Windows, &gui));
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_requires_execute_bit() {
        let temp = TempDir::new().unwrap();
        let plain = make_plain_file(temp.path(), "plain");
        let exec = make_executable(temp.path(), "exec");

        assert!(!is_executable(Platform::Unix, &plain));
        assert!(is_executable(Platform::Unix, &exec));
        assert!(!quick_executable_check(Platform::Unix, &plain));
        assert!(quick_executable_check(Platform::Unix, &exec));
    }

    #[test]
    fn test_windows_ignores_execute_bit() {
        let temp = TempDir::new().unwrap();
        let plain = make_plain_file(temp.path(), "tool.exe");
        assert!(is_executable(Platform::Windows, &plain));
        assert!(!is_executable(Platform::Windows, temp.path()));
    }

    #[test]
    fn test_list_subdirs_sorted_and_lenient() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        make_plain_file(temp.path(), "file.txt");

        let dirs = list_subdirs(temp.path());
        assert_eq!(dirs, vec![temp.path().join("a"), temp.path().join("b")]);
        assert!(list_subdirs(&temp.path().join("missing")).is_empty());
    }
}
