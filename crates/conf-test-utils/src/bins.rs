//! Fake executables and PATH directory fixtures

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a non-empty file at `dir/name` with the executable bit set on Unix.
pub fn make_executable(dir: &Path, name: &str) -> PathBuf {
    let path = make_plain_file(dir, name);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark file executable");
    }
    path
}

/// Create a non-empty file at `dir/name` without touching permissions.
pub fn make_plain_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, b"#!/bin/sh\nexit 0\n").expect("Failed to write file");
    path
}

/// A set of scratch directories to be joined into a PATH-style list.
pub struct TestPathDirs {
    temp: TempDir,
    dirs: Vec<PathBuf>,
}

impl TestPathDirs {
    /// Create `count` empty directories named `dir0`, `dir1`, ...
    pub fn new(count: usize) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dirs = (0..count)
            .map(|i| {
                let dir = temp.path().join(format!("dir{i}"));
                fs::create_dir_all(&dir).expect("Failed to create PATH dir");
                dir
            })
            .collect();
        Self { temp, dirs }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn dir(&self, index: usize) -> &Path {
        &self.dirs[index]
    }

    /// Join the directories with `separator` (`:` or `;`).
    pub fn path_var(&self, separator: char) -> String {
        self.dirs
            .iter()
            .map(|d| d.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(&separator.to_string())
    }
}
