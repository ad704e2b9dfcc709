//! Manual `PATH` walk
//!
//! Equivalent of `which` without spawning anything, so it keeps working on
//! hosts where subprocesses are disabled.

use std::path::PathBuf;

use crate::{Platform, ResolverEnv, probe};

/// Search every `PATH` directory for `command`.
pub(crate) fn walk_path(command: &str, platform: Platform, env: &ResolverEnv) -> Option<PathBuf> {
    let path_var = env.path.as_deref()?;
    let extensions = candidate_extensions(command, platform, env);

    for dir in platform.split_path_list(path_var) {
        for ext in &extensions {
            let candidate = dir.join(format!("{command}{ext}"));
            if probe::is_executable(platform, &candidate) {
                return probe::make_absolute(candidate);
            }
        }
    }
    None
}

/// Suffixes to append to `command`, in the order they are tried.
///
/// Windows tries each `PATHEXT` entry and then the bare name, or the bare name
/// first when the command already ends with one of those extensions.
fn candidate_extensions(command: &str, platform: Platform, env: &ResolverEnv) -> Vec<String> {
    if !platform.is_windows() {
        return vec![String::new()];
    }

    let extensions = env.path_extensions();
    let lowered = command.to_ascii_lowercase();
    let has_known_ext = extensions.iter().any(|ext| lowered.ends_with(ext.as_str()));

    let mut ordered = Vec::with_capacity(extensions.len() + 1);
    if has_known_ext {
        ordered.push(String::new());
        ordered.extend(extensions);
    } else {
        ordered.extend(extensions);
        ordered.push(String::new());
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use conf_test_utils::{TestPathDirs, make_plain_file};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_candidate_extensions_unix() {
        let env = ResolverEnv::default();
        assert_eq!(candidate_extensions("git", Platform::Unix, &env), vec![""]);
    }

    #[test]
    fn test_candidate_extensions_windows_bare_last() {
        let env = ResolverEnv::default().with_pathext(".EXE;.BAT");
        assert_eq!(
            candidate_extensions("foo", Platform::Windows, &env),
            vec![".exe", ".bat", ""]
        );
    }

    #[test]
    fn test_candidate_extensions_windows_known_extension_first() {
        let env = ResolverEnv::default().with_pathext(".EXE;.BAT");
        assert_eq!(
            candidate_extensions("foo.exe", Platform::Windows, &env),
            vec!["", ".exe", ".bat"]
        );
    }

    #[test]
    fn test_walk_without_path_var() {
        assert_eq!(walk_path("foo", Platform::Windows, &ResolverEnv::default()), None);
    }

    #[test]
    fn test_windows_walk_prefers_earlier_directory() {
        let dirs = TestPathDirs::new(2);
        make_plain_file(dirs.dir(1), "foo.exe");
        make_plain_file(dirs.dir(0), "foo.bat");
        let env = ResolverEnv::default()
            .with_path(dirs.path_var(';'))
            .with_pathext(".EXE;.BAT");

        let found = walk_path("foo", Platform::Windows, &env);
        assert_eq!(found, Some(dirs.dir(0).join("foo.bat")));
    }
}
