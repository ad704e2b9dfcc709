//! `which` / `where` lookup
//!
//! The lookup tool only lists matches; the candidates themselves are checked
//! on disk and never launched.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::{Platform, ResolverEnv, probe};

/// Only the first lines of the lookup output are considered.
const MAX_LOOKUP_LINES: usize = 3;

/// Ask the platform lookup tool for `command`.
pub(crate) fn shell_lookup(command: &str, platform: Platform, env: &ResolverEnv) -> Option<PathBuf> {
    let lookup = platform.lookup_command();
    let mut cmd = Command::new(lookup);
    cmd.arg(command).stdin(Stdio::null()).stderr(Stdio::null());
    if let Some(path) = &env.path {
        cmd.env("PATH", path);
    }

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(lookup, error = %e, "Lookup tool unavailable");
            return None;
        }
    };
    if !output.status.success() {
        return None;
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    select_candidate(&listing, platform)
}

/// Pick the first acceptable path from lookup output.
pub(crate) fn select_candidate(listing: &str, platform: Platform) -> Option<PathBuf> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_LOOKUP_LINES)
        .map(PathBuf::from)
        .filter(|candidate| candidate.is_file())
        .find(|candidate| {
            probe::is_safe_tool(candidate) || probe::quick_executable_check(platform, candidate)
        })
        .and_then(probe::make_absolute)
}
