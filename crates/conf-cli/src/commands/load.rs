//! Load command

use std::path::PathBuf;

use colored::Colorize;
use conf_core::{BatchPolicy, LoadOptions, LoadOutcome};

use super::{Context, print_section};
use crate::error::{CliError, Result};

/// Load `files` in order and print the merged store.
pub fn run_load(
    ctx: &Context,
    files: &[PathBuf],
    force: bool,
    keep_going: bool,
    json: bool,
) -> Result<()> {
    let policy = if keep_going {
        BatchPolicy::ContinueOnError
    } else {
        BatchPolicy::FailFast
    };
    let mut store = ctx.store();
    let report = store.load_batch_with(
        files,
        policy,
        LoadOptions {
            force_reload: force,
        },
    );

    for (path, outcome) in &report.loaded {
        match outcome {
            LoadOutcome::Loaded { schema } => {
                eprintln!("{} {} ({})", "loaded".green(), path.display(), schema)
            }
            LoadOutcome::AlreadyLoaded => {
                eprintln!("{} {}", "skipped".dimmed(), path.display())
            }
        }
    }
    for (path, err) in &report.failed {
        eprintln!("{} {}: {}", "failed".red(), path.display(), err);
    }

    if !keep_going && !report.is_success() {
        return Err(report
            .into_result()
            .err()
            .map(CliError::from)
            .unwrap_or_else(|| CliError::user("load failed")));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&store)?);
    } else {
        for (name, section) in store.sections() {
            print_section(name, section);
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} document(s) failed to load",
            report.failed.len(),
            files.len()
        )))
    }
}
