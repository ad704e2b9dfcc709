//! Validate command

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use super::{Context, read_document};
use crate::error::{CliError, Result};

/// Report validation findings for `file` under its detected schema.
pub fn run_validate(ctx: &Context, file: &Path, json: bool) -> Result<()> {
    let doc = read_document(file)?;
    let (schema, findings) = ctx.cascade().validate(&doc, ctx.resolver())?;

    if json {
        let report = json!({ "schema": schema, "findings": findings });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if findings.is_empty() {
        println!("{} {} ({})", "OK".green().bold(), file.display(), schema);
    } else {
        println!("{} ({})", file.display(), schema);
        for finding in &findings {
            println!("  {} {}", "-".yellow(), finding);
        }
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} validation finding(s) in {}",
            findings.len(),
            file.display()
        )))
    }
}
