//! Resolve and schemas commands

use colored::Colorize;

use super::Context;
use crate::error::{CliError, Result};

/// Print the absolute path `command` resolves to.
pub fn run_resolve(ctx: &Context, command: &str) -> Result<()> {
    match ctx.resolver().resolve(command) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::user(format!("executable not found: {command}"))),
    }
}

/// List schemas in detection order.
pub fn run_schemas(ctx: &Context) -> Result<()> {
    for (i, plugin) in ctx.cascade().registry().list_plugins().iter().enumerate() {
        println!("{:>2}. {}", i + 1, plugin.name().green());
    }
    Ok(())
}
