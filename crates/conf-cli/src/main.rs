//! confload CLI
//!
//! Detects the schema of JSON configuration documents, loads them into a
//! merged store and resolves the executables they declare.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Context;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let ctx = Context::new(cli.no_subprocess);
    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Detect { file } => commands::run_detect(ctx, &file),
        Commands::Validate { file, json } => commands::run_validate(ctx, &file, json),
        Commands::Load {
            files,
            force,
            keep_going,
            json,
        } => commands::run_load(ctx, &files, force, keep_going, json),
        Commands::Get {
            section,
            key,
            files,
            default,
            replacements,
            json,
        } => commands::run_get(
            ctx,
            &commands::GetRequest {
                section: &section,
                key: &key,
                files: &files,
                default: default.as_deref(),
                replacements: &replacements,
                json,
            },
        ),
        Commands::Resolve { command } => commands::run_resolve(ctx, &command),
        Commands::Schemas => commands::run_schemas(ctx),
    }
}
