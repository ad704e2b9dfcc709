//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// confload - Detect, load and query JSON configuration documents
#[derive(Parser, Debug)]
#[command(name = "confload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never run `which`/`where` while resolving executables
    ///
    /// Also disabled by setting CONFLOAD_DISABLE_SUBPROCESS.
    #[arg(long, global = true)]
    pub no_subprocess: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the schema a document matches
    Detect {
        /// JSON document to classify
        file: PathBuf,
    },

    /// Check a document against its detected schema
    ///
    /// Exits with status 1 when there are findings.
    Validate {
        /// JSON document to check
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Load documents in order and print the merged configuration
    ///
    /// Later documents override earlier ones key by key.
    ///
    /// Examples:
    ///   confload load defaults.json local.json
    ///   confload load --keep-going --json conf.d/*.json
    Load {
        /// JSON documents, lowest precedence first
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Reload documents that were already loaded
        #[arg(long)]
        force: bool,

        /// Keep loading after a document fails
        #[arg(long)]
        keep_going: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Look up one value after loading documents
    Get {
        /// Section name
        section: String,

        /// Key within the section
        key: String,

        /// JSON documents to load, lowest precedence first
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,

        /// Printed when the key is absent
        #[arg(long)]
        default: Option<String>,

        /// Replace TOKEN with VALUE in the result (repeatable)
        #[arg(long = "set", value_name = "TOKEN=VALUE", value_parser = parse_assignment)]
        replacements: Vec<(String, String)>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve a command name to an absolute path
    Resolve {
        /// Command name or path
        command: String,
    },

    /// List the known schemas in detection order
    Schemas,
}

/// Parse `TOKEN=VALUE`; the value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((token, value)) if !token.is_empty() => Ok((token.to_string(), value.to_string())),
        _ => Err(format!("expected TOKEN=VALUE, got '{raw}'")),
    }
}
