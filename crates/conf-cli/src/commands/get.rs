//! Get command

use std::path::PathBuf;

use conf_core::BatchPolicy;
use conf_schema::{Entry, Value};

use super::Context;
use crate::error::{CliError, Result};

/// Arguments of `confload get`.
#[derive(Debug)]
pub struct GetRequest<'a> {
    pub section: &'a str,
    pub key: &'a str,
    pub files: &'a [PathBuf],
    pub default: Option<&'a str>,
    pub replacements: &'a [(String, String)],
    pub json: bool,
}

/// Load the files, then print one value with placeholders substituted.
///
/// Executables print their resolved path.
pub fn run_get(ctx: &Context, req: &GetRequest<'_>) -> Result<()> {
    let mut store = ctx.store();
    store
        .load_batch(req.files, BatchPolicy::FailFast)
        .into_result()?;

    let value = match store.get(req.section, req.key) {
        Some(Entry::Executable(exe)) => match exe.path() {
            Some(path) => Value::from(path.display().to_string()),
            None => {
                return Err(CliError::user(format!(
                    "executable {}.{} is not resolved",
                    req.section, req.key
                )));
            }
        },
        Some(Entry::Value(_)) => store
            .get_substituted(req.section, req.key, req.replacements)
            .unwrap_or(Value::Null),
        None => match req.default {
            Some(default) => conf_core::substitute_placeholders(&Value::from(default), req.replacements),
            None => {
                return Err(CliError::user(format!(
                    "no value at {}.{}",
                    req.section, req.key
                )));
            }
        },
    };

    if req.json {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
