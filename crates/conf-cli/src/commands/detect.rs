//! Detect command

use std::path::Path;

use super::{Context, read_document};
use crate::error::Result;

/// Print the name of the schema `file` matches.
pub fn run_detect(ctx: &Context, file: &Path) -> Result<()> {
    let doc = read_document(file)?;
    let schema = ctx.cascade().detect(&doc)?.kind();
    println!("{schema}");
    Ok(())
}
