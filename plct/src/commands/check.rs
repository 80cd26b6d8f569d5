//! Check command implementation.
//!
//! Lexes one input and reports either the token count or a diagnostic
//! pointing at the first error.

use std::path::PathBuf;

use tracing::debug;

use crate::commands::common::{display_name, lex_source, read_source};
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input file, or `-` for standard input.
    pub file: PathBuf,
}

/// Lex the input and return the number of tokens.
pub fn check_file(args: &CheckArgs) -> Result<usize> {
    let source = read_source(&args.file)?;
    let tokens = lex_source(&args.file, &source)?;
    debug!(file = %display_name(&args.file), count = tokens.len(), "check passed");
    Ok(tokens.len())
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let count = check_file(&args)?;
    println!("ok: {} tokens", count);
    Ok(())
}
