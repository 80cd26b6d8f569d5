//! Lex command implementation.
//!
//! Prints the token sequence of one input, either as tab-separated text
//! or as JSON.

use std::io::Write;
use std::path::PathBuf;

use plc_lex::Token;
use tracing::debug;

use crate::commands::common::{lex_source, read_source, OutputFormat};
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Input file, or `-` for standard input.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing tokens to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let source = read_source(&self.args.file)?;
        let tokens = lex_source(&self.args.file, &source)?;
        debug!(count = tokens.len(), format = ?self.args.format, "writing tokens");
        write_tokens(out, &tokens, self.args.format)
    }
}

/// Write `tokens` in the given format.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}\t{}\t{}", token.kind(), token.start(), token.literal())?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Run the lex command against standard output.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    LexCommand::new(args).run(&mut out)?;
    out.flush()?;
    Ok(())
}
