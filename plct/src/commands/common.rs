//! Common types and utilities for plct commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use plc_lex::{tokenize, LineIndex, ParseError, Token};
use tracing::debug;

use crate::error::{PlctError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line: `KIND<TAB>start<TAB>literal`
    Text,
    /// A JSON array of `{ kind, literal, start }` objects
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Name of the input as shown in diagnostics.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read the whole input, from standard input when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        debug!(bytes = source.len(), "read source from stdin");
        return Ok(source);
    }

    if !path.exists() {
        return Err(PlctError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(PlctError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let source = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

// ============================================================================
// Lexing and diagnostics
// ============================================================================

/// Lex `source`, printing a diagnostic to stderr on failure.
pub fn lex_source(path: &Path, source: &str) -> Result<Vec<Token>> {
    tokenize(source).map_err(|err| {
        let name = display_name(path);
        eprint!("{}", render_diagnostic(&name, source, &err));
        let position = LineIndex::new(source).line_col(err.index());
        PlctError::Lex {
            path: name,
            line: position.line,
            column: position.column,
            source: err,
        }
    })
}

/// Render a lexing error with its location and a caret under the
/// offending column.
///
/// ```text
/// error: unterminated string literal
///  --> main.plc:1:14
///   |
/// 1 | "unterminated
///   |              ^
/// ```
pub fn render_diagnostic(name: &str, source: &str, err: &ParseError) -> String {
    let index = LineIndex::new(source);
    let position = index.line_col(err.index());
    let text = index.line_text(position.line).unwrap_or("");
    let gutter = position.line.to_string().len();

    // Keep tabs so the caret lines up with the echoed line.
    let pad: String = text
        .chars()
        .take(position.column - 1)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    format!(
        "error: {kind}\n\
         {blank:gutter$}--> {name}:{line}:{column}\n\
         {blank:gutter$} |\n\
         {line:>gutter$} | {text}\n\
         {blank:gutter$} | {pad}^\n",
        kind = err.kind(),
        blank = "",
        line = position.line,
        column = position.column,
    )
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration";
}
