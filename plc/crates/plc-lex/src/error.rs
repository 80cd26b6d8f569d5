//! Error types for the PLC lexer.
//!
//! Lexing stops at the first grammar violation. The error records what
//! went wrong and the byte offset where it was detected.

use thiserror::Error;

/// The reason a lexing attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A token was requested but the input is exhausted.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The character cannot start any token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A character literal ran to the end of input.
    #[error("unterminated character literal")]
    UnterminatedCharacter,

    /// A string literal ran to the end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A character literal with nothing between the quotes.
    #[error("empty character literal")]
    EmptyCharacter,

    /// A character literal with more than one character between the quotes.
    #[error("character literal must contain exactly one character")]
    MultipleCharacters,

    /// A backslash followed by something other than `b n r t ' " \`.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// A raw newline or carriage return inside a quoted literal.
    #[error("line break in literal")]
    LineBreakInLiteral,

    /// An integer part that starts with `0` but continues with digits.
    #[error("leading zero in number")]
    LeadingZero,

    /// A decimal point with no digit after it.
    #[error("expected digit after decimal point")]
    MissingFraction,
}

/// A lexing failure at a specific offset.
///
/// # Example
///
/// ```
/// use plc_lex::{Lexer, LexErrorKind};
///
/// let err = Lexer::new("\"unterminated").lex().unwrap_err();
/// assert_eq!(err.index(), 13);
/// assert_eq!(err.kind(), LexErrorKind::UnterminatedString);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at index {index}")]
pub struct ParseError {
    kind: LexErrorKind,
    index: usize,
}

impl ParseError {
    /// Creates a new error of the given kind at `index`.
    pub fn new(kind: LexErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Returns the reason for the failure.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns the byte offset where the failure was detected.
    ///
    /// For unterminated literals this is the length of the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the human-readable description, without the offset.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type alias for lexing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

static_assertions::assert_impl_all!(ParseError: Send, Sync, std::error::Error);
