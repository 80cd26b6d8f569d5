//! plc-lex - Lexical Analyzer for the PLC Programming Language
//!
//! This crate provides the lexer (tokenizer) for the PLC language. It turns
//! source text into an ordered sequence of typed, positioned tokens that the
//! parser consumes.
//!
//! # Example Usage
//!
//! ```
//! use plc_lex::{Lexer, Token, TokenKind};
//!
//! // Lex a whole input at once
//! let tokens = Lexer::new("LET x = 5;").lex().unwrap();
//! assert_eq!(tokens.len(), 5);
//!
//! // Or one token at a time
//! let mut lexer = Lexer::new("x>=1");
//! assert_eq!(lexer.lex_token().unwrap(), Token::new(TokenKind::Identifier, "x", 0));
//! assert_eq!(lexer.lex_token().unwrap(), Token::new(TokenKind::Operator, ">=", 1));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification
//! - [`error`] - Lexing errors
//! - [`source`] - Offset to line/column lookup
//!
//! # Token Categories
//!
//! ## Identifiers
//!
//! Pattern: `[A-Za-z][A-Za-z0-9_-]*`
//!
//! ## Numbers
//!
//! - **Integer**: `0`, `42`, `-1`, `+123456` (no leading zeros)
//! - **Decimal**: `0.07`, `-12.57` (digits required on both sides of `.`)
//!
//! ## Literals
//!
//! - **Character**: `'c'`, `'\n'`
//! - **String**: `""`, `"Hello, World!"`
//!
//! Recognized escapes: `\b \n \r \t \' \" \\`. Literals keep their quotes
//! in the token text.
//!
//! ## Operators
//!
//! `!=`, `<=`, `>=`, `==`, and any other single non-whitespace character.
//!
//! # Offsets
//!
//! Token starts and error indices are byte offsets into the source. For
//! unterminated literals the error index is the length of the input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, ParseError, Result};
pub use lexer::{tokenize, Lexer};
pub use source::{LineCol, LineIndex};
pub use token::{Token, TokenKind};
