//! Operator lexing.
//!
//! The two-character comparison operators are matched first; any other
//! single non-whitespace character is an operator on its own.

use crate::chars::is_whitespace;
use crate::error::{LexErrorKind, Result};
use crate::token::TokenKind;
use crate::Lexer;

/// Operators made of two characters, tried before the single-character
/// fallback.
pub const COMPOUND_OPERATORS: [&str; 4] = ["!=", "<=", ">=", "=="];

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// Handles: `!=`, `<=`, `>=`, `==`, and any other single character
    /// that is not whitespace.
    ///
    /// # Errors
    ///
    /// [`LexErrorKind::UnexpectedCharacter`] on whitespace and
    /// [`LexErrorKind::UnexpectedEof`] at end of input.
    pub(crate) fn lex_operator(&mut self) -> Result<TokenKind> {
        if let Some(op) = COMPOUND_OPERATORS.iter().find(|op| self.cursor.check_str(op)) {
            self.cursor.advance_n(op.len());
            return Ok(TokenKind::Operator);
        }

        match self.cursor.current() {
            None => Err(self.error_at_cursor(LexErrorKind::UnexpectedEof)),
            c if is_whitespace(c) => Err(self.unexpected()),
            Some(_) => {
                self.cursor.advance();
                Ok(TokenKind::Operator)
            },
        }
    }
}
