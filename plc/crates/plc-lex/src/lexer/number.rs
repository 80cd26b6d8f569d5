//! Number literal lexing.
//!
//! This module handles lexing of integer and decimal literals.

use crate::chars::{is_digit, is_nonzero_digit, is_sign};
use crate::error::{LexErrorKind, Result};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or decimal literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `-1`, `+123456`
    /// - Decimal: `0.07`, `12.57`, `-12.07`
    ///
    /// The integer part is either a lone `0` or starts with a nonzero digit.
    /// A `.` after the integer part must be followed by at least one digit.
    /// Scanning stops at the first character that cannot continue the
    /// number, so `10.70.10` yields `10.70`.
    ///
    /// # Errors
    ///
    /// - [`LexErrorKind::LeadingZero`] at the digit following a leading `0`
    /// - [`LexErrorKind::MissingFraction`] right after a dangling `.`
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind> {
        self.cursor.eat(is_sign);

        if self.cursor.match_char('0') {
            if is_digit(self.cursor.current()) {
                return Err(self.error_at_cursor(LexErrorKind::LeadingZero));
            }
        } else if self.cursor.eat(is_nonzero_digit) {
            self.cursor.eat_while(is_digit);
        } else {
            return Err(self.unexpected());
        }

        if !self.cursor.match_char('.') {
            return Ok(TokenKind::Integer);
        }

        if self.cursor.eat_while(is_digit) == 0 {
            return Err(self.error_at_cursor(LexErrorKind::MissingFraction));
        }

        Ok(TokenKind::Decimal)
    }
}
