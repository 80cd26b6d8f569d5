//! String and character literal lexing.
//!
//! Literals keep their quotes and escape backslashes in the token text;
//! escapes are validated here but not decoded.

use crate::chars::{is_escape, is_line_break};
use crate::error::{LexErrorKind, Result};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a character literal.
    ///
    /// Exactly one character, or one escape sequence, between single
    /// quotes: `'c'`, `'\n'`, `'\''`.
    ///
    /// # Errors
    ///
    /// - [`LexErrorKind::EmptyCharacter`] for `''`
    /// - [`LexErrorKind::MultipleCharacters`] for `'abc'`
    /// - [`LexErrorKind::UnterminatedCharacter`] at end of input
    /// - [`LexErrorKind::LineBreakInLiteral`] for a raw newline or carriage return
    /// - [`LexErrorKind::InvalidEscape`] for an unknown escape
    pub(crate) fn lex_character(&mut self) -> Result<TokenKind> {
        if !self.cursor.match_char('\'') {
            return Err(self.unexpected());
        }

        match self.cursor.current() {
            None => return Err(self.error_at_cursor(LexErrorKind::UnterminatedCharacter)),
            Some('\'') => return Err(self.error_at_cursor(LexErrorKind::EmptyCharacter)),
            Some('\\') => self.lex_escape(LexErrorKind::UnterminatedCharacter)?,
            c if is_line_break(c) => {
                return Err(self.error_at_cursor(LexErrorKind::LineBreakInLiteral));
            },
            Some(_) => {
                self.cursor.advance();
            },
        }

        match self.cursor.current() {
            Some('\'') => {
                self.cursor.advance();
                Ok(TokenKind::Character)
            },
            None => Err(self.error_at_cursor(LexErrorKind::UnterminatedCharacter)),
            c if is_line_break(c) => Err(self.error_at_cursor(LexErrorKind::LineBreakInLiteral)),
            Some(_) => Err(self.error_at_cursor(LexErrorKind::MultipleCharacters)),
        }
    }

    /// Lexes a string literal.
    ///
    /// Any characters except `"`, `\` and line breaks, plus escape
    /// sequences, between double quotes. The empty string `""` is valid.
    ///
    /// # Errors
    ///
    /// - [`LexErrorKind::UnterminatedString`] at end of input
    /// - [`LexErrorKind::LineBreakInLiteral`] for a raw newline or carriage return
    /// - [`LexErrorKind::InvalidEscape`] for an unknown escape
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind> {
        if !self.cursor.match_char('"') {
            return Err(self.unexpected());
        }

        loop {
            match self.cursor.current() {
                None => return Err(self.error_at_cursor(LexErrorKind::UnterminatedString)),
                Some('"') => {
                    self.cursor.advance();
                    return Ok(TokenKind::String);
                },
                Some('\\') => self.lex_escape(LexErrorKind::UnterminatedString)?,
                c if is_line_break(c) => {
                    return Err(self.error_at_cursor(LexErrorKind::LineBreakInLiteral));
                },
                Some(_) => {
                    self.cursor.advance();
                },
            }
        }
    }

    /// Lexes a backslash and the escape character after it.
    ///
    /// `unterminated` is the error reported when the input ends right
    /// after the backslash.
    fn lex_escape(&mut self, unterminated: LexErrorKind) -> Result<()> {
        self.cursor.advance();

        match self.cursor.current() {
            None => Err(self.error_at_cursor(unterminated)),
            c @ Some(_) if is_escape(c) => {
                self.cursor.advance();
                Ok(())
            },
            Some(c) => Err(self.error_at_cursor(LexErrorKind::InvalidEscape(c))),
        }
    }
}
