//! Identifier lexing.

use crate::chars::{is_alpha, is_ident_continue};
use crate::error::Result;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with an ASCII letter, followed by any number of
    /// letters, digits, underscores or hyphens. The longest such run is
    /// consumed.
    pub(crate) fn lex_identifier(&mut self) -> Result<TokenKind> {
        if !self.cursor.eat(is_alpha) {
            return Err(self.unexpected());
        }
        self.cursor.eat_while(is_ident_continue);
        Ok(TokenKind::Identifier)
    }
}
