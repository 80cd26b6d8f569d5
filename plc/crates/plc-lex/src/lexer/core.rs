//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the single-token dispatch
//! and the loop that assembles the full token sequence.

use tracing::{debug, trace};

use crate::chars::{is_alpha, is_digit, is_sign};
use crate::cursor::Cursor;
use crate::error::{LexErrorKind, ParseError, Result};
use crate::token::Token;

/// Lexer for the PLC language.
///
/// A lexer is bound to one complete source string. It can hand out tokens
/// one at a time with [`Lexer::lex_token`], produce the whole sequence with
/// [`Lexer::lex`], or be driven as an iterator of `Result<Token>`.
///
/// # Example
///
/// ```
/// use plc_lex::{Lexer, Token, TokenKind};
///
/// let tokens = Lexer::new("LET x = 5;").lex().unwrap();
/// assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "LET", 0));
/// assert_eq!(tokens[3], Token::new(TokenKind::Integer, "5", 8));
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            failed: false,
        }
    }

    /// Lexes the rest of the input into a token sequence.
    ///
    /// Whitespace between tokens is skipped. The first grammar violation
    /// aborts the whole run; no partial token list is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first token that failed to lex.
    pub fn lex(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(result) = self.next_token() {
            match result {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    debug!(index = err.index(), kind = ?err.kind(), "lexing failed");
                    return Err(err);
                },
            }
        }

        debug!(count = tokens.len(), "lexed input");
        Ok(tokens)
    }

    /// Lexes exactly one token starting at the current position.
    ///
    /// Whitespace is not skipped: the token must begin right at the cursor.
    /// The sub-lexer is chosen from the upcoming characters in priority
    /// order: identifier, number, character, string, operator.
    ///
    /// # Errors
    ///
    /// Fails at end of input, on whitespace, and on any grammar violation
    /// inside the selected token.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::{Lexer, Token, TokenKind};
    ///
    /// let token = Lexer::new("-12.07").lex_token().unwrap();
    /// assert_eq!(token, Token::new(TokenKind::Decimal, "-12.07", 0));
    ///
    /// assert!(Lexer::new("01").lex_token().is_err());
    /// ```
    pub fn lex_token(&mut self) -> Result<Token> {
        self.token_start = self.cursor.position();

        let kind = if self.cursor.check(&[is_alpha]) {
            self.lex_identifier()?
        } else if self.cursor.check(&[is_digit]) || self.cursor.check(&[is_sign, is_digit]) {
            self.lex_number()?
        } else if self.cursor.check_str("'") {
            self.lex_character()?
        } else if self.cursor.check_str("\"") {
            self.lex_string()?
        } else {
            self.lex_operator()?
        };

        let token = Token::new(kind, self.cursor.slice_from(self.token_start), self.token_start);
        trace!(kind = %token.kind(), start = token.start(), literal = token.literal(), "token");
        Ok(token)
    }

    /// Skips whitespace and lexes the next token, or returns `None` at the
    /// end of input.
    fn next_token(&mut self) -> Option<Result<Token>> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return None;
        }
        Some(self.lex_token())
    }

    /// Builds an error of the given kind at the cursor position.
    pub(crate) fn error_at_cursor(&self, kind: LexErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.position())
    }

    /// Builds the error for a character that cannot continue the current
    /// token, or for running out of input.
    pub(crate) fn unexpected(&self) -> ParseError {
        let kind = match self.cursor.current() {
            Some(c) => LexErrorKind::UnexpectedCharacter(c),
            None => LexErrorKind::UnexpectedEof,
        };
        self.error_at_cursor(kind)
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source this lexer is bound to.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.next_token()?;
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lexes a complete source string.
///
/// Shorthand for `Lexer::new(source).lex()`.
///
/// # Example
///
/// ```
/// use plc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("x >= 1.5")
///     .unwrap()
///     .iter()
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Operator, TokenKind::Decimal]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).lex()
}
