//! Token definitions for the PLC lexer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The category of a token.
///
/// The set is closed: every token the lexer produces is one of these six.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TokenKind {
    /// A name such as `getName` or `the_legend-27`.
    Identifier,
    /// A whole number with an optional sign, such as `-1`.
    Integer,
    /// A number with a fractional part, such as `12.07`.
    Decimal,
    /// A quoted character literal, such as `'c'` or `'\n'`.
    Character,
    /// A quoted string literal, such as `"Hello"`.
    String,
    /// Any other single character, or one of `!=`, `<=`, `>=`, `==`.
    Operator,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Decimal,
        TokenKind::Character,
        TokenKind::String,
        TokenKind::Operator,
    ];

    /// Returns the upper-case name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Decimal.as_str(), "DECIMAL");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Character => "CHARACTER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, positioned fragment of source text.
///
/// The literal is the exact source text the token was read from, quotes
/// and escape backslashes included, so that
/// `source[token.start()..token.end()] == token.literal()` always holds.
///
/// # Example
///
/// ```
/// use plc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Integer, "5", 8);
/// assert_eq!(token.kind(), TokenKind::Integer);
/// assert_eq!(token.literal(), "5");
/// assert_eq!(token.start(), 8);
/// assert_eq!(token.end(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    kind: TokenKind,
    literal: String,
    start: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, start: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            start,
        }
    }

    /// Returns the kind of this token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source text of this token.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns the byte offset where this token starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset one past the end of this token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.literal.len()
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}@{}", self.kind, self.literal, self.start)
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync);
static_assertions::assert_impl_all!(TokenKind: Send, Sync, Copy);
