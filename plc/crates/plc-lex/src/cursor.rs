//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the read
//! position while the lexer walks through the source text. Positions are
//! byte offsets into the UTF-8 source; lookahead and consumption always
//! move by whole characters.

use crate::chars::is_whitespace;

/// A predicate over one lookahead character, `None` meaning end of input.
pub type CharClass = fn(Option<char>) -> bool;

/// A cursor for traversing source code character by character.
///
/// The cursor borrows the source immutably and owns a single position.
/// It supports bounded lookahead that never consumes and consumption of
/// one or more characters.
///
/// # Example
///
/// ```
/// use plc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("LET x");
///
/// assert_eq!(cursor.current(), Some('L'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('E'));
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position, or `None` at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// assert_eq!(Cursor::new("abc").current(), Some('a'));
    /// assert_eq!(Cursor::new("").current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Arguments
    ///
    /// * `offset` - Number of characters to look ahead (0 = current)
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(2), Some('c'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();

        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return Some(b as char);
            }
        }

        rest.chars().nth(offset)
    }

    /// Checks the upcoming characters against a sequence of classes.
    ///
    /// Returns true if the `i`-th upcoming character satisfies `classes[i]`
    /// for every `i`. Nothing is consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::chars::{is_digit, is_sign};
    /// use plc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("-1");
    /// assert!(cursor.check(&[is_sign, is_digit]));
    /// assert!(!cursor.check(&[is_digit]));
    /// ```
    pub fn check(&self, classes: &[CharClass]) -> bool {
        let mut chars = self.remaining().chars();
        classes.iter().all(|class| class(chars.next()))
    }

    /// Checks whether the upcoming characters spell `expected` exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=1");
    /// assert!(cursor.check_str("<="));
    /// assert!(!cursor.check_str("<=="));
    /// ```
    #[inline]
    pub fn check_str(&self, expected: &str) -> bool {
        self.remaining().starts_with(expected)
    }

    /// Consumes and returns the current character.
    ///
    /// Does nothing and returns `None` at the end of the source.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Advances the cursor by the given number of characters.
    ///
    /// Stops early at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current(), Some('d'));
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes the current character if it belongs to `class`.
    ///
    /// Returns true if a character was consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::chars::is_digit;
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("7a");
    /// assert!(cursor.eat(is_digit));
    /// assert!(!cursor.eat(is_digit));
    /// assert_eq!(cursor.current(), Some('a'));
    /// ```
    #[inline]
    pub fn eat(&mut self, class: CharClass) -> bool {
        if class(self.current()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while they belong to `class`.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, class: CharClass) -> usize {
        let mut count = 0;
        while self.eat(class) {
            count += 1;
        }
        count
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips space, tab, newline and carriage return characters.
    ///
    /// Other Unicode whitespace is left in place.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{is_alpha, is_digit, is_sign};

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("LET x = 5;");
        assert_eq!(cursor.current(), Some('L'));
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current(), Some('α'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('β'));
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        assert_eq!(cursor.current(), Some('γ'));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::new("a€c");
        assert_eq!(cursor.peek(1), Some('€'));
        assert_eq!(cursor.peek(2), Some('c'));
        assert_eq!(cursor.peek(100), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_check_sequence() {
        let cursor = Cursor::new("+5x");
        assert!(cursor.check(&[is_sign, is_digit, is_alpha]));
        assert!(!cursor.check(&[is_sign, is_alpha]));
        assert!(!cursor.check(&[is_sign, is_digit, is_alpha, is_alpha]));
        assert!(cursor.check(&[]));
    }

    #[test]
    fn test_check_str() {
        let cursor = Cursor::new("!=");
        assert!(cursor.check_str("!="));
        assert!(cursor.check_str("!"));
        assert!(!cursor.check_str("=="));
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("12345abc");
        assert_eq!(cursor.eat_while(is_digit), 5);
        assert_eq!(cursor.remaining(), "abc");
        assert_eq!(cursor.eat_while(is_digit), 0);
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n LET");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some('L'));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_skip_whitespace_leaves_other_space() {
        let mut cursor = Cursor::new("\u{0B}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("print(x)");
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(0), "print");
        assert_eq!(cursor.remaining(), "(x)");
        assert_eq!(cursor.source(), "print(x)");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
        cursor.advance_n(4);
        assert_eq!(cursor.position(), 0);
    }
}
