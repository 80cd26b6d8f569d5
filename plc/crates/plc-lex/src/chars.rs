//! Character classification for the PLC lexer.
//!
//! Every predicate takes an `Option<char>` so it can be applied directly to
//! the result of a cursor lookahead; `None` stands for end of input and is
//! never accepted by any class.

/// Checks if a character is an ASCII letter.
///
/// Identifiers must start with one of these.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_alpha;
///
/// assert!(is_alpha(Some('a')));
/// assert!(is_alpha(Some('Z')));
/// assert!(!is_alpha(Some('α')));
/// assert!(!is_alpha(Some('_')));
/// assert!(!is_alpha(None));
/// ```
#[inline]
pub fn is_alpha(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_alphabetic())
}

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_digit;
///
/// assert!(is_digit(Some('0')));
/// assert!(is_digit(Some('9')));
/// assert!(!is_digit(Some('a')));
/// assert!(!is_digit(None));
/// ```
#[inline]
pub fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_digit())
}

/// Checks if a character is a nonzero ASCII digit.
#[inline]
pub fn is_nonzero_digit(c: Option<char>) -> bool {
    matches!(c, Some('1'..='9'))
}

/// Checks if a character may continue an identifier.
///
/// Letters, digits, `_` and `-` are allowed after the first character.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue(Some('a')));
/// assert!(is_ident_continue(Some('7')));
/// assert!(is_ident_continue(Some('_')));
/// assert!(is_ident_continue(Some('-')));
/// assert!(!is_ident_continue(Some('+')));
/// assert!(!is_ident_continue(Some(' ')));
/// ```
#[inline]
pub fn is_ident_continue(c: Option<char>) -> bool {
    is_alpha(c) || is_digit(c) || matches!(c, Some('_' | '-'))
}

/// Checks if a character separates tokens.
///
/// Only space, tab, newline and carriage return count. They are skipped
/// between tokens and never appear in a literal outside of quotes.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(Some(' ')));
/// assert!(is_whitespace(Some('\t')));
/// assert!(is_whitespace(Some('\n')));
/// assert!(is_whitespace(Some('\r')));
/// assert!(!is_whitespace(Some('\u{0B}')));
/// assert!(!is_whitespace(None));
/// ```
#[inline]
pub fn is_whitespace(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t' | '\n' | '\r'))
}

/// Checks if a character is a line break.
///
/// Line breaks may not appear raw inside character or string literals.
#[inline]
pub fn is_line_break(c: Option<char>) -> bool {
    matches!(c, Some('\n' | '\r'))
}

/// Checks if a character may follow a backslash in a literal.
///
/// The recognized escapes are `\b`, `\n`, `\r`, `\t`, `\'`, `\"` and `\\`.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_escape;
///
/// assert!(is_escape(Some('n')));
/// assert!(is_escape(Some('\\')));
/// assert!(is_escape(Some('\'')));
/// assert!(!is_escape(Some('w')));
/// assert!(!is_escape(Some('0')));
/// ```
#[inline]
pub fn is_escape(c: Option<char>) -> bool {
    matches!(c, Some('b' | 'n' | 'r' | 't' | '\'' | '"' | '\\'))
}

/// Checks if a character is an explicit numeric sign.
#[inline]
pub fn is_sign(c: Option<char>) -> bool {
    matches!(c, Some('+' | '-'))
}
