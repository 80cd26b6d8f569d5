//! Line and column lookup for byte offsets.
//!
//! Tokens and errors carry plain byte offsets. [`LineIndex`] turns those
//! into human-readable positions when a diagnostic has to be shown.

/// A 1-based line and column in a source text.
///
/// The column counts characters, not bytes, from the start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based, in characters).
    pub column: usize,
}

/// Precomputed line starts of a source text.
///
/// # Example
///
/// ```
/// use plc_lex::source::{LineCol, LineIndex};
///
/// let index = LineIndex::new("LET x = 5;\nprint(x);");
/// assert_eq!(index.line_col(4), LineCol { line: 1, column: 5 });
/// assert_eq!(index.line_col(11), LineCol { line: 2, column: 1 });
/// assert_eq!(index.line_text(2), Some("print(x);"));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Builds the index for `source`.
    ///
    /// Only `\n` starts a new line; a `\r` before it stays part of the
    /// previous line and is trimmed by [`LineIndex::line_text`].
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// Returns the number of lines.
    ///
    /// An empty source has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a line and column.
    ///
    /// Offsets past the end are clamped to the end of the source, so the
    /// end-of-input offset reported for unterminated literals maps to the
    /// position just after the last character.
    pub fn line_col(&self, offset: usize) -> LineCol {
        let offset = self.floor_char_boundary(offset.min(self.source.len()));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count() + 1;
        LineCol {
            line: line + 1,
            column,
        }
    }

    /// Returns the text of a 1-based line without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.source.len());
        Some(self.source[start..end].trim_end_matches(['\n', '\r']))
    }

    fn floor_char_boundary(&self, mut offset: usize) -> usize {
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("print(\"Hello, World!\");");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), LineCol { line: 1, column: 1 });
        assert_eq!(index.line_col(21), LineCol { line: 1, column: 22 });
    }

    #[test]
    fn test_end_of_input_offset() {
        let index = LineIndex::new("\"unterminated");
        assert_eq!(index.line_col(13), LineCol { line: 1, column: 14 });
        assert_eq!(index.line_col(99), LineCol { line: 1, column: 14 });
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::new("a\nbc\r\nd");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(2), LineCol { line: 2, column: 1 });
        assert_eq!(index.line_col(4), LineCol { line: 2, column: 3 });
        assert_eq!(index.line_col(6), LineCol { line: 3, column: 1 });
        assert_eq!(index.line_text(1), Some("a"));
        assert_eq!(index.line_text(2), Some("bc"));
        assert_eq!(index.line_text(3), Some("d"));
        assert_eq!(index.line_text(0), None);
        assert_eq!(index.line_text(4), None);
    }

    #[test]
    fn test_columns_count_characters() {
        let index = LineIndex::new("'é' x");
        assert_eq!(index.line_col(5), LineCol { line: 1, column: 5 });
        assert_eq!(index.line_col(2), LineCol { line: 1, column: 2 });
    }

    #[test]
    fn test_trailing_newline() {
        let index = LineIndex::new("x\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_col(2), LineCol { line: 2, column: 1 });
        assert_eq!(index.line_text(2), Some(""));
    }
}
