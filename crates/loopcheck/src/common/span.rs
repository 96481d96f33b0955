//! Source spans and line/column lookup

use std::ops::Range;

/// Byte range into the analyzed source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Maps byte offsets to 1-based line and column numbers.
///
/// Only `\n` starts a new line. Columns count characters, so a tab or a
/// multi-byte letter each advance the column by one.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        Self {
            starts: codespan_reporting::files::line_starts(source).collect(),
        }
    }

    /// Line and column of `offset` within `source`
    pub fn location(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset).max(1);
        let line_start = self.starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let source = "let i = 0;";
        let index = LineIndex::new(source);
        assert_eq!(index.location(source, 0), (1, 1));
        assert_eq!(index.location(source, 4), (1, 5));
    }

    #[test]
    fn test_newline_resets_column() {
        let source = "a\n\tb\nc";
        let index = LineIndex::new(source);
        assert_eq!(index.location(source, 3), (2, 2));
        assert_eq!(index.location(source, 5), (3, 1));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "ñandú x";
        let index = LineIndex::new(source);
        let offset = source.find('x').unwrap();
        assert_eq!(index.location(source, offset), (1, 7));
    }
}
