//! Source position types.
//!
//! `SourcePos` is what the upstream lexer attaches to every token. `Position`
//! is the derived span every AST node carries for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line or column number, as reported by the lexer.
pub type TextPos = u32;

/// The location of a token in the source text, as produced by the lexer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    /// Byte offset of the token from the start of the source.
    #[serde(default)]
    pub index: TextPos,
    /// Line of the token.
    pub line: TextPos,
    /// Column where the token starts.
    pub column: TextPos,
}

impl SourcePos {
    #[inline]
    pub fn new(index: TextPos, line: TextPos, column: TextPos) -> Self {
        Self { index, line, column }
    }
}

/// A single-line span attached to AST nodes.
///
/// Positions are derived, never authored: `column_end` is `column_start`
/// plus the byte length of the token the span was derived from. A node whose
/// span cannot be derived gets [`Position::UNKNOWN`] rather than no position.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub line: TextPos,
    pub column_start: TextPos,
    pub column_end: TextPos,
}

impl Position {
    /// The all-zero sentinel for nodes with no reachable token.
    pub const UNKNOWN: Position = Position {
        line: 0,
        column_start: 0,
        column_end: 0,
    };

    #[inline]
    pub fn new(line: TextPos, column_start: TextPos, column_end: TextPos) -> Self {
        debug_assert!(column_end >= column_start);
        Self {
            line,
            column_start,
            column_end,
        }
    }

    /// Span a token starting at `pos` whose text is `len` bytes long.
    #[inline]
    pub fn from_token(pos: SourcePos, len: usize) -> Self {
        let len = TextPos::try_from(len).unwrap_or(TextPos::MAX);
        Self {
            line: pos.line,
            column_start: pos.column,
            column_end: pos.column.saturating_add(len),
        }
    }

    /// Whether this is the unknown sentinel.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.column_start, self.column_end)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.line, self.column_start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        let pos = Position::from_token(SourcePos::new(14, 2, 7), 3);
        assert_eq!(pos, Position::new(2, 7, 10));
        assert!(!pos.is_unknown());
    }

    #[test]
    fn test_unknown_sentinel() {
        assert!(Position::UNKNOWN.is_unknown());
        assert!(Position::default().is_unknown());
        assert_eq!(Position::UNKNOWN.to_string(), "<unknown>");
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 4, 9).to_string(), "3:4");
        assert_eq!(format!("{:?}", Position::new(3, 4, 9)), "3:4..9");
    }
}
