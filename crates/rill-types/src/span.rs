use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of a token.
///
/// All values are 1-based for human-readable error messages. A rill
/// statement never crosses a line break (a quoted string split across
/// tokens still lives on one line), so a span is a single line plus a
/// column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            line,
            start_col,
            end_col,
        }
    }

    /// Create a zero-width span at a single position.
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, col)
    }

    /// Extend this span to cover another one on the same line.
    pub fn merge(self, other: Span) -> Span {
        Span::new(
            self.line.min(other.line),
            self.start_col.min(other.start_col),
            self.end_col.max(other.end_col),
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.start_col)
    }
}
