//! Per-line token cursor.
//!
//! One source line is split on every single ASCII space. Repeated spaces
//! are not collapsed, so `a  b` yields three tokens with an empty one in
//! the middle, and a line always yields at least one token (an empty line
//! yields one empty token). The cursor is forward-only and is shared, by
//! mutable borrow, across the parser's recursive resolution calls: a
//! nested call or a multi-token quoted string advances the same cursor its
//! siblings read from.

use crate::token::Token;
use rill_types::Span;

/// Split one line into its space-delimited tokens.
///
/// Columns are 1-based byte offsets into the line.
fn split_line(line: &str, line_number: u32) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0usize;

    for (idx, byte) in line.bytes().enumerate() {
        if byte == b' ' {
            tokens.push(token_at(line, line_number, start, idx));
            start = idx + 1;
        }
    }
    tokens.push(token_at(line, line_number, start, line.len()));

    tokens
}

fn token_at(line: &str, line_number: u32, start: usize, end: usize) -> Token<'_> {
    let span = if start == end {
        Span::point(line_number, start as u32 + 1)
    } else {
        Span::new(line_number, start as u32 + 1, end as u32)
    };
    Token::new(&line[start..end], span)
}

/// Forward-only token cursor over one source line.
#[derive(Debug)]
pub struct Cursor<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Tokenize `line` and position the cursor at its first token.
    pub fn new(line: &'src str, line_number: u32) -> Self {
        Self {
            tokens: split_line(line, line_number),
            pos: 0,
        }
    }

    /// Returns `true` once every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the most recently consumed token, or of the line start if
    /// nothing has been consumed yet.
    pub fn last_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(self.tokens.first().map(|t| t.span.line).unwrap_or(1), 1)
        }
    }
}

impl<'src> Iterator for Cursor<'src> {
    type Item = Token<'src>;

    /// Consume and return the next token, or `None` once exhausted.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}
