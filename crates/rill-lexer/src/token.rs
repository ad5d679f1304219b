//! Token type for the rill tokenizer.

use rill_types::Span;

/// A single whitespace-delimited token from one source line.
///
/// Tokens borrow from the source line; the empty string is a valid token
/// (two adjacent spaces produce one between them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token text, quotes and all.
    pub text: &'src str,
    /// Source location.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(text: &'src str, span: Span) -> Self {
        Self { text, span }
    }
}
