use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric syntax-error code (E100–E199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// The leading token of a line does not name a known function.
    pub const UNKNOWN_FUNCTION: Self = Self(100);
    /// A parameter token matched neither a declaration nor a literal rule.
    pub const NOT_A_LITERAL: Self = Self(101);
    /// A quoted string ran out of tokens before a closing quote.
    pub const UNTERMINATED_STRING: Self = Self(102);
    /// The line ended while a function still expected a parameter.
    pub const MISSING_PARAMETER: Self = Self(103);
    /// A digit-only token does not fit in a 64-bit number.
    pub const NUMBER_OUT_OF_RANGE: Self = Self(104);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured rill syntax error.
///
/// Produced by the parser; parsing aborts on the first one, so a failed
/// parse yields exactly one of these and no program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxError {
    /// Error code (e.g., E100).
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Source location of the offending token.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.span, self.code, self.message)
    }
}

impl std::error::Error for SyntaxError {}
