//! Shared types for the rill interpreter.
//!
//! This crate defines the value model, the construct nodes produced by the
//! parser, source spans, and the structured syntax error type used across
//! the pipeline crates.

pub mod construct;
mod error;
mod span;
mod value;

pub use error::{ErrorCode, SyntaxError};
pub use span::Span;
pub use value::{Value, ValueError};
