//! rill tree-walking evaluator.
//!
//! Walks a parsed [`rill_types::construct::Program`] line by line against
//! one mutable variable environment. The `<<` operator's display-text
//! events are collected on the evaluator for the host to surface.

mod env;
mod error;
mod evaluator;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
