//! Runtime error types for the rill evaluator.

use rill_types::ValueError;
use thiserror::Error;

/// Evaluation error. Any of these halts the run at the offending line;
/// effects already produced by earlier lines stay observed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A variable was read before anything was assigned to it.
    #[error("variable '{0}' has no value")]
    UndefinedVariable(String),

    /// Two stored operands of an arithmetic operator held different kinds.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A literal combinator rejected its operand kinds.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A nested call produced no value where the enclosing operator
    /// needed one.
    #[error("a nested call produced no value where '{0}' needed one")]
    NoValue(&'static str),

    /// An operand shape the operator does not accept.
    #[error("unsupported operand: {0}")]
    Unsupported(String),

    /// Dispatch on a name outside the built-in registry.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// A call reached the evaluator with the wrong parameter count.
    #[error("'{function}' expects {expected} parameters, got {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
