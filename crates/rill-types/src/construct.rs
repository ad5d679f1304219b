//! Construct nodes: the parsed representation of a rill program.
//!
//! A program is a flat list of function calls, one per source line. Call
//! parameters recurse through [`Parameter`], which is why nested calls on
//! a single line work.

use crate::Value;

/// A literal value, owned by its node and immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Value,
}

/// A reference by name into the evaluator's environment.
///
/// Holds no value itself; two `Variable`s with the same name denote the
/// same storage slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

/// A formal-parameter label on a [`Function`]. Describes arity only and is
/// never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A built-in operator descriptor: its name and formal parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Function {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Number of parameters a call to this function consumes.
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

/// A resolved actual parameter of a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Literal(Literal),
    Variable(Variable),
    Call(FunctionCall),
}

/// One resolved invocation of a function.
///
/// `parameters.len()` equals the function's arity; the parser enforces it
/// for every built-in, assignment included.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub function: Function,
    pub parameters: Vec<Parameter>,
}

/// A parsed program: one call per source line, evaluated top-to-bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub lines: Vec<FunctionCall>,
}
