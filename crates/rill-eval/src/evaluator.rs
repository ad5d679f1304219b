//! Core evaluator: dispatches built-in operators over the parsed call
//! tree against one shared environment.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use rill_types::construct::{FunctionCall, Parameter, Program, Variable};
use rill_types::Value;

/// The two arithmetic operator families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            BinOp::Add => "added",
            BinOp::Sub => "subtracted",
        }
    }

    fn base_verb(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "subtract",
        }
    }

    /// `lhs op rhs` through the value combinators.
    fn apply(self, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
        let value = match self {
            BinOp::Add => lhs.add(rhs)?,
            BinOp::Sub => lhs.sub(rhs)?,
        };
        Ok(value)
    }
}

/// The rill evaluator.
///
/// Owns the single variable environment for a run and collects the
/// display-text events produced by `<<`; how those are surfaced to a user
/// is the host's business.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// The variable environment. One per run.
    pub env: Environment,
    /// Output events from `<<`, in order of production.
    pub output: Vec<String>,
}

impl Evaluator {
    /// Create an evaluator with an empty environment.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            output: Vec::new(),
        }
    }

    /// Execute a program, one line at a time, top to bottom.
    ///
    /// The first error halts the run; variable mutations and output
    /// events already produced stay observed.
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        for call in &program.lines {
            self.execute_call(call)?;
        }
        Ok(())
    }

    /// Execute one call, dispatching on the built-in's name.
    ///
    /// `=` and `<<` produce no value; the four arithmetic forms produce
    /// one, usable by an enclosing call.
    pub fn execute_call(&mut self, call: &FunctionCall) -> EvalResult<Option<Value>> {
        match call.function.name.as_str() {
            "=" => {
                let (target, source) = two(call)?;
                self.set_variable(target, source)?;
                Ok(None)
            }
            "<<" => {
                let value = one(call)?;
                self.stream_out(value)?;
                Ok(None)
            }
            "+" => {
                let (lhs, rhs) = two(call)?;
                self.binary(BinOp::Add, lhs, rhs).map(Some)
            }
            "+=" => {
                let (target, operand) = two(call)?;
                self.compound(BinOp::Add, target, operand).map(Some)
            }
            "-" => {
                let (lhs, rhs) = two(call)?;
                self.binary(BinOp::Sub, lhs, rhs).map(Some)
            }
            "-=" => {
                let (target, operand) = two(call)?;
                self.compound(BinOp::Sub, target, operand).map(Some)
            }
            name => Err(EvalError::UnknownFunction(name.to_string())),
        }
    }

    // ── Operators ─────────────────────────────────────────────────────────

    /// `=`: store the source's resolved value under the target's name.
    fn set_variable(&mut self, target: &Parameter, source: &Parameter) -> EvalResult<()> {
        let Parameter::Variable(variable) = target else {
            return Err(EvalError::Unsupported(
                "the target of '=' must be a variable".into(),
            ));
        };

        let value = match source {
            Parameter::Literal(literal) => literal.value.clone(),
            Parameter::Variable(src) => self.read(src)?.clone(),
            Parameter::Call(call) => self
                .execute_call(call)?
                .ok_or(EvalError::NoValue("="))?,
        };
        self.env.set(&variable.name, value);
        Ok(())
    }

    /// `<<`: push the resolved value's display text as one output event.
    fn stream_out(&mut self, value: &Parameter) -> EvalResult<()> {
        let text = match value {
            Parameter::Variable(variable) => self.read(variable)?.display(),
            Parameter::Literal(literal) => literal.value.display(),
            Parameter::Call(call) => self
                .execute_call(call)?
                .ok_or(EvalError::NoValue("<<"))?
                .display(),
        };
        self.output.push(text);
        Ok(())
    }

    /// `+` / `-` over the three operand shapes.
    ///
    /// When both operands are read from the store (variable-variable and
    /// variable-call) the kinds must match. A literal operand instead
    /// delegates to the literal's own combinator, which makes the literal
    /// the receiver: `+ x 1` computes `1 + x`, and `- x 1` computes
    /// `1 - x` when `x` holds a number, while a stored string keeps its
    /// place on the left. The delegation also skips the same-kind check,
    /// so a mixed pair surfaces the combinator's own error.
    fn binary(&mut self, op: BinOp, lhs: &Parameter, rhs: &Parameter) -> EvalResult<Value> {
        match lhs {
            Parameter::Variable(a) => match rhs {
                Parameter::Variable(b) => {
                    let x = self.read(a)?.clone();
                    let y = self.read(b)?;
                    same_kind(op, &x, y)?;
                    op.apply(&x, y)
                }
                Parameter::Call(call) => {
                    // The nested call runs before the left operand is
                    // read; a nested `+=`/`-=` on the same variable is
                    // observed.
                    let y = self
                        .execute_call(call)?
                        .ok_or(EvalError::NoValue(op.symbol()))?;
                    let x = self.read(a)?;
                    same_kind(op, x, &y)?;
                    op.apply(x, &y)
                }
                Parameter::Literal(literal) => {
                    let stored = self.read(a)?;
                    match op {
                        BinOp::Add => op.apply(&literal.value, stored),
                        BinOp::Sub => match stored {
                            Value::Number(_) => op.apply(&literal.value, stored),
                            Value::String(_) => op.apply(stored, &literal.value),
                        },
                    }
                }
            },
            Parameter::Literal(a) => match rhs {
                Parameter::Literal(b) => op.apply(&a.value, &b.value),
                Parameter::Variable(b) => {
                    let y = self.read(b)?;
                    op.apply(&a.value, y)
                }
                Parameter::Call(_) => Err(EvalError::Unsupported(format!(
                    "cannot {} a literal and a nested call",
                    op.base_verb()
                ))),
            },
            Parameter::Call(_) => Err(EvalError::Unsupported(format!(
                "the left operand of '{}' must be a variable or a literal",
                op.symbol()
            ))),
        }
    }

    /// `+=` / `-=`: compute with the target as the left operand, store
    /// the result back, and yield it as the call's own value.
    fn compound(&mut self, op: BinOp, target: &Parameter, operand: &Parameter) -> EvalResult<Value> {
        let Parameter::Variable(variable) = target else {
            return Err(EvalError::Unsupported(format!(
                "the target of '{}=' must be a variable",
                op.symbol()
            )));
        };
        let result = self.binary(op, target, operand)?;
        self.env.set(&variable.name, result.clone());
        Ok(result)
    }

    // ── Environment access ────────────────────────────────────────────────

    /// Read a variable, failing if it was never assigned.
    fn read(&self, variable: &Variable) -> EvalResult<&Value> {
        self.env
            .get(&variable.name)
            .ok_or_else(|| EvalError::UndefinedVariable(variable.name.clone()))
    }
}

// ── Parameter shape helpers ───────────────────────────────────────────────

/// Destructure a one-parameter call.
fn one(call: &FunctionCall) -> EvalResult<&Parameter> {
    match call.parameters.as_slice() {
        [p] => Ok(p),
        other => Err(arity(call, 1, other.len())),
    }
}

/// Destructure a two-parameter call.
fn two(call: &FunctionCall) -> EvalResult<(&Parameter, &Parameter)> {
    match call.parameters.as_slice() {
        [a, b] => Ok((a, b)),
        other => Err(arity(call, 2, other.len())),
    }
}

fn arity(call: &FunctionCall, expected: usize, found: usize) -> EvalError {
    EvalError::Arity {
        function: call.function.name.clone(),
        expected,
        found,
    }
}

/// Both stored operands must hold the same kind.
fn same_kind(op: BinOp, a: &Value, b: &Value) -> EvalResult<()> {
    if std::mem::discriminant(a) == std::mem::discriminant(b) {
        Ok(())
    } else {
        Err(EvalError::TypeMismatch(format!(
            "variables must hold the same type to be {}, got {} and {}",
            op.verb(),
            a.type_name(),
            b.type_name()
        )))
    }
}
