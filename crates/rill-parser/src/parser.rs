//! Core parser state: the built-in registry, the symbol tables, and the
//! per-line call resolution loop.

use rill_lexer::{Cursor, Token};
use rill_types::construct::{Argument, Function, FunctionCall, Parameter, Program, Variable};
use rill_types::{ErrorCode, Span, SyntaxError};
use std::collections::BTreeMap;

/// The six built-in operators, keyed by name.
fn builtin_functions() -> BTreeMap<String, Function> {
    let defs: &[(&str, &[&str])] = &[
        ("=", &["to_set", "set_to"]),
        ("<<", &["to_stream"]),
        ("+", &["to_add_a", "to_add_b"]),
        ("+=", &["var", "to_add"]),
        ("-", &["to_sub_a", "to_sub_b"]),
        ("-=", &["var", "to_sub"]),
    ];
    defs.iter()
        .map(|(name, args)| {
            let arguments = args.iter().map(|a| Argument::new(*a)).collect();
            ((*name).to_string(), Function::new(*name, arguments))
        })
        .collect()
}

/// The rill parser.
///
/// Owns the two symbol tables that make identifier resolution
/// order-sensitive: functions (seeded with the built-ins) and variables
/// (filled as assignment targets appear). Both live for one parse pass;
/// the evaluator never sees them.
pub struct Parser {
    /// Known functions, built-ins included.
    functions: BTreeMap<String, Function>,
    /// Variables declared so far, by first assignment.
    variables: BTreeMap<String, Variable>,
    /// Text of the line currently being parsed, for error context.
    source_line: String,
}

impl Parser {
    /// Create a parser seeded with the built-in registry.
    pub fn new() -> Self {
        Self {
            functions: builtin_functions(),
            variables: BTreeMap::new(),
            source_line: String::new(),
        }
    }

    /// Parse full source text into a [`Program`], one call per line.
    ///
    /// The first syntax error aborts the whole parse; there is no
    /// recovery and no partial program.
    pub fn parse(&mut self, source: &str) -> Result<Program, SyntaxError> {
        let mut program = Program::default();

        for (idx, line) in source.split('\n').enumerate() {
            let line_number = idx as u32 + 1;
            self.source_line = line.to_string();

            let mut cursor = Cursor::new(line, line_number);
            let leading = cursor
                .next()
                .expect("a line always yields at least one token");
            let function = self.lookup_function(leading)?;
            program.lines.push(self.resolve_call(function, &mut cursor)?);
        }

        Ok(program)
    }

    // ── Function Resolution ───────────────────────────────────────────────────

    /// Resolve a token as a function name, built-in or registered.
    pub(crate) fn lookup_function(&self, token: Token<'_>) -> Result<Function, SyntaxError> {
        self.functions.get(token.text).cloned().ok_or_else(|| {
            self.error(
                ErrorCode::UNKNOWN_FUNCTION,
                format!("function '{}' is not defined", token.text),
                token.span,
            )
        })
    }

    /// Look up a declared variable, if any.
    pub(crate) fn lookup_variable(&self, name: &str) -> Option<Variable> {
        self.variables.get(name).cloned()
    }

    /// Look up a known function without erroring, if any.
    pub(crate) fn known_function(&self, name: &str) -> Option<Function> {
        self.functions.get(name).cloned()
    }

    /// Resolve one call: pull a token per formal argument from the shared
    /// cursor and resolve each in turn. Nested calls recurse through
    /// [`Parser::resolve_parameter`] and consume from the same cursor.
    pub(crate) fn resolve_call(
        &mut self,
        function: Function,
        cursor: &mut Cursor<'_>,
    ) -> Result<FunctionCall, SyntaxError> {
        if function.name == "=" {
            return self.resolve_assignment(function, cursor);
        }

        let mut parameters = Vec::with_capacity(function.arity());
        for argument in &function.arguments {
            let token = self.next_parameter_token(&function, argument, cursor)?;
            parameters.push(self.resolve_parameter(token, cursor)?);
        }

        Ok(FunctionCall {
            function,
            parameters,
        })
    }

    /// The `=` special case: its first parameter token is declared as a
    /// variable before the second parameter is resolved, so the source
    /// side may mention the target by name. Reading it before assignment
    /// is a runtime failure, not a parse failure.
    fn resolve_assignment(
        &mut self,
        function: Function,
        cursor: &mut Cursor<'_>,
    ) -> Result<FunctionCall, SyntaxError> {
        let target = self.next_parameter_token(&function, &function.arguments[0], cursor)?;
        let variable = Variable {
            name: target.text.to_string(),
        };
        self.variables.insert(variable.name.clone(), variable.clone());

        let token = self.next_parameter_token(&function, &function.arguments[1], cursor)?;
        let set_to = self.resolve_parameter(token, cursor)?;

        Ok(FunctionCall {
            function,
            parameters: vec![Parameter::Variable(variable), set_to],
        })
    }

    /// Pull the next token for a formal argument, or error if the line is
    /// exhausted.
    fn next_parameter_token<'src>(
        &self,
        function: &Function,
        argument: &Argument,
        cursor: &mut Cursor<'src>,
    ) -> Result<Token<'src>, SyntaxError> {
        cursor.next().ok_or_else(|| {
            self.error(
                ErrorCode::MISSING_PARAMETER,
                format!(
                    "'{}' is missing its '{}' parameter",
                    function.name, argument.name
                ),
                cursor.last_span(),
            )
        })
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Build a syntax error carrying the current line's text.
    pub(crate) fn error(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> SyntaxError {
        SyntaxError::new(code, message, span, self.source_line.clone())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
