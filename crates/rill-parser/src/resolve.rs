//! Parameter and literal resolution.
//!
//! Resolution order for a non-leading token is fixed: declared variable,
//! then known function (parsed recursively as a nested call), then
//! literal. A variable therefore shadows a function of the same name, and
//! both shadow a token that merely looks like a literal.

use rill_lexer::{Cursor, Token};
use rill_types::construct::{Literal, Parameter};
use rill_types::{ErrorCode, SyntaxError, Value};

use crate::parser::Parser;

/// Strip the surrounding quote characters from a joined string literal.
fn strip_quotes(text: &str) -> String {
    text.trim_matches('"').to_string()
}

impl Parser {
    /// Resolve one parameter token into a [`Parameter`].
    pub(crate) fn resolve_parameter(
        &mut self,
        token: Token<'_>,
        cursor: &mut Cursor<'_>,
    ) -> Result<Parameter, SyntaxError> {
        if let Some(variable) = self.lookup_variable(token.text) {
            return Ok(Parameter::Variable(variable));
        }

        if let Some(function) = self.known_function(token.text) {
            let call = self.resolve_call(function, cursor)?;
            return Ok(Parameter::Call(call));
        }

        self.resolve_literal(token, cursor).map(Parameter::Literal)
    }

    /// Resolve a token as a literal.
    ///
    /// A digit-only token is a number. A token opening with `"` is a
    /// string; unless it also closes with `"`, further tokens are pulled
    /// from the cursor and rejoined with single spaces until one does,
    /// reconstructing the space-containing text the tokenizer split.
    /// Anything else is a syntax error.
    pub(crate) fn resolve_literal(
        &self,
        token: Token<'_>,
        cursor: &mut Cursor<'_>,
    ) -> Result<Literal, SyntaxError> {
        let text = token.text;

        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            let value = text.parse::<i64>().map_err(|_| {
                self.error(
                    ErrorCode::NUMBER_OUT_OF_RANGE,
                    format!("number '{text}' does not fit in 64 bits"),
                    token.span,
                )
            })?;
            return Ok(Literal {
                value: Value::Number(value),
            });
        }

        if text.starts_with('"') {
            // A lone `"` opens and closes itself: the empty string.
            if text.ends_with('"') {
                return Ok(Literal {
                    value: Value::String(strip_quotes(text)),
                });
            }

            let mut joined = text.to_string();
            let mut span = token.span;
            while let Some(next) = cursor.next() {
                joined.push(' ');
                joined.push_str(next.text);
                span = span.merge(next.span);

                if next.text.ends_with('"') {
                    return Ok(Literal {
                        value: Value::String(strip_quotes(&joined)),
                    });
                }
            }

            return Err(self.error(
                ErrorCode::UNTERMINATED_STRING,
                format!("string opened at column {} is never closed", token.span.start_col),
                span,
            ));
        }

        Err(self.error(
            ErrorCode::NOT_A_LITERAL,
            format!("'{text}' is not a literal"),
            token.span,
        ))
    }
}
