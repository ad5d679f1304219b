//! Parser tests.
//!
//! Covers: literal resolution (numbers, single- and multi-token strings),
//! the variable → function → literal resolution order, the assignment
//! special case, nested calls over a shared cursor, every syntax-error
//! code, and re-parse determinism.

use rill_parser::Parser;
use rill_types::construct::{Parameter, Program};
use rill_types::{ErrorCode, SyntaxError, Value};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Parse source text, panicking on a syntax error.
fn parse(source: &str) -> Program {
    Parser::new()
        .parse(source)
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
}

/// Parse source text expected to fail, returning the error.
fn parse_err(source: &str) -> SyntaxError {
    Parser::new()
        .parse(source)
        .expect_err("expected a syntax error")
}

/// The literal value of a call's `idx`-th parameter.
fn literal_at(program: &Program, line: usize, idx: usize) -> Value {
    match &program.lines[line].parameters[idx] {
        Parameter::Literal(l) => l.value.clone(),
        other => panic!("expected a literal parameter, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn digit_token_resolves_to_number() {
    let program = parse("<< 42");
    assert_eq!(literal_at(&program, 0, 0), Value::Number(42));
}

#[test]
fn quoted_single_token_resolves_to_string() {
    let program = parse("<< \"hi\"");
    assert_eq!(literal_at(&program, 0, 0), Value::String("hi".into()));
}

#[test]
fn quoted_tokens_rejoin_with_single_spaces() {
    let program = parse("<< \"hi there world\"");
    assert_eq!(
        literal_at(&program, 0, 0),
        Value::String("hi there world".into())
    );
}

#[test]
fn empty_quoted_string() {
    let program = parse("<< \"\"");
    assert_eq!(literal_at(&program, 0, 0), Value::String(String::new()));
}

#[test]
fn lone_quote_token_is_the_empty_string() {
    // A single `"` opens and closes itself.
    let program = parse("<< \"");
    assert_eq!(literal_at(&program, 0, 0), Value::String(String::new()));
}

#[test]
fn string_consumption_leaves_following_parameters_intact() {
    let program = parse("+ \"a b\" \"c\"");
    assert_eq!(literal_at(&program, 0, 0), Value::String("a b".into()));
    assert_eq!(literal_at(&program, 0, 1), Value::String("c".into()));
}

// ─────────────────────────────────────────────────────────────────────
// Resolution order
// ─────────────────────────────────────────────────────────────────────

#[test]
fn assignment_declares_its_target() {
    let program = parse("= x 1\n<< x");
    match &program.lines[1].parameters[0] {
        Parameter::Variable(v) => assert_eq!(v.name, "x"),
        other => panic!("expected a variable parameter, got {other:?}"),
    }
}

#[test]
fn assignment_target_is_declared_before_the_source_resolves() {
    // Self-reference parses; reading before assignment is the
    // evaluator's problem.
    let program = parse("= x x");
    match &program.lines[0].parameters[1] {
        Parameter::Variable(v) => assert_eq!(v.name, "x"),
        other => panic!("expected a variable parameter, got {other:?}"),
    }
}

#[test]
fn variable_shadows_function_of_the_same_name() {
    let program = parse("= + 1\n<< +");
    match &program.lines[1].parameters[0] {
        Parameter::Variable(v) => assert_eq!(v.name, "+"),
        other => panic!("expected a variable parameter, got {other:?}"),
    }
}

#[test]
fn variable_shadows_numeric_literal() {
    let program = parse("= 5 1\n<< 5");
    match &program.lines[1].parameters[0] {
        Parameter::Variable(v) => assert_eq!(v.name, "5"),
        other => panic!("expected a variable parameter, got {other:?}"),
    }
}

#[test]
fn function_token_becomes_a_nested_call() {
    let program = parse("= x 1\n= y + x 2");
    match &program.lines[1].parameters[1] {
        Parameter::Call(call) => {
            assert_eq!(call.function.name, "+");
            assert!(matches!(&call.parameters[0], Parameter::Variable(v) if v.name == "x"));
            assert!(matches!(
                &call.parameters[1],
                Parameter::Literal(l) if l.value == Value::Number(2)
            ));
        }
        other => panic!("expected a nested call, got {other:?}"),
    }
}

#[test]
fn nested_calls_share_one_cursor() {
    // The inner `+` consumes two tokens; the outer `+` still finds its
    // second parameter after them.
    let program = parse("+ + 1 2 3");
    let outer = &program.lines[0];
    assert_eq!(outer.parameters.len(), 2);
    assert!(matches!(&outer.parameters[0], Parameter::Call(_)));
    assert!(matches!(
        &outer.parameters[1],
        Parameter::Literal(l) if l.value == Value::Number(3)
    ));
}

#[test]
fn leading_token_resolves_only_through_the_function_table() {
    // Declared variables are not callable.
    let err = parse_err("= x 1\nx 2");
    assert_eq!(err.code, ErrorCode::UNKNOWN_FUNCTION);
    assert_eq!(err.span.line, 2);
}

// ─────────────────────────────────────────────────────────────────────
// Syntax errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn unknown_leading_token() {
    let err = parse_err("modify 2");
    assert_eq!(err.code, ErrorCode::UNKNOWN_FUNCTION);
    assert_eq!(err.source_line, "modify 2");
    assert_eq!(err.span.line, 1);
}

#[test]
fn empty_line_is_rejected() {
    let err = parse_err("= x 1\n\n<< x");
    assert_eq!(err.code, ErrorCode::UNKNOWN_FUNCTION);
    assert_eq!(err.span.line, 2);
    assert_eq!(err.source_line, "");
}

#[test]
fn unresolvable_parameter_token() {
    let err = parse_err("<< nope");
    assert_eq!(err.code, ErrorCode::NOT_A_LITERAL);
}

#[test]
fn mixed_digit_and_letter_token_is_not_a_literal() {
    let err = parse_err("<< 12ab");
    assert_eq!(err.code, ErrorCode::NOT_A_LITERAL);
}

#[test]
fn unterminated_string() {
    let err = parse_err("<< \"never closed");
    assert_eq!(err.code, ErrorCode::UNTERMINATED_STRING);
}

#[test]
fn missing_parameter() {
    let err = parse_err("+ 1");
    assert_eq!(err.code, ErrorCode::MISSING_PARAMETER);
    assert!(err.message.contains("to_add_b"));
}

#[test]
fn missing_assignment_source() {
    let err = parse_err("= x");
    assert_eq!(err.code, ErrorCode::MISSING_PARAMETER);
}

#[test]
fn number_too_large_for_sixty_four_bits() {
    let err = parse_err("<< 99999999999999999999");
    assert_eq!(err.code, ErrorCode::NUMBER_OUT_OF_RANGE);
}

#[test]
fn first_error_aborts_the_whole_parse() {
    // Line 1 is fine, line 2 is not; no partial program survives.
    let result = Parser::new().parse("= x 1\nbroken 2\n= y 2");
    assert!(result.is_err());
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn reparsing_identical_source_yields_identical_programs() {
    let source = "= x 2\n= y + x 3\n<< \"total is\"\n<< += y 1";
    let first = parse(source);
    for _ in 0..100 {
        assert_eq!(parse(source), first);
    }
}
