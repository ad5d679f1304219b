//! The rill value model: two primitive kinds and their combinators.

use thiserror::Error;

/// A primitive rill value.
///
/// Exactly two kinds exist. Every combinator matches exhaustively, so a
/// new kind cannot be added without updating each operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer-backed number.
    Number(i64),
    /// Text-backed string.
    String(String),
}

/// Error from a value combinator applied to mismatched kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("cannot add {lhs} and {rhs}")]
    Add {
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("cannot subtract {rhs} from {lhs}")]
    Sub {
        lhs: &'static str,
        rhs: &'static str,
    },
}

impl Value {
    /// The kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Display text: decimal digits for a number, raw text for a string.
    pub fn display(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    /// Combine `self + other`.
    ///
    /// Numbers add, strings concatenate (`self` first). Mixed kinds are
    /// rejected.
    pub fn add(&self, other: &Value) -> Result<Value, ValueError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
            (lhs, rhs) => Err(ValueError::Add {
                lhs: lhs.type_name(),
                rhs: rhs.type_name(),
            }),
        }
    }

    /// Combine `self - other`.
    ///
    /// Numbers subtract. For strings, every occurrence of `other`'s text
    /// is removed from `self`'s text. Mixed kinds are rejected.
    pub fn sub(&self, other: &Value) -> Result<Value, ValueError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a.replace(b.as_str(), ""))),
            (lhs, rhs) => Err(ValueError::Sub {
                lhs: lhs.type_name(),
                rhs: rhs.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_round_trip() {
        for n in [0, 1, 42, 1000, -7, i64::MAX] {
            let shown = Value::Number(n).display();
            assert_eq!(shown.parse::<i64>().unwrap(), n);
        }
    }

    #[test]
    fn test_string_display_is_raw_text() {
        assert_eq!(Value::String("hi there".into()).display(), "hi there");
        assert_eq!(Value::String(String::new()).display(), "");
    }

    #[test]
    fn test_add_numbers() {
        let sum = Value::Number(2).add(&Value::Number(3)).unwrap();
        assert_eq!(sum, Value::Number(5));
    }

    #[test]
    fn test_add_strings_concatenates_receiver_first() {
        let joined = Value::String("ab".into())
            .add(&Value::String("cd".into()))
            .unwrap();
        assert_eq!(joined, Value::String("abcd".into()));
    }

    #[test]
    fn test_add_mixed_kinds_rejected() {
        let err = Value::Number(1)
            .add(&Value::String("x".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot add number and string");
    }

    #[test]
    fn test_sub_numbers() {
        let diff = Value::Number(2).sub(&Value::Number(5)).unwrap();
        assert_eq!(diff, Value::Number(-3));
    }

    #[test]
    fn test_sub_strings_removes_every_occurrence() {
        let out = Value::String("hello".into())
            .sub(&Value::String("l".into()))
            .unwrap();
        assert_eq!(out, Value::String("heo".into()));

        let out = Value::String("aabbaab".into())
            .sub(&Value::String("ab".into()))
            .unwrap();
        assert_eq!(out, Value::String("aba".into()));
    }

    #[test]
    fn test_sub_mixed_kinds_rejected() {
        let err = Value::String("x".into())
            .sub(&Value::Number(1))
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot subtract number from string");
    }
}
