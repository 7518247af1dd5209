//! Conversions between JSON values and the typed operands
//!
//! JSON carries no static types, so everything coming through here is
//! checked before it reaches the dispatcher.

use serde_json::{Number, Value};

use crate::error::Error;
use crate::sequence::NumericSequence;
use crate::token::OperationToken;

const INFINITY: &str = "Inf";
const NEG_INFINITY: &str = "-Inf";
const NAN: &str = "NaN";

fn to_number(operand: &str, value: &Value) -> Result<f64, Error> {
    let invalid = |reason: &str| Error::InvalidArgument {
        value: value.clone(),
        operand: operand.into(),
        reason: reason.into(),
    };
    match value {
        Value::Number(num) => num
            .as_f64()
            .ok_or_else(|| invalid("number cannot be represented as a float")),
        Value::String(s) => match s.as_str() {
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            _ => Err(invalid("non-numeric argument to binary operator")),
        },
        _ => Err(invalid("non-numeric argument to binary operator")),
    }
}

/// Parse an operand into a numeric sequence
///
/// A bare number is a sequence of length one.
///
/// ```rust
/// use serde_json::json;
/// use vecop::value::to_sequence;
///
/// assert_eq!(to_sequence("x", &json!(3)).unwrap().as_slice(), &[3.0]);
/// assert_eq!(to_sequence("x", &json!([1, 2.5])).unwrap().as_slice(), &[1.0, 2.5]);
/// assert!(to_sequence("x", &json!(["a"])).is_err());
/// ```
pub fn to_sequence(operand: &str, value: &Value) -> Result<NumericSequence<f64>, Error> {
    match value {
        Value::Array(items) => {
            let values = items
                .iter()
                .map(|item| to_number(operand, item))
                .collect::<Result<Vec<f64>, Error>>()?;
            NumericSequence::named(operand, values)
        }
        Value::Number(_) => to_number(operand, value).map(NumericSequence::scalar),
        _ => Err(Error::InvalidArgument {
            value: value.clone(),
            operand: operand.into(),
            reason: "expected a number or an array of numbers".into(),
        }),
    }
}

/// Parse an operation token
///
/// A string is a single-element token. `null` stands for an omitted
/// argument and yields the default token.
pub fn to_token(value: &Value) -> Result<OperationToken, Error> {
    let invalid = |value: &Value| Error::InvalidArgument {
        value: value.clone(),
        operand: "type".into(),
        reason: "operation names must be strings".into(),
    };
    match value {
        Value::Null => Ok(OperationToken::default()),
        Value::String(name) => Ok(OperationToken::from(name.as_str())),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                _ => Err(invalid(item)),
            })
            .collect::<Result<Vec<String>, Error>>()
            .map(OperationToken::from),
        _ => Err(invalid(value)),
    }
}

/// Render a single result value
///
/// Non-finite floats have no JSON number form, so they become strings.
pub fn from_number(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| {
            let repr = if value.is_nan() {
                NAN
            } else if value.is_sign_positive() {
                INFINITY
            } else {
                NEG_INFINITY
            };
            Value::String(repr.into())
        })
}

pub fn from_sequence(values: &[f64]) -> Value {
    Value::Array(values.iter().copied().map(from_number).collect())
}

#[cfg(test)]
mod test_value {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_numeric_operands() {
        let bad = [
            json!(["1"]),
            json!([true]),
            json!([null]),
            json!([[1]]),
            json!([{"a": 1}]),
            json!("2021-01-01"),
            json!(null),
            json!({"a": 1}),
        ];
        bad.iter().for_each(|v| match to_sequence("x", v) {
            Err(Error::InvalidArgument { operand, .. }) => assert_eq!(operand, "x"),
            other => panic!("expected invalid argument for {:?}, got {:?}", v, other),
        });
    }

    #[test]
    fn test_empty_operand() {
        match to_sequence("y", &json!([])) {
            Err(Error::EmptySequence { operand }) => assert_eq!(operand, "y"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_special_floats_parse() {
        let seq = to_sequence("x", &json!(["Inf", "-Inf", "NaN", 1])).unwrap();
        assert_eq!(seq[0], f64::INFINITY);
        assert_eq!(seq[1], f64::NEG_INFINITY);
        assert!(seq[2].is_nan());
        assert_eq!(seq[3], 1.0);
    }

    #[test]
    fn test_token_shapes() {
        assert_eq!(to_token(&json!("add")).unwrap().names(), &["add".to_string()]);
        assert_eq!(to_token(&json!(["a", "b"])).unwrap().len(), 2);
        assert!(to_token(&json!([])).unwrap().is_empty());
        assert_eq!(to_token(&json!(null)).unwrap(), OperationToken::default());
        assert!(to_token(&json!(1)).is_err());
        assert!(to_token(&json!(["add", 1])).is_err());
    }

    #[test]
    fn test_from_sequence() {
        assert_eq!(
            from_sequence(&[1.5, f64::INFINITY, f64::NEG_INFINITY, f64::NAN]),
            json!([1.5, "Inf", "-Inf", "NaN"])
        );
    }
}
