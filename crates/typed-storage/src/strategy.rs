//! Per-kind token shapes. Both sessions run the same check, so a value
//! written under one kind can only be read back under a compatible one.

use crate::error::SerializationError;
use crate::kind::ValueKind;
use crate::value::{Number, Value, non_finite};

/// Accepts `token` as an encoding of `kind`. Null is accepted for every kind;
/// whether it means a present value is up to the requested type.
pub(crate) fn check_token(kind: ValueKind, token: &Value) -> Result<(), SerializationError> {
    if token.is_null() || matches_kind(kind, token) {
        Ok(())
    } else {
        Err(SerializationError::Shape {
            expected: kind,
            found: token.type_name(),
        })
    }
}

fn matches_kind(kind: ValueKind, token: &Value) -> bool {
    if let Some(element) = kind.element() {
        return match token {
            Value::Array(elems) => elems.iter().all(|e| matches_scalar(element, e)),
            _ => false,
        };
    }
    match kind {
        ValueKind::ObjectArray => matches!(token, Value::Array(_)),
        ValueKind::Object => true,
        scalar => matches_scalar(scalar, token),
    }
}

fn matches_scalar(kind: ValueKind, token: &Value) -> bool {
    match kind {
        ValueKind::Boolean => matches!(token, Value::Bool(_)),
        ValueKind::Byte => integer_within(token, i8::MIN.into(), i8::MAX.into()),
        ValueKind::Short => integer_within(token, i16::MIN.into(), i16::MAX.into()),
        ValueKind::Int => integer_within(token, i32::MIN.into(), i32::MAX.into()),
        ValueKind::Long => integer_within(token, i64::MIN, i64::MAX),
        ValueKind::Float | ValueKind::Double => match token {
            Value::Number(_) => true,
            Value::String(s) => non_finite(s).is_some(),
            _ => false,
        },
        ValueKind::Char => match token {
            Value::String(s) => s.chars().count() == 1,
            _ => false,
        },
        ValueKind::String => matches!(token, Value::String(_)),
        _ => false,
    }
}

fn integer_within(token: &Value, min: i64, max: i64) -> bool {
    match token {
        Value::Number(n @ (Number::I64(_) | Number::U64(_))) => {
            n.as_i64().is_some_and(|i| (min..=max).contains(&i))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::Number(Number::I64(i))
    }

    #[test]
    fn integer_ranges() {
        assert!(check_token(ValueKind::Byte, &int(127)).is_ok());
        assert!(check_token(ValueKind::Byte, &int(128)).is_err());
        assert!(check_token(ValueKind::Short, &int(-32768)).is_ok());
        assert!(check_token(ValueKind::Int, &int(i64::from(i32::MAX) + 1)).is_err());
        assert!(check_token(ValueKind::Long, &Value::Number(Number::U64(u64::MAX))).is_err());
        assert!(check_token(ValueKind::Int, &Value::Number(Number::F64(1.0))).is_err());
    }

    #[test]
    fn floats_accept_non_finite_spellings() {
        assert!(check_token(ValueKind::Double, &Value::String("NaN".into())).is_ok());
        assert!(check_token(ValueKind::Float, &int(3)).is_ok());
        assert!(check_token(ValueKind::Double, &Value::String("nan".into())).is_err());
    }

    #[test]
    fn char_is_single_scalar_value() {
        assert!(check_token(ValueKind::Char, &Value::String("é".into())).is_ok());
        assert!(check_token(ValueKind::Char, &Value::String("ab".into())).is_err());
        assert!(check_token(ValueKind::Char, &Value::String(String::new())).is_err());
    }

    #[test]
    fn scalar_arrays_check_every_element() {
        let ok = Value::Array(vec![int(1), int(2)]);
        let mixed = Value::Array(vec![int(1), Value::String("2".into())]);
        assert!(check_token(ValueKind::IntArray, &ok).is_ok());
        assert!(matches!(
            check_token(ValueKind::IntArray, &mixed),
            Err(SerializationError::Shape { expected: ValueKind::IntArray, found: "array" })
        ));
        assert!(check_token(ValueKind::IntArray, &int(1)).is_err());
    }

    #[test]
    fn generic_kinds() {
        assert!(check_token(ValueKind::Object, &int(1)).is_ok());
        assert!(check_token(ValueKind::ObjectArray, &Value::Array(vec![])).is_ok());
        assert!(check_token(ValueKind::ObjectArray, &Value::Object(vec![])).is_err());
        assert!(check_token(ValueKind::Int, &Value::Null).is_ok());
    }
}
