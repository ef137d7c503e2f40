use crate::converter::Registry;
use crate::error::{CastError, CoercionError, Result};
use crate::types::{Kind, TypeSet};
use crate::value::Value;

/// Convert a primitive back into a value of the `native` kind.
///
/// `types` are the primitive kinds the format could have produced. They let
/// the converter notice when a serialized value has a different kind than
/// it would have been given on the way out. An integer field that arrives
/// as a string may convert fine, yet it hints that the field should have
/// been declared as a string in the first place.
///
/// Negotiation failures are [`NativeType`](CoercionError::NativeType),
/// [`UnknownPrimitive`](CoercionError::UnknownPrimitive) and
/// [`PrimitiveMismatch`](CoercionError::PrimitiveMismatch). Malformed text
/// fails with [`Cast`](CoercionError::Cast).
pub fn asnative(native: Kind, value: &Value, types: Option<&TypeSet>) -> Result<Value> {
    Registry::builtin().bind(types).asnative(native, value)
}

/// Rust scalar types that a registered converter can produce.
pub trait Native: Sized {
    const KIND: Kind;

    fn from_value(value: Value) -> Option<Self>;
}

impl Native for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Native for bool {
    const KIND: Kind = Kind::Boolean;

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Native for i64 {
    const KIND: Kind = Kind::Integer;

    fn from_value(value: Value) -> Option<Self> {
        value.as_i64()
    }
}

impl Native for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: Value) -> Option<Self> {
        value.as_f64()
    }
}

/// [`asnative`] with the target kind taken from `T`.
pub fn asnative_as<T: Native>(value: &Value, types: Option<&TypeSet>) -> Result<T> {
    into_native(asnative(T::KIND, value, types)?)
}

fn into_native<T: Native>(native: Value) -> Result<T> {
    let from = native.kind();
    T::from_value(native).ok_or(CoercionError::Cast(CastError::Unsupported { from, to: T::KIND }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed() {
        let types = TypeSet::from([Kind::String]);
        assert_eq!(asnative_as::<i64>(&Value::from("42"), Some(&types)).unwrap(), 42);
        assert_eq!(asnative_as::<f64>(&Value::from("2.5"), Some(&types)).unwrap(), 2.5);
        assert_eq!(asnative_as::<String>(&Value::from(7), None).unwrap(), "7");
        assert!(asnative_as::<bool>(&Value::from(3), None).unwrap());
    }

    #[test]
    fn test_wrong_variant_is_a_cast_error() {
        let err = into_native::<i64>(Value::from("42")).unwrap_err();
        assert_eq!(
            err,
            CoercionError::Cast(CastError::Unsupported {
                from: Kind::String,
                to: Kind::Integer,
            })
        );
    }

    #[test]
    fn test_without_types_casts_anything_castable() {
        assert_eq!(asnative(Kind::Integer, &Value::from(42.7), None).unwrap(), Value::from(42));
        assert_eq!(asnative(Kind::Integer, &Value::from("42"), None).unwrap(), Value::from(42));
        assert_eq!(asnative(Kind::Float, &Value::from(true), None).unwrap(), Value::from(1.0));
        assert_eq!(asnative(Kind::Boolean, &Value::from(""), None).unwrap(), Value::from(false));
    }

    #[test]
    fn test_cast_failure_is_not_negotiation() {
        let err = asnative(Kind::Integer, &Value::from("cow"), None).unwrap_err();
        assert!(!err.is_negotiation());
        assert!(matches!(err, CoercionError::Cast(CastError::InvalidInteger { .. })));

        let err = asnative(Kind::Integer, &Value::Null, None).unwrap_err();
        assert_eq!(
            err,
            CoercionError::Cast(CastError::Unsupported {
                from: Kind::Null,
                to: Kind::Integer,
            })
        );
    }
}
