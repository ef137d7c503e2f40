use crate::converter::Registry;
use crate::error::Result;
use crate::types::TypeSet;
use crate::value::Value;

/// Convert a native value to a primitive.
///
/// Different formats can carry different sets of primitive kinds, so the
/// caller may restrict the result to `types`. Without a restriction the
/// value's preferred primitive is used.
///
/// Fails with [`UnrecognizedType`](crate::CoercionError::UnrecognizedType)
/// when the value's kind has no converter, and with
/// [`UnserializableValue`](crate::CoercionError::UnserializableValue) when
/// none of its primitives are allowed.
pub fn asprimitive(value: &Value, types: Option<&TypeSet>) -> Result<Value> {
    Registry::builtin().bind(types).asprimitive(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoercionError;
    use crate::types::Kind;

    #[test]
    fn test_preferred_without_types() {
        assert_eq!(asprimitive(&Value::from("cow"), None).unwrap(), Value::from("cow"));
        assert_eq!(asprimitive(&Value::from(true), None).unwrap(), Value::from(true));
        assert_eq!(asprimitive(&Value::from(42), None).unwrap(), Value::from(42));
        assert_eq!(asprimitive(&Value::from(42.0), None).unwrap(), Value::from(42.0));
    }

    #[test]
    fn test_empty_set_allows_nothing() {
        let err = asprimitive(&Value::from("cow"), Some(&TypeSet::EMPTY)).unwrap_err();
        assert_eq!(
            err,
            CoercionError::UnserializableValue {
                native: Kind::String,
                allowed: TypeSet::EMPTY,
            }
        );
    }

    #[test]
    fn test_collections_are_unrecognized() {
        let list = Value::Array(vec![Value::from(1)]);
        assert_eq!(
            asprimitive(&list, Some(&TypeSet::ATOMIC)),
            Err(CoercionError::UnrecognizedType(Kind::Array))
        );
    }
}
