use crate::error::{CastError, CoercionError, Result};
use crate::types::{Kind, TypeSet};
use crate::value::Value;

/// Cast used on either side of an option. Behaves like the scalar
/// constructor of the target kind: it accepts any input it can make sense of.
pub type CastFn = fn(&Value) -> Result<Value, CastError>;

/// One acceptable primitive representation of a native kind.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOption {
    pub primitive: Kind,
    pub to_primitive: CastFn,
    pub to_native: CastFn,
}

impl ConvertOption {
    pub const fn new(primitive: Kind, to_primitive: CastFn, to_native: CastFn) -> Self {
        Self {
            primitive,
            to_primitive,
            to_native,
        }
    }
}

/// Converter for a single non-collection native kind.
///
/// `options` is ordered by preference. The first entry is used when the
/// caller puts no constraint on the primitive kinds, and it always maps the
/// native kind onto itself.
#[derive(Debug)]
pub struct AtomConverter {
    native: Kind,
    options: &'static [ConvertOption],
}

impl AtomConverter {
    pub const fn new(native: Kind, options: &'static [ConvertOption]) -> Self {
        assert!(!options.is_empty(), "atom converter needs at least one option");
        assert!(
            options[0].primitive as u8 == native as u8,
            "preferred option must be the native kind itself"
        );
        Self { native, options }
    }

    pub fn native(&self) -> Kind {
        self.native
    }

    pub fn options(&self) -> &'static [ConvertOption] {
        self.options
    }

    pub fn preferred(&self) -> &'static ConvertOption {
        &self.options[0]
    }

    /// Primitive kinds this converter can produce or accept.
    pub fn primitives(&self) -> TypeSet {
        self.options.iter().map(|o| o.primitive).collect()
    }

    /// First option, in declared order, whose primitive is allowed.
    pub fn negotiate(&self, types: &TypeSet) -> Option<&'static ConvertOption> {
        self.options.iter().find(|o| types.contains(o.primitive))
    }

    /// Narrow a native value to a primitive.
    ///
    /// Without `types` the preferred option is applied as-is; the value's kind
    /// is trusted, not checked.
    pub fn asprimitive(&self, value: &Value, types: Option<&TypeSet>) -> Result<Value> {
        let Some(types) = types else {
            return Ok((self.preferred().to_primitive)(value)?);
        };

        match self.negotiate(types) {
            Some(option) => {
                tracing::trace!(native = %self.native, primitive = %option.primitive, "asprimitive");
                Ok((option.to_primitive)(value)?)
            }
            None => {
                tracing::debug!(native = %self.native, allowed = %types, "no allowed primitive");
                Err(CoercionError::UnserializableValue {
                    native: self.native,
                    allowed: *types,
                })
            }
        }
    }

    /// Widen a primitive back into the native kind.
    ///
    /// With `types`, only the first allowed option is considered: if the
    /// value is not of that primitive kind the call fails, even when a later
    /// allowed option would have matched.
    pub fn asnative(&self, value: &Value, types: Option<&TypeSet>) -> Result<Value> {
        let Some(types) = types else {
            return Ok((self.preferred().to_native)(value)?);
        };

        let actual = value.kind();
        match self.negotiate(types) {
            Some(option) if option.primitive == actual => {
                tracing::trace!(native = %self.native, primitive = %actual, "asnative");
                Ok((option.to_native)(value)?)
            }
            Some(option) => {
                tracing::debug!(
                    native = %self.native,
                    expected = %option.primitive,
                    actual = %actual,
                    "primitive mismatch"
                );
                Err(CoercionError::PrimitiveMismatch {
                    native: self.native,
                    expected: option.primitive,
                    actual,
                })
            }
            None => {
                tracing::debug!(native = %self.native, allowed = %types, "no accepted primitive");
                Err(CoercionError::UnknownPrimitive {
                    native: self.native,
                    actual,
                    allowed: *types,
                })
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Casts
// ═══════════════════════════════════════════════════════════════

pub(crate) fn cast_string(value: &Value) -> Result<Value, CastError> {
    Ok(match value {
        Value::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    })
}

pub(crate) fn cast_boolean(value: &Value) -> Result<Value, CastError> {
    Ok(Value::Boolean(value.truthy()))
}

pub(crate) fn cast_integer(value: &Value) -> Result<Value, CastError> {
    match value {
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Boolean(b) => Ok(Value::Integer(*b as i64)),
        Value::Float(f) => truncate(*f).map(Value::Integer),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|source| CastError::InvalidInteger {
                text: s.clone(),
                source,
            }),
        other => Err(CastError::Unsupported {
            from: other.kind(),
            to: Kind::Integer,
        }),
    }
}

pub(crate) fn cast_float(value: &Value) -> Result<Value, CastError> {
    match value {
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Integer(i) => Ok(Value::Float(*i as f64)),
        Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|source| CastError::InvalidFloat {
                text: s.clone(),
                source,
            }),
        other => Err(CastError::Unsupported {
            from: other.kind(),
            to: Kind::Float,
        }),
    }
}

/// Drop the fractional part. `i64::MAX as f64` rounds up to 2^63, so the
/// upper bound is exclusive.
fn truncate(f: f64) -> Result<i64, CastError> {
    let t = f.trunc();
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Ok(t as i64)
    } else {
        Err(CastError::OutOfRange(f))
    }
}

// ═══════════════════════════════════════════════════════════════
//  Option tables
// ═══════════════════════════════════════════════════════════════

const STRING_OPTIONS: &[ConvertOption] =
    &[ConvertOption::new(Kind::String, cast_string, cast_string)];

const BOOLEAN_OPTIONS: &[ConvertOption] = &[
    ConvertOption::new(Kind::Boolean, cast_boolean, cast_boolean),
    ConvertOption::new(Kind::Integer, cast_integer, cast_boolean),
];

const INTEGER_OPTIONS: &[ConvertOption] = &[
    ConvertOption::new(Kind::Integer, cast_integer, cast_integer),
    ConvertOption::new(Kind::Float, cast_float, cast_integer),
    ConvertOption::new(Kind::String, cast_string, cast_integer),
];

const FLOAT_OPTIONS: &[ConvertOption] = &[
    ConvertOption::new(Kind::Float, cast_float, cast_float),
    ConvertOption::new(Kind::String, cast_string, cast_float),
];

pub static STRING: AtomConverter = AtomConverter::new(Kind::String, STRING_OPTIONS);
pub static BOOLEAN: AtomConverter = AtomConverter::new(Kind::Boolean, BOOLEAN_OPTIONS);
pub static INTEGER: AtomConverter = AtomConverter::new(Kind::Integer, INTEGER_OPTIONS);
pub static FLOAT: AtomConverter = AtomConverter::new(Kind::Float, FLOAT_OPTIONS);
