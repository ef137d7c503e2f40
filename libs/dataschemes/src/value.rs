use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::types::Kind;

/// Value handed to or returned from the coercion engine.
///
/// The four atomic variants are both native field values and primitives.
/// The remaining variants can be represented but have no converter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),

    /// Opaque binary data.
    Bytes(Vec<u8>),
    Null,
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Runtime kind, used for registry lookup and primitive checks.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Bytes(_) => Kind::Bytes,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Zero, empty and null are false; everything else is true.
    pub fn truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            // NaN is not zero, so it stays true.
            Value::Float(f) => *f != 0.0,
            Value::Bytes(b) => !b.is_empty(),
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
        }
    }
}

/// Canonical text of a float: always round-trips through `str::parse` and
/// always keeps a decimal point or exponent (`42.0`, `1e100`, `NaN`, `inf`).
fn float_text(f: f64) -> String {
    format!("{f:?}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&float_text(*x)),
            Value::Bytes(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::Null => f.write_str("null"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Null => serializer.serialize_unit(),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(Value::from("cow").kind(), Kind::String);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from(42).kind(), Kind::Integer);
        assert_eq!(Value::from(42.0).kind(), Kind::Float);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::Map(vec![]).kind(), Kind::Map);
    }

    #[test]
    fn test_float_text() {
        assert_eq!(float_text(42.0), "42.0");
        assert_eq!(float_text(0.1), "0.1");
        assert_eq!(float_text(-2.5), "-2.5");
        assert_eq!(float_text(1e100), "1e100");
        assert_eq!(float_text(f64::NAN), "NaN");
        assert_eq!(float_text(f64::NEG_INFINITY), "-inf");
        for f in [0.1, 1.0 / 3.0, 1e-7, 123456789.125] {
            assert_eq!(float_text(f).parse::<f64>().unwrap(), f);
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::from(42).truthy());
        assert!(!Value::from(0).truthy());
        assert!(!Value::from(0.0).truthy());
        assert!(Value::from(f64::NAN).truthy());
        assert!(!Value::from("").truthy());
        assert!(Value::from("false").truthy());
        assert!(!Value::Null.truthy());
        assert!(!Value::Array(vec![]).truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("cow").to_string(), "cow");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-7).to_string(), "-7");
        assert_eq!(Value::from(42.0).to_string(), "42.0");
        assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "dead");
        let nested = Value::Array(vec![Value::from(1), Value::Null]);
        assert_eq!(nested.to_string(), "[1, null]");
    }

    #[test]
    fn test_serialize_as_plain_primitives() {
        assert_eq!(serde_json::to_string(&Value::from("cow")).unwrap(), r#""cow""#);
        assert_eq!(serde_json::to_string(&Value::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Value::from(42.5)).unwrap(), "42.5");
        assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        let map = Value::Map(vec![(Value::from("id"), Value::from(7))]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"id":7}"#);
    }
}
