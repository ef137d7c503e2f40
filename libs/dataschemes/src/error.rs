use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::types::{Kind, TypeSet};

/// Negotiation failure, or a cast failure passed through from a conversion
/// function.
///
/// The negotiation kinds never wrap one another. `Cast` is transparent so
/// callers see the underlying [`CastError`] unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// No converter is registered for the value's kind.
    #[error("type '{0}' cannot be converted to a primitive")]
    UnrecognizedType(Kind),

    /// No converter is registered for the requested native kind.
    #[error("type '{0}' cannot be constructed from a serialized value")]
    NativeType(Kind),

    /// The native kind is known but none of its primitives are allowed.
    #[error("could not convert '{native}' to any of these types: {allowed}")]
    UnserializableValue { native: Kind, allowed: TypeSet },

    /// The first allowed primitive disagrees with the value actually given.
    #[error("'{native}' would have been converted to '{expected}', but got a '{actual}' instead")]
    PrimitiveMismatch {
        native: Kind,
        expected: Kind,
        actual: Kind,
    },

    /// The native kind is known but cannot be built from any allowed primitive.
    #[error("no converter found to convert '{actual}' to '{native}' from any of: {allowed}")]
    UnknownPrimitive {
        native: Kind,
        actual: Kind,
        allowed: TypeSet,
    },

    #[error(transparent)]
    Cast(#[from] CastError),
}

impl CoercionError {
    /// True for the failures raised while choosing a primitive option, as
    /// opposed to a conversion function rejecting its input.
    pub fn is_negotiation(&self) -> bool {
        !matches!(self, CoercionError::Cast(_))
    }
}

/// Failure inside a single conversion function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("invalid integer literal {text:?}: {source}")]
    InvalidInteger { text: String, source: ParseIntError },

    #[error("invalid float literal {text:?}: {source}")]
    InvalidFloat { text: String, source: ParseFloatError },

    #[error("float {0} cannot be represented as an integer")]
    OutOfRange(f64),

    #[error("cannot build '{to}' from a '{from}'")]
    Unsupported { from: Kind, to: Kind },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown primitive kind '{0}'")]
    UnknownKind(String),

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("config read ('{path}'): {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("config parse ('{path}'): {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

pub type Result<T, E = CoercionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiation_split() {
        assert!(CoercionError::UnrecognizedType(Kind::Null).is_negotiation());
        assert!(
            CoercionError::PrimitiveMismatch {
                native: Kind::Integer,
                expected: Kind::Float,
                actual: Kind::String,
            }
            .is_negotiation()
        );
        let cast = CoercionError::from(CastError::OutOfRange(f64::NAN));
        assert!(!cast.is_negotiation());
    }

    #[test]
    fn test_messages_name_the_kinds() {
        let err = CoercionError::UnserializableValue {
            native: Kind::Integer,
            allowed: TypeSet::from([Kind::Map]),
        };
        assert_eq!(
            err.to_string(),
            "could not convert 'integer' to any of these types: {map}"
        );

        let err = CoercionError::PrimitiveMismatch {
            native: Kind::Integer,
            expected: Kind::Float,
            actual: Kind::String,
        };
        assert_eq!(
            err.to_string(),
            "'integer' would have been converted to 'float', but got a 'string' instead"
        );
    }

    #[test]
    fn test_cast_is_transparent() {
        let source = "x".parse::<i64>().unwrap_err();
        let cast = CastError::InvalidInteger {
            text: "x".into(),
            source,
        };
        let wrapped = CoercionError::from(cast.clone());
        assert_eq!(wrapped.to_string(), cast.to_string());
    }
}
