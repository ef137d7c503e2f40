//! Coercion between native scalar values and wire primitives.
//!
//! A serialization format can only carry a handful of primitive kinds.
//! This crate narrows a native value into one of them ([`asprimitive`]) and
//! widens a primitive back into a native value ([`asnative`]), checking that
//! the primitive is the one a forward conversion would have produced.
//!
//! ```
//! use dataschemes::{asnative, asprimitive, Kind, TypeSet, Value};
//!
//! let types = TypeSet::from([Kind::Float, Kind::String]);
//! assert_eq!(asprimitive(&Value::Integer(42), Some(&types))?, Value::Float(42.0));
//! assert_eq!(asnative(Kind::Integer, &Value::Float(42.0), Some(&types))?, Value::Integer(42));
//! # Ok::<(), dataschemes::CoercionError>(())
//! ```

pub mod asnative;
pub mod asprimitive;
pub mod atom;
pub mod converter;
pub mod error;
pub mod profile;
pub mod types;
pub mod value;

pub use asnative::{Native, asnative, asnative_as};
pub use asprimitive::asprimitive;
pub use atom::{AtomConverter, ConvertOption};
pub use converter::{Converters, Registry};
pub use error::{CastError, CoercionError, ConfigError, Result};
pub use profile::{FormatProfile, Profiles};
pub use types::{Kind, TypeSet};
pub use value::Value;
