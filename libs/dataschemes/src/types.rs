use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Runtime kind of a [`Value`](crate::Value).
///
/// The first four kinds are atomic and have a registered converter. The rest
/// can be carried around but are never coerced: asking to convert them, or to
/// convert into them, is a recognition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum Kind {
    String = 0,
    Boolean = 1,
    Integer = 2,
    Float = 3,
    Bytes = 4,
    Null = 5,
    Array = 6,
    Map = 7,
}

impl Kind {
    pub const ALL: [Kind; 8] = [
        Kind::String,
        Kind::Boolean,
        Kind::Integer,
        Kind::Float,
        Kind::Bytes,
        Kind::Null,
        Kind::Array,
        Kind::Map,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Bytes => "bytes",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }

    /// Scalar kinds that can be both a native field type and a primitive.
    pub fn is_atomic(self) -> bool {
        matches!(
            self,
            Kind::String | Kind::Boolean | Kind::Integer | Kind::Float
        )
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ConfigError;

    /// Accepts the canonical names plus the short spellings most formats use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(Kind::String),
            "boolean" | "bool" => Ok(Kind::Boolean),
            "integer" | "int" => Ok(Kind::Integer),
            "float" | "double" => Ok(Kind::Float),
            "bytes" => Ok(Kind::Bytes),
            "null" | "none" => Ok(Kind::Null),
            "array" | "list" => Ok(Kind::Array),
            "map" | "dict" => Ok(Kind::Map),
            _ => Err(ConfigError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for Kind {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Set of primitive kinds a caller is willing to accept.
///
/// Membership only: iteration always follows [`Kind::ALL`] order, never
/// insertion order. Negotiation order comes from the converter's option table.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Vec<Kind>")]
pub struct TypeSet(u8);

impl TypeSet {
    pub const EMPTY: TypeSet = TypeSet(0);

    /// Every atomic kind.
    pub const ATOMIC: TypeSet = TypeSet(0b1111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, kind: Kind) {
        self.0 |= kind.bit();
    }

    pub fn with(mut self, kind: Kind) -> Self {
        self.insert(kind);
        self
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Kind> + use<> {
        let set = *self;
        Kind::ALL.into_iter().filter(move |k| set.contains(*k))
    }
}

impl FromIterator<Kind> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl<const N: usize> From<[Kind; N]> for TypeSet {
    fn from(kinds: [Kind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<Vec<Kind>> for TypeSet {
    fn from(kinds: Vec<Kind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl FromStr for TypeSet {
    type Err = ConfigError;

    /// Comma-separated kind names, e.g. `"float, str"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.as_str())?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_aliases() {
        assert_eq!("str".parse::<Kind>().unwrap(), Kind::String);
        assert_eq!("INT".parse::<Kind>().unwrap(), Kind::Integer);
        assert_eq!(" bool ".parse::<Kind>().unwrap(), Kind::Boolean);
        assert_eq!("dict".parse::<Kind>().unwrap(), Kind::Map);
        assert!(matches!(
            "decimal".parse::<Kind>(),
            Err(ConfigError::UnknownKind(name)) if name == "decimal"
        ));
    }

    #[test]
    fn test_atomic_kinds() {
        let atomic: Vec<Kind> = Kind::ALL.into_iter().filter(|k| k.is_atomic()).collect();
        assert_eq!(
            atomic,
            vec![Kind::String, Kind::Boolean, Kind::Integer, Kind::Float]
        );
        assert_eq!(TypeSet::ATOMIC, atomic.into_iter().collect::<TypeSet>());
    }

    #[test]
    fn test_set_membership_ignores_insertion_order() {
        let a = TypeSet::from([Kind::String, Kind::Float]);
        let b = TypeSet::from([Kind::Float, Kind::String, Kind::Float]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(Kind::Float));
        assert!(!a.contains(Kind::Integer));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![Kind::String, Kind::Float]);
    }

    #[test]
    fn test_set_display() {
        let set: TypeSet = "float, str".parse().unwrap();
        assert_eq!(set.to_string(), "{string, float}");
        assert_eq!(TypeSet::EMPTY.to_string(), "{}");
        assert!("".parse::<TypeSet>().unwrap().is_empty());
    }

    #[test]
    fn test_set_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            types: TypeSet,
        }
        let holder: Holder = toml::from_str(r#"types = ["int", "float"]"#).unwrap();
        assert_eq!(holder.types, TypeSet::from([Kind::Integer, Kind::Float]));

        let bad = toml::from_str::<Holder>(r#"types = ["complex"]"#);
        assert!(bad.is_err());
    }
}
