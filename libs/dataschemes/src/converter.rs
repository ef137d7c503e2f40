use crate::atom::{self, AtomConverter};
use crate::error::{CoercionError, Result};
use crate::types::{Kind, TypeSet};
use crate::value::Value;

static BUILTIN_CONVERTERS: [&AtomConverter; 4] =
    [&atom::STRING, &atom::BOOLEAN, &atom::INTEGER, &atom::FLOAT];

static BUILTIN: Registry = Registry::new(&BUILTIN_CONVERTERS);

/// Ordered native kind → converter table.
///
/// Built once and never mutated. Lookup returns the first converter whose
/// native kind matches, so iteration order decides ties.
#[derive(Debug)]
pub struct Registry {
    converters: &'static [&'static AtomConverter],
}

impl Registry {
    pub const fn new(converters: &'static [&'static AtomConverter]) -> Self {
        Self { converters }
    }

    /// String, boolean, integer, float, in that order.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn lookup(&self, kind: Kind) -> Option<&'static AtomConverter> {
        self.converters.iter().copied().find(|c| c.native() == kind)
    }

    pub fn natives(&self) -> impl Iterator<Item = Kind> + '_ {
        self.converters.iter().map(|c| c.native())
    }

    /// Fix the allowed primitive kinds for a batch of conversions.
    pub fn bind(&self, types: Option<&TypeSet>) -> Converters<'_> {
        Converters {
            registry: self,
            types: types.copied(),
        }
    }
}

/// Registry view with the allowed primitive kinds fixed.
///
/// A format that can only carry some kinds binds once and reuses the view
/// for every field it writes or reads.
#[derive(Debug, Clone, Copy)]
pub struct Converters<'r> {
    registry: &'r Registry,
    types: Option<TypeSet>,
}

impl Converters<'_> {
    pub fn types(&self) -> Option<&TypeSet> {
        self.types.as_ref()
    }

    /// Converter chosen by the value's own kind.
    pub fn asprimitive(&self, value: &Value) -> Result<Value> {
        let kind = value.kind();
        let Some(converter) = self.registry.lookup(kind) else {
            tracing::debug!(%kind, "unrecognized type");
            return Err(CoercionError::UnrecognizedType(kind));
        };
        converter.asprimitive(value, self.types.as_ref())
    }

    /// Converter chosen by the requested native kind.
    pub fn asnative(&self, native: Kind, value: &Value) -> Result<Value> {
        let Some(converter) = self.registry.lookup(native) else {
            tracing::debug!(%native, "no native converter");
            return Err(CoercionError::NativeType(native));
        };
        converter.asnative(value, self.types.as_ref())
    }
}
