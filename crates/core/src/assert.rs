//! Value type assertion
//!
//! [`assert_type`] checks a value against a [`TypeDesignator`] and hands the
//! value back unchanged when it matches.
//!
//! ## Rules
//!
//! - A nominal instance matches only a nominal designator of its own type.
//! - Any other value matches a primitive kind exactly (see [`PrimitiveKind`]).
//! - A generic untyped object (`Value::Record`) is only ever checked against
//!   the `object` kind, never against a nominal type.

use crate::error::{Error, Result};
use crate::kind::PrimitiveKind;
use crate::nominal::{Nominal, NominalType};
use crate::registry::TypeRegistry;
use crate::value::Value;
use std::fmt;

/// Expected type of a value: a primitive kind or a nominal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDesignator {
    /// One of the six primitive kinds
    Kind(PrimitiveKind),
    /// A nominal type identity
    Nominal(NominalType),
}

impl TypeDesignator {
    /// Designator for nominal type `T`
    pub fn nominal<T: Nominal>() -> Self {
        TypeDesignator::Nominal(NominalType::of::<T>())
    }

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            TypeDesignator::Kind(kind) => kind.name(),
            TypeDesignator::Nominal(ty) => ty.name(),
        }
    }

    /// Check a value without consuming it
    pub fn check(&self, value: &Value) -> Result<()> {
        match (value, self) {
            (Value::Instance(instance), TypeDesignator::Nominal(expected))
                if instance.nominal_type() == *expected =>
            {
                Ok(())
            }
            (Value::Instance(instance), expected) => Err(Error::type_mismatch(
                "value",
                expected.describe(),
                format!("instance of {}", instance.type_name()),
            )),
            (_, TypeDesignator::Kind(kind)) if kind.matches(value) => Ok(()),
            (_, expected) => Err(Error::type_mismatch(
                "value",
                expected.describe(),
                value.kind_name(),
            )),
        }
    }

    fn describe(&self) -> String {
        match self {
            TypeDesignator::Kind(kind) => kind.name().to_string(),
            TypeDesignator::Nominal(ty) => format!("instance of {}", ty.name()),
        }
    }
}

impl From<PrimitiveKind> for TypeDesignator {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDesignator::Kind(kind)
    }
}

impl From<NominalType> for TypeDesignator {
    fn from(ty: NominalType) -> Self {
        TypeDesignator::Nominal(ty)
    }
}

impl fmt::Display for TypeDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assert that `value` matches `expected`, returning it unchanged
///
/// # Errors
///
/// Returns `Error::TypeMismatch` naming the expected and actual types.
///
/// # Example
///
/// ```
/// use typed_array_core::{assert_type, PrimitiveKind, Value};
///
/// let name = assert_type(Value::from("Foo"), &PrimitiveKind::String.into()).unwrap();
/// assert_eq!(name, Value::from("Foo"));
///
/// assert!(assert_type(Value::Int(1), &PrimitiveKind::String.into()).is_err());
/// ```
pub fn assert_type(value: Value, expected: &TypeDesignator) -> Result<Value> {
    expected.check(&value)?;
    Ok(value)
}

/// Assert against a textual designator resolved through `registry`
///
/// # Errors
///
/// Returns `Error::Configuration` if `designator` is neither a primitive kind
/// tag nor a registered nominal type, and `Error::TypeMismatch` if the value
/// does not match.
pub fn assert_type_named(value: Value, designator: &str, registry: &TypeRegistry) -> Result<Value> {
    let expected = registry.resolve(designator)?;
    assert_type(value, &expected)
}
