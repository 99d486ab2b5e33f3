//! Element specifications
//!
//! An [`ElementSpec`] is what callers hand to a container to describe one
//! element: constructor arguments by position, constructor arguments by
//! name, or an instance that is already built.
//!
//! Untyped input is classified with [`ElementSpec::from_value`]:
//!
//! | Value | Specification |
//! |-------|---------------|
//! | `Array` | `Positional` |
//! | `Map` | `Named` |
//! | `Instance` of the element type | `Built` |
//! | `Instance` of another type | `TypeMismatch` error |
//! | anything else | `InvalidSpec` error |

use crate::element::{Element, Signature};
use indexmap::IndexMap;
use typed_array_core::{Error, Result, Value};

/// Description of one element of type `T`
#[derive(Debug, Clone, PartialEq)]
pub enum ElementSpec<T> {
    /// Constructor arguments in parameter order
    Positional(Vec<Value>),
    /// Constructor arguments by parameter name
    Named(IndexMap<String, Value>),
    /// An instance that needs no construction
    Built(T),
}

impl<T: Element> ElementSpec<T> {
    /// Positional specification from anything convertible to values
    pub fn positional<V: Into<Value>>(args: impl IntoIterator<Item = V>) -> Self {
        ElementSpec::Positional(args.into_iter().map(Into::into).collect())
    }

    /// Named specification from `(name, value)` pairs
    ///
    /// A repeated name keeps its first position and its last value, as when
    /// decoding a JSON object with duplicate keys.
    pub fn named<K: Into<String>, V: Into<Value>>(args: impl IntoIterator<Item = (K, V)>) -> Self {
        ElementSpec::Named(
            args.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Classify an untyped value as a specification
    ///
    /// # Errors
    ///
    /// `Error::InvalidSpec` for values that are neither argument lists nor
    /// mappings nor instances; `Error::TypeMismatch` for instances of another
    /// nominal type.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(args) => Ok(ElementSpec::Positional(args)),
            Value::Map(args) => Ok(ElementSpec::Named(args)),
            Value::Instance(instance) => {
                validate::<T>(Value::Instance(instance)).map(ElementSpec::Built)
            }
            other => Err(Error::invalid_spec(T::TYPE_NAME, other.describe())),
        }
    }

    /// Whether this specification carries a pre-built instance
    pub fn is_built(&self) -> bool {
        matches!(self, ElementSpec::Built(_))
    }

    /// Build a validated instance, checking the element declaration first
    pub fn build(self) -> Result<T> {
        let signature = T::signature();
        signature.check(T::TYPE_NAME)?;
        self.build_with(&signature)
    }

    /// Build a validated instance against an already checked signature
    pub(crate) fn build_with(self, signature: &Signature) -> Result<T> {
        let args = match self {
            ElementSpec::Built(instance) => return Ok(instance),
            ElementSpec::Positional(args) => signature.bind_positional(T::TYPE_NAME, args)?,
            ElementSpec::Named(args) => signature.bind_named(T::TYPE_NAME, args)?,
        };
        T::construct(args)
    }
}

impl<T: Element> From<T> for ElementSpec<T> {
    fn from(instance: T) -> Self {
        ElementSpec::Built(instance)
    }
}

/// Extract a `T` from an untyped value
///
/// # Errors
///
/// Returns `Error::TypeMismatch` naming the expected element type and the
/// actual type unless `value` is an instance of `T`.
pub fn validate<T: Element>(value: Value) -> Result<T> {
    let actual = value.describe();
    match value {
        Value::Instance(instance) => instance.downcast::<T>().map_err(|_| {
            Error::type_mismatch("element", format!("instance of {}", T::TYPE_NAME), actual)
        }),
        _ => Err(Error::type_mismatch(
            "element",
            format!("instance of {}", T::TYPE_NAME),
            actual,
        )),
    }
}

/// Where a `set` stores its element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// At this index, replacing any element already there
    At(usize),
    /// One past the highest index used so far
    End,
}

impl From<usize> for Slot {
    fn from(index: usize) -> Self {
        Slot::At(index)
    }
}

impl From<Option<usize>> for Slot {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Slot::End, Slot::At)
    }
}
