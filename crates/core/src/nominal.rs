//! Nominal type identity
//!
//! A nominal type is a named Rust type whose instances can travel inside an
//! untyped [`Value`] and still be recognised by identity, not by shape.
//!
//! - [`Nominal`]: implemented by domain types (static name + field projection)
//! - [`Object`]: object-safe view, blanket-implemented for every `Nominal`
//! - [`Instance`]: shared handle stored in `Value::Instance`
//! - [`NominalType`]: the identity used by designators and error messages
//!
//! Two nominal types with identical fields are still different types; a
//! `Value::Record` with the same fields as a `Foo` is not a `Foo`.

use crate::value::Value;
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Public field projection of an object: field name to value, in declaration order
pub type Fields = IndexMap<String, Value>;

/// A named domain type that can be checked by identity
///
/// # Example
///
/// ```
/// use typed_array_core::{Fields, Nominal, Value};
///
/// #[derive(Debug, Clone)]
/// struct Point { x: i64, y: i64 }
///
/// impl Nominal for Point {
///     const TYPE_NAME: &'static str = "Point";
///
///     fn fields(&self) -> Fields {
///         let mut fields = Fields::new();
///         fields.insert("x".to_string(), Value::Int(self.x));
///         fields.insert("y".to_string(), Value::Int(self.y));
///         fields
///     }
/// }
/// ```
pub trait Nominal: Any + Send + Sync + fmt::Debug {
    /// Name used in designators and error messages
    const TYPE_NAME: &'static str;

    /// Project the public fields of this instance
    fn fields(&self) -> Fields;
}

/// Object-safe view of a nominal value
pub trait Object: Any + Send + Sync + fmt::Debug {
    /// Name of the concrete nominal type
    fn type_name(&self) -> &'static str;

    /// Identity of the concrete nominal type
    fn nominal_type(&self) -> NominalType;

    /// Public field projection
    fn to_fields(&self) -> Fields;

    /// Borrow as `Any` for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl<T: Nominal> Object for T {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn nominal_type(&self) -> NominalType {
        NominalType::of::<T>()
    }

    fn to_fields(&self) -> Fields {
        <T as Nominal>::fields(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Identity of a nominal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NominalType {
    id: TypeId,
    name: &'static str,
}

impl NominalType {
    /// Identity of `T`
    pub fn of<T: Nominal>() -> Self {
        NominalType {
            id: TypeId::of::<T>(),
            name: T::TYPE_NAME,
        }
    }

    /// Declared type name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rust type id
    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl fmt::Display for NominalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An instance of a nominal type, carried inside a [`Value`]
///
/// Cloning shares the underlying object. Equality compares type identity and
/// field projections.
#[derive(Clone)]
pub struct Instance(Arc<dyn Object>);

impl Instance {
    /// Wrap a nominal value
    pub fn new<T: Nominal>(value: T) -> Self {
        Instance(Arc::new(value))
    }

    /// Name of the concrete type
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Identity of the concrete type
    pub fn nominal_type(&self) -> NominalType {
        self.0.nominal_type()
    }

    /// Check whether this is an instance of `T`
    pub fn is<T: Nominal>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Borrow as `T` if this is an instance of `T`
    pub fn downcast_ref<T: Nominal>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Extract an owned `T`, or hand the instance back unchanged
    pub fn downcast<T: Nominal + Clone>(self) -> std::result::Result<T, Instance> {
        match self.downcast_ref::<T>() {
            Some(value) => Ok(value.clone()),
            None => Err(self),
        }
    }

    /// Public field projection
    pub fn fields(&self) -> Fields {
        self.0.to_fields()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.nominal_type() == other.nominal_type() && self.fields() == other.fields()
    }
}
