//! Textual type designators
//!
//! Callers that receive the expected type as text (decoded schemas, tables of
//! column types) resolve it through a [`TypeRegistry`]. The six primitive
//! kind tags are always known; nominal types must be registered first.
//!
//! Nominal names are matched exactly and may not shadow a primitive tag.

use crate::assert::{assert_type, TypeDesignator};
use crate::error::{Error, Result};
use crate::kind::PrimitiveKind;
use crate::nominal::{Nominal, NominalType};
use crate::value::Value;
use std::collections::BTreeMap;

/// Maps designator names to primitive kinds and registered nominal types
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    nominal: BTreeMap<&'static str, NominalType>,
}

impl TypeRegistry {
    /// Registry knowing only the primitive kinds
    pub fn new() -> Self {
        Self::default()
    }

    /// Register nominal type `T` under `T::TYPE_NAME`
    ///
    /// Re-registering the same type is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the name is empty, is a primitive
    /// kind tag, or is already taken by a different type.
    pub fn register<T: Nominal>(&mut self) -> Result<()> {
        let ty = NominalType::of::<T>();
        let name = ty.name();

        if name.is_empty() {
            return Err(Error::configuration("nominal type name cannot be empty"));
        }
        if PrimitiveKind::from_name(name).is_some() {
            return Err(Error::configuration(format!(
                "nominal type name `{}` shadows a primitive kind",
                name
            )));
        }

        match self.nominal.get(name) {
            Some(existing) if *existing == ty => Ok(()),
            Some(_) => Err(Error::configuration(format!(
                "nominal type name `{}` is already registered to a different type",
                name
            ))),
            None => {
                self.nominal.insert(name, ty);
                Ok(())
            }
        }
    }

    /// Builder form of [`TypeRegistry::register`]
    pub fn with<T: Nominal>(mut self) -> Result<Self> {
        self.register::<T>()?;
        Ok(self)
    }

    /// Resolve a designator name
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` for names that are neither primitive
    /// kind tags nor registered nominal types.
    pub fn resolve(&self, name: &str) -> Result<TypeDesignator> {
        if let Some(kind) = PrimitiveKind::from_name(name) {
            return Ok(TypeDesignator::Kind(kind));
        }
        self.nominal
            .get(name)
            .copied()
            .map(TypeDesignator::Nominal)
            .ok_or_else(|| Error::configuration(format!("unsupported type `{}` specified", name)))
    }

    /// Resolve `designator` and assert `value` against it
    pub fn assert(&self, value: Value, designator: &str) -> Result<Value> {
        let expected = self.resolve(designator)?;
        assert_type(value, &expected)
    }

    /// Check whether a nominal type name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.nominal.contains_key(name)
    }

    /// Registered nominal type names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nominal.keys().copied()
    }
}
