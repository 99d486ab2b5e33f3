//! TypedArray: an ordered container that only holds validated elements
//!
//! ## Design Principles
//!
//! 1. **One element type**: fixed by the type parameter `T: Element`.
//! 2. **Validated mutation**: every `set`/`append` goes through the same
//!    validating construction; raw specifications are never stored.
//! 3. **Atomic mutation**: a failed `set`/`append` leaves the container as it was.
//!
//! ## Indexing
//!
//! Indices are non-negative and may be sparse. Iteration follows insertion
//! order; overwriting an index keeps its position. Appends go one past the
//! highest index stored so far. Once `usize::MAX` has been used, appends
//! fail instead of reusing an index.
//!
//! ## Seeding
//!
//! Pre-built instances given at construction (`from_specs` with
//! `ElementSpec::Built`, `from_instances`) are trusted and stored as-is.

use crate::element::{Element, Signature};
use crate::spec::{validate, ElementSpec, Slot};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use tracing::{debug, trace};
use typed_array_core::{Error, Fields, Result, Value};

/// Ordered container of validated `T` instances
///
/// ## Example
///
/// ```rust,ignore
/// type FooArray = TypedArray<Foo>;
///
/// let mut foos = FooArray::from_specs([
///     ElementSpec::named([("id", Value::Int(1)), ("name", Value::from("Ray"))]),
///     ElementSpec::named([("id", Value::Int(2)), ("name", Value::from("Bob"))]),
/// ])?;
///
/// foos.append(ElementSpec::<Foo>::positional([Value::Int(3), Value::from("Alice")]))?;
/// assert_eq!(foos.len(), 3);
///
/// // Missing `id`: rejected, nothing stored
/// assert!(foos.append(ElementSpec::<Foo>::named([("name", "Alice")])).is_err());
/// assert_eq!(foos.len(), 3);
/// ```
#[derive(Clone)]
pub struct TypedArray<T: Element> {
    signature: Signature,
    items: IndexMap<usize, T>,
    /// `None` once the index space is exhausted
    next_index: Option<usize>,
}

impl<T: Element> TypedArray<T> {
    /// Create an empty container
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `T` declares a malformed signature.
    pub fn new() -> Result<Self> {
        let signature = T::signature();
        signature.check(T::TYPE_NAME)?;
        Ok(TypedArray {
            signature,
            items: IndexMap::new(),
            next_index: Some(0),
        })
    }

    /// Create a container and append each specification in order
    ///
    /// `ElementSpec::Built` instances are stored without further checks.
    ///
    /// # Errors
    ///
    /// The first error raised by a specification aborts construction.
    pub fn from_specs<S>(specs: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: Into<ElementSpec<T>>,
    {
        let mut array = Self::new()?;
        for spec in specs {
            array.append(spec)?;
        }
        Ok(array)
    }

    /// Create a container from untyped values (decoded rows, external input)
    ///
    /// # Errors
    ///
    /// `Error::InvalidSpec` for values that are not specifications, plus any
    /// error raised while building an element.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut array = Self::new()?;
        for value in values {
            array.append_value(value)?;
        }
        Ok(array)
    }

    /// Create a container seeded with pre-built instances
    pub fn from_instances(instances: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut array = Self::new()?;
        for instance in instances {
            let index = array.resolve(Slot::End)?;
            array.store(index, instance);
        }
        Ok(array)
    }

    /// Build an element from `spec` and store it at `index`
    ///
    /// An existing element at `index` is replaced in place. Returns `index`.
    ///
    /// # Errors
    ///
    /// `Error::Arity` or `Error::TypeMismatch` if the specification does not
    /// satisfy `T`'s constructor. The container is unchanged on error.
    pub fn set(&mut self, index: usize, spec: impl Into<ElementSpec<T>>) -> Result<usize> {
        self.set_slot(Slot::At(index), spec)
    }

    /// Build an element from `spec` and store it at `slot`
    ///
    /// Returns the index the element was stored at.
    ///
    /// # Errors
    ///
    /// As [`TypedArray::set`]; `Slot::End` additionally fails with
    /// `Error::Configuration` once an element is stored at `usize::MAX`.
    pub fn set_slot(&mut self, slot: Slot, spec: impl Into<ElementSpec<T>>) -> Result<usize> {
        let index = self.resolve(slot).map_err(|e| self.rejected(slot, e))?;
        let element = spec
            .into()
            .build_with(&self.signature)
            .map_err(|e| self.rejected(slot, e))?;
        self.store(index, element);
        Ok(index)
    }

    /// Like [`TypedArray::set_slot`], for an untyped value
    ///
    /// # Errors
    ///
    /// Additionally returns `Error::InvalidSpec` if `value` is not a
    /// specification.
    pub fn set_value(&mut self, slot: Slot, value: Value) -> Result<usize> {
        let spec = ElementSpec::from_value(value).map_err(|e| self.rejected(slot, e))?;
        self.set_slot(slot, spec)
    }

    /// Build an element from `spec` and store it after the last index
    pub fn append(&mut self, spec: impl Into<ElementSpec<T>>) -> Result<usize> {
        self.set_slot(Slot::End, spec)
    }

    /// Like [`TypedArray::append`], for an untyped value
    pub fn append_value(&mut self, value: Value) -> Result<usize> {
        self.set_value(Slot::End, value)
    }

    /// Extract a `T` from an untyped value
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` unless `value` is an instance of `T`.
    pub fn validate(value: Value) -> Result<T> {
        validate::<T>(value)
    }

    fn resolve(&self, slot: Slot) -> Result<usize> {
        match slot {
            Slot::At(index) => Ok(index),
            Slot::End => self.next_index.ok_or_else(|| {
                Error::configuration(format!("index space of {} exhausted", T::TYPE_NAME))
            }),
        }
    }

    fn store(&mut self, index: usize, element: T) {
        self.items.insert(index, element);
        self.next_index = self
            .next_index
            .and_then(|next| index.checked_add(1).map(|after| next.max(after)));
        trace!(element = T::TYPE_NAME, index, "stored element");
    }

    fn rejected(&self, slot: Slot, err: Error) -> Error {
        debug!(
            element = T::TYPE_NAME,
            slot = ?slot,
            code = err.code(),
            "rejected element specification"
        );
        err
    }

    // ========== Sequence operations ==========

    /// Borrow the element at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(&index)
    }

    /// Mutably borrow the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(&index)
    }

    /// Whether an element is stored at `index`
    pub fn contains_index(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    /// Remove and return the element at `index`
    ///
    /// Remaining elements keep their indices and order. The next append
    /// index is not rewound.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.items.shift_remove(&index)
    }

    /// Remove every element and restart indexing at 0
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_index = Some(0);
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no elements are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index the next append will use, `None` once the index space is exhausted
    pub fn next_index(&self) -> Option<usize> {
        self.next_index
    }

    /// Elements in iteration order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.values()
    }

    /// `(index, element)` pairs in iteration order
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items.iter().map(|(index, element)| (*index, element))
    }

    /// Indices in iteration order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.keys().copied()
    }

    // ========== Plain data ==========

    /// Field projection of every element, in iteration order
    pub fn to_plain_data(&self) -> Vec<Fields> {
        self.items.values().map(|element| element.fields()).collect()
    }

    /// Plain data as a JSON array of objects
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.to_plain_data()
                .into_iter()
                .map(|fields| serde_json::Value::from(Value::Record(fields)))
                .collect(),
        )
    }
}

impl<T: Element> fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("element", &T::TYPE_NAME)
            .field("items", &self.items)
            .field("next_index", &self.next_index)
            .finish()
    }
}

/// Equal when both hold equal elements at the same indices in the same order
impl<T: Element + PartialEq> PartialEq for TypedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<T: Element> Index<usize> for TypedArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if no element is stored at `index`.
    fn index(&self, index: usize) -> &T {
        match self.items.get(&index) {
            Some(element) => element,
            None => panic!("no {} stored at index {}", T::TYPE_NAME, index),
        }
    }
}

impl<T: Element> IntoIterator for TypedArray<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoValues<usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<'a, T: Element> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

/// Serializes as the plain data: a sequence of field mappings
impl<T: Element> Serialize for TypedArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.values().map(|element| Value::Record(element.fields())))
    }
}
