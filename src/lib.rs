//! typed-array - Runtime-checked homogeneous containers
//!
//! A [`TypedArray<T>`] holds only instances of one element type. Elements are
//! added from constructor specifications (positional or named arguments) that
//! are bound and type-checked against the element's declared [`Signature`]
//! before anything is stored. [`assert_type`] performs the same kind of check
//! on a single value.
//!
//! # Quick Start
//!
//! ```ignore
//! use typed_array::{ElementSpec, TypedArray, Value};
//!
//! type FooArray = TypedArray<Foo>;
//!
//! let mut foos = FooArray::from_specs([
//!     ElementSpec::named([("id", Value::Int(1)), ("name", Value::from("Ray"))]),
//! ])?;
//! foos.append(ElementSpec::positional([Value::Int(2), Value::from("Bob")]))?;
//!
//! let rows = foos.to_plain_data();
//! ```
//!
//! # Architecture
//!
//! - `typed-array-core`: value model, primitive kinds, nominal types, errors,
//!   and the standalone type assertion
//! - `typed-array-collection`: the element contract and the container

pub use typed_array_collection::*;
pub use typed_array_core::*;
