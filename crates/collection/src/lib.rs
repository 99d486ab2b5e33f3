//! Typed collections for typed-array
//!
//! This crate provides:
//! - Element: Contract for types a container can hold (constructor signature)
//! - ElementSpec: Positional, named, or pre-built element descriptions
//! - TypedArray: Ordered container that only accepts validated elements

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod element;
pub mod spec;

pub use array::TypedArray;
pub use element::{Arguments, Element, Param, Signature};
pub use spec::{validate, ElementSpec, Slot};
