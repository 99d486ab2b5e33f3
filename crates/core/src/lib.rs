//! Core types for typed-array
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Untyped value model for input rows and plain output data
//! - PrimitiveKind: The six primitive kinds (`string`, `integer`, ...)
//! - Nominal / Instance / NominalType: Type identity for domain objects
//! - TypeDesignator + assert_type: Standalone value type assertion
//! - TypeRegistry: Resolution of textual type designators
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assert;
pub mod error;
pub mod kind;
pub mod nominal;
pub mod registry;
pub mod value;

pub use assert::{assert_type, assert_type_named, TypeDesignator};
pub use error::{Error, Result};
pub use kind::PrimitiveKind;
pub use nominal::{Fields, Instance, Nominal, NominalType, Object};
pub use registry::TypeRegistry;
pub use value::Value;
