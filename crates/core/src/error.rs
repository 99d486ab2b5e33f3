//! Error types for typed containers and type assertions
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Configuration` | a container variant or assertion call is malformed before any data is processed |
//! | `InvalidSpec` | an element specification is not an argument list or mapping |
//! | `Arity` | a specification's arguments do not satisfy the element constructor |
//! | `TypeMismatch` | a value does not match the required type or kind |

use thiserror::Error;

/// Result type alias for typed-array operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for typed containers and type assertions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The container variant or designator is malformed
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is wrong with the declaration
        reason: String,
    },

    /// A supplied element specification has the wrong shape
    #[error("Invalid specification for {element}: expected an argument list or mapping, {found} given")]
    InvalidSpec {
        /// Element type the specification was meant for
        element: String,
        /// Runtime kind of the rejected input
        found: String,
    },

    /// Argument count or names do not satisfy the element constructor
    #[error("Arity error constructing {element}: {reason}")]
    Arity {
        /// Element type being constructed
        element: String,
        /// Which parameter was missing, unknown or surplus
        reason: String,
    },

    /// A value does not match the required type
    #[error("Type mismatch for {subject}: expected {expected}, {actual} given")]
    TypeMismatch {
        /// What was being checked (a value, an argument, an element)
        subject: String,
        /// Expected type or kind
        expected: String,
        /// Actual type or kind
        actual: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an invalid specification error
    pub fn invalid_spec(element: impl Into<String>, found: impl Into<String>) -> Self {
        Error::InvalidSpec {
            element: element.into(),
            found: found.into(),
        }
    }

    /// Create an arity error
    pub fn arity(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Arity {
            element: element.into(),
            reason: reason.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            subject: subject.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Stable snake_case code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "configuration_error",
            Error::InvalidSpec { .. } => "invalid_spec",
            Error::Arity { .. } => "arity_error",
            Error::TypeMismatch { .. } => "type_mismatch",
        }
    }

    /// Re-label the subject of a type mismatch, leaving other errors alone
    ///
    /// Used when a generic check is performed on behalf of a more specific
    /// caller (e.g. a constructor argument).
    pub fn with_subject(self, subject: impl Into<String>) -> Self {
        match self {
            Error::TypeMismatch {
                expected, actual, ..
            } => Error::TypeMismatch {
                subject: subject.into(),
                expected,
                actual,
            },
            other => other,
        }
    }
}
