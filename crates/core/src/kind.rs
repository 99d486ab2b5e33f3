//! Primitive kind enumeration
//!
//! The six primitive kinds a value can be asserted against:
//!
//! | Kind | Tag | Matches |
//! |------|-----|---------|
//! | String | `string` | `Value::String` |
//! | Integer | `integer` | `Value::Int` |
//! | Float | `float` | `Value::Float` |
//! | Boolean | `boolean` | `Value::Bool` |
//! | Array | `array` | `Value::Array`, `Value::Map` |
//! | Object | `object` | `Value::Record` |
//!
//! There are no implicit coercions: `Int(1)` is not a `float`, `"1"` is not
//! an `integer`. Nominal instances are checked by type identity only and
//! never match a primitive kind.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// The six primitive kinds
///
/// ## Invariant
///
/// This enum MUST have exactly 6 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit float
    Float,
    /// Boolean
    Boolean,
    /// Positional or keyed list
    Array,
    /// Generic untyped object
    Object,
}

impl PrimitiveKind {
    /// All primitive kinds (for iteration)
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::String,
        PrimitiveKind::Integer,
        PrimitiveKind::Float,
        PrimitiveKind::Boolean,
        PrimitiveKind::Array,
        PrimitiveKind::Object,
    ];

    /// Get all primitive kinds as a slice
    pub fn all() -> &'static [PrimitiveKind] {
        &Self::ALL
    }

    /// Tag used in designators and error messages
    pub const fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Array => "array",
            PrimitiveKind::Object => "object",
        }
    }

    /// Parse from tag (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(PrimitiveKind::String),
            "integer" => Some(PrimitiveKind::Integer),
            "float" => Some(PrimitiveKind::Float),
            "boolean" => Some(PrimitiveKind::Boolean),
            "array" => Some(PrimitiveKind::Array),
            "object" => Some(PrimitiveKind::Object),
            _ => None,
        }
    }

    /// Check whether a value is of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            PrimitiveKind::String => value.is_string(),
            PrimitiveKind::Integer => value.is_int(),
            PrimitiveKind::Float => value.is_float(),
            PrimitiveKind::Boolean => value.is_bool(),
            PrimitiveKind::Array => value.is_array() || value.is_map(),
            PrimitiveKind::Object => value.is_record(),
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
