//! Style property value types.
//!
//! # Example
//!
//! ```
//! use utility_style::prelude::StyleValue;
//!
//! assert_eq!(StyleValue::from(16).to_string(), "16");
//! assert_eq!(StyleValue::from(0.1).to_string(), "0.1");
//! assert_eq!(StyleValue::from("row").to_string(), "'row'");
//!
//! let offset = StyleValue::map([("width", 0.into()), ("height", 1.into())]);
//! assert_eq!(offset.to_string(), "{ width: 0, height: 1 }");
//! ```

use std::fmt;

/// A resolved style value.
///
/// The `Display` impl writes the value the way it appears inside a style
/// object literal: strings are single-quoted, nested maps are written
/// inline, and numbers are written bare.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Whole number (spacing, radii, font sizes).
    Int(i64),
    /// Fractional number (opacity).
    Float(f64),
    /// Keyword or color literal.
    Str(String),
    /// Small nested object. Only the shadow offset uses this.
    Map(Vec<(&'static str, StyleValue)>),
}

impl StyleValue {
    /// Create a string value.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Create a nested map value, keeping field order.
    pub fn map(fields: impl IntoIterator<Item = (&'static str, StyleValue)>) -> Self {
        Self::Map(fields.into_iter().collect())
    }

    /// Get the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a field of a nested map.
    pub fn field(&self, name: &str) -> Option<&StyleValue> {
        match self {
            Self::Map(fields) => fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Integral floats keep a fractional digit so they stay floats.
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "'{v}'"),
            Self::Map(fields) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str(" }")
            }
        }
    }
}
