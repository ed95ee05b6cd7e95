//! Ordered property → value mapping built up by the translator.

use std::fmt;

use crate::types::{StyleProperty, StyleValue};

/// An ordered style mapping.
///
/// Entries keep the position of their first insertion. Setting a property
/// that is already present replaces its value in place, so later tokens win
/// without reordering the output.
///
/// # Example
///
/// ```
/// use utility_style::prelude::*;
///
/// let mut style = StyleMapping::new();
/// style.set(StyleProperty::MarginBottom, 8);
/// style.set(StyleProperty::BackgroundColor, "white");
/// style.set(StyleProperty::MarginBottom, 16);
///
/// assert_eq!(style.to_string(), "{ marginBottom: 16, backgroundColor: 'white' }");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMapping {
    entries: Vec<(StyleProperty, StyleValue)>,
}

impl StyleMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, overwriting any previous value.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Set several properties at once.
    ///
    /// Properties not named in `fields` are left untouched.
    pub fn merge(&mut self, fields: impl IntoIterator<Item = (StyleProperty, StyleValue)>) {
        for (property, value) in fields {
            self.set(property, value);
        }
    }

    /// Get the value of a property.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    /// Check if a property has been set.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.get(property).is_some()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property has been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }
}

impl fmt::Display for StyleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        f.write_str(" }")
    }
}
