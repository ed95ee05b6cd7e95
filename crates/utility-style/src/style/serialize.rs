//! Serialization of a [`StyleMapping`] into an object literal.

use super::StyleMapping;

/// How a serialized mapping is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain object literal: `{ flex: 1 }`.
    #[default]
    Object,
    /// JSX expression container around the object: `{{ flex: 1 }}`,
    /// ready to follow `style=`.
    Jsx,
}

/// Serialize a mapping as `{ key: value, ... }`.
///
/// Keys appear in insertion order and the output is deterministic. An empty
/// mapping serializes to `{  }`.
pub fn serialize(mapping: &StyleMapping) -> String {
    mapping.to_string()
}

/// Serialize a mapping using the given output format.
pub fn serialize_as(mapping: &StyleMapping, format: OutputFormat) -> String {
    match format {
        OutputFormat::Object => serialize(mapping),
        OutputFormat::Jsx => format!("{{{mapping}}}"),
    }
}
