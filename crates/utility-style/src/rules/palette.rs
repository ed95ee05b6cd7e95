//! Color and size tables referenced by the rule table.

/// Brand accent color.
pub const TERRACOTTA: &str = "#e07a5f";

/// Background colors keyed by full token.
pub(crate) const BACKGROUNDS: [(&str, &str); 4] = [
    ("bg-white", "white"),
    ("bg-gray-50", "#f9fafb"),
    ("bg-gray-100", "#f3f4f6"),
    ("bg-terracotta", TERRACOTTA),
];

/// Gray text shades keyed by shade number.
pub(crate) const TEXT_GRAYS: [(&str, &str); 4] = [
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
];

/// Named text colors keyed by full token.
pub(crate) const TEXT_COLORS: [(&str, &str); 2] = [
    ("text-white", "white"),
    ("text-terracotta", TERRACOTTA),
];

/// Font sizes in pixels keyed by full token.
pub(crate) const FONT_SIZES: [(&str, i64); 5] = [
    ("text-xs", 12),
    ("text-sm", 14),
    ("text-base", 16),
    ("text-lg", 18),
    ("text-xl", 20),
];

/// Border radii in pixels keyed by full token.
pub(crate) const RADII: [(&str, i64); 5] = [
    ("rounded", 4),
    ("rounded-lg", 8),
    ("rounded-xl", 12),
    ("rounded-2xl", 16),
    ("rounded-full", 9999),
];

/// Look up `key` in a table.
pub(crate) fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
