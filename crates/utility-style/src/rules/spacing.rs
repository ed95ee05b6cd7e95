//! Spacing unit conversion for margin and padding tokens.
//!
//! One spacing unit is four pixels. The half-unit suffix `0.5` does not
//! follow the scale: margins map it to [`MARGIN_HALF_PX`] and paddings to
//! [`PADDING_HALF_PX`].

use crate::types::StyleProperty;
use crate::{Error, Result};

/// Pixels per spacing unit.
pub const PX_PER_UNIT: i64 = 4;

/// Pixel value of a `0.5` margin suffix.
pub const MARGIN_HALF_PX: i64 = 2;

/// Pixel value of a `0.5` padding suffix.
pub const PADDING_HALF_PX: i64 = 6;

const HALF_SUFFIX: &str = "0.5";

/// A spacing prefix and the property it writes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpacingPrefix {
    pub prefix: &'static str,
    pub property: StyleProperty,
    /// Pixel value for the `0.5` suffix, or `None` if the prefix takes
    /// whole units only.
    pub half_px: Option<i64>,
}

impl SpacingPrefix {
    const fn new(prefix: &'static str, property: StyleProperty, half_px: Option<i64>) -> Self {
        Self {
            prefix,
            property,
            half_px,
        }
    }

    /// Return the suffix of `token` if it is a valid spacing token for this prefix.
    fn suffix<'a>(&self, token: &'a str) -> Option<&'a str> {
        let suffix = token.strip_prefix(self.prefix)?;
        let whole = !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit());
        let half = self.half_px.is_some() && suffix == HALF_SUFFIX;
        (whole || half).then_some(suffix)
    }
}

pub(crate) const MARGINS: [SpacingPrefix; 4] = [
    SpacingPrefix::new("mb-", StyleProperty::MarginBottom, Some(MARGIN_HALF_PX)),
    SpacingPrefix::new("mt-", StyleProperty::MarginTop, Some(MARGIN_HALF_PX)),
    SpacingPrefix::new("mr-", StyleProperty::MarginRight, None),
    SpacingPrefix::new("ml-", StyleProperty::MarginLeft, None),
];

pub(crate) const PADDINGS: [SpacingPrefix; 3] = [
    SpacingPrefix::new("p-", StyleProperty::Padding, Some(PADDING_HALF_PX)),
    SpacingPrefix::new("px-", StyleProperty::PaddingHorizontal, Some(PADDING_HALF_PX)),
    SpacingPrefix::new("py-", StyleProperty::PaddingVertical, Some(PADDING_HALF_PX)),
];

/// Find the prefix in `table` that accepts `token`, with the token's suffix.
pub(crate) fn find<'a>(
    table: &[SpacingPrefix],
    token: &'a str,
) -> Option<(SpacingPrefix, &'a str)> {
    table
        .iter()
        .find_map(|prefix| prefix.suffix(token).map(|suffix| (*prefix, suffix)))
}

/// Convert a spacing suffix to pixels.
///
/// `token` is only used for error reporting.
pub(crate) fn to_px(token: &str, prefix: &SpacingPrefix, suffix: &str) -> Result<i64> {
    if let (HALF_SUFFIX, Some(half)) = (suffix, prefix.half_px) {
        return Ok(half);
    }
    suffix
        .parse::<i64>()
        .ok()
        .and_then(|units| units.checked_mul(PX_PER_UNIT))
        .ok_or_else(|| Error::invalid_value(token, "spacing value out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(table: &[SpacingPrefix], token: &str) -> Option<(StyleProperty, i64)> {
        let (prefix, suffix) = find(table, token)?;
        to_px(token, &prefix, suffix).ok().map(|v| (prefix.property, v))
    }

    #[test]
    fn whole_units_scale_by_four() {
        assert_eq!(px(&MARGINS, "mb-3"), Some((StyleProperty::MarginBottom, 12)));
        assert_eq!(px(&MARGINS, "ml-0"), Some((StyleProperty::MarginLeft, 0)));
        assert_eq!(px(&PADDINGS, "py-10"), Some((StyleProperty::PaddingVertical, 40)));
    }

    #[test]
    fn half_unit_constants() {
        assert_eq!(px(&MARGINS, "mt-0.5"), Some((StyleProperty::MarginTop, 2)));
        assert_eq!(px(&PADDINGS, "px-0.5"), Some((StyleProperty::PaddingHorizontal, 6)));
    }

    #[test]
    fn horizontal_margins_take_whole_units_only() {
        assert!(find(&MARGINS, "mr-0.5").is_none());
        assert!(find(&MARGINS, "ml-0.5").is_none());
    }

    #[test]
    fn suffix_must_be_complete() {
        assert!(find(&MARGINS, "mb-").is_none());
        assert!(find(&MARGINS, "mb-4px").is_none());
        assert!(find(&MARGINS, "mb-1.5").is_none());
        assert!(find(&PADDINGS, "pt-4").is_none());
    }

    #[test]
    fn overflow_is_an_error() {
        let token = "mb-99999999999999999999";
        let (prefix, suffix) = find(&MARGINS, token).expect("digits are claimed");
        assert!(to_px(token, &prefix, suffix).is_err());
    }
}
