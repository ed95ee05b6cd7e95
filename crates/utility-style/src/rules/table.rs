//! The ordered rule table.
//!
//! Rules are consulted top to bottom and the first rule that claims a token
//! handles it. Prefix families such as `rounded` and `text-` claim every
//! token that starts with the prefix, so an unknown suffix in those families
//! is swallowed rather than passed on.

use super::palette::{self, lookup};
use super::rule::{Category, Effect, Rule};
use super::spacing::{self, SpacingPrefix};
use crate::types::{StyleProperty, StyleValue};
use crate::{Error, Result};

/// Every rule, in priority order.
pub static RULES: [Rule; 9] = [
    Rule::new(Category::Flex, claims_flex, resolve_flex),
    Rule::new(Category::Alignment, claims_alignment, resolve_alignment),
    Rule::new(Category::Margin, claims_margin, resolve_margin),
    Rule::new(Category::Padding, claims_padding, resolve_padding),
    Rule::new(Category::Background, claims_background, resolve_background),
    Rule::new(Category::BorderRadius, claims_border_radius, resolve_border_radius),
    Rule::new(Category::Text, claims_text, resolve_text),
    Rule::new(Category::FontWeight, claims_font_weight, resolve_font_weight),
    Rule::new(Category::Shadow, claims_shadow, resolve_shadow),
];

/// Resolve `token` with the first rule that claims it.
///
/// Returns `None` when no rule claims the token.
pub fn resolve_token(token: &str) -> Option<(&'static Rule, Result<Effect>)> {
    RULES
        .iter()
        .find_map(|rule| rule.try_token(token).map(|outcome| (rule, outcome)))
}

// === Flex ===

const FLEX: [(&str, StyleProperty, FlexValue); 3] = [
    ("flex-1", StyleProperty::Flex, FlexValue::Grow(1)),
    ("flex-row", StyleProperty::FlexDirection, FlexValue::Direction("row")),
    ("flex-col", StyleProperty::FlexDirection, FlexValue::Direction("column")),
];

#[derive(Clone, Copy)]
enum FlexValue {
    Grow(i64),
    Direction(&'static str),
}

fn claims_flex(token: &str) -> bool {
    FLEX.iter().any(|(t, ..)| *t == token)
}

fn resolve_flex(token: &str) -> Result<Effect> {
    Ok(FLEX
        .iter()
        .find(|(t, ..)| *t == token)
        .map_or(Effect::Nothing, |(_, prop, value)| match value {
            FlexValue::Grow(n) => Effect::set(*prop, *n),
            FlexValue::Direction(d) => Effect::set(*prop, *d),
        }))
}

// === Alignment ===

const ALIGNMENT: [(&str, StyleProperty, &str); 6] = [
    ("items-center", StyleProperty::AlignItems, "center"),
    ("items-start", StyleProperty::AlignItems, "flex-start"),
    ("items-end", StyleProperty::AlignItems, "flex-end"),
    ("justify-center", StyleProperty::JustifyContent, "center"),
    ("justify-between", StyleProperty::JustifyContent, "space-between"),
    ("justify-end", StyleProperty::JustifyContent, "flex-end"),
];

fn claims_alignment(token: &str) -> bool {
    ALIGNMENT.iter().any(|(t, ..)| *t == token)
}

fn resolve_alignment(token: &str) -> Result<Effect> {
    Ok(ALIGNMENT
        .iter()
        .find(|(t, ..)| *t == token)
        .map_or(Effect::Nothing, |(_, prop, value)| Effect::set(*prop, *value)))
}

// === Spacing ===

fn claims_margin(token: &str) -> bool {
    spacing::find(&spacing::MARGINS, token).is_some()
}

fn resolve_margin(token: &str) -> Result<Effect> {
    resolve_spacing(&spacing::MARGINS, token)
}

fn claims_padding(token: &str) -> bool {
    spacing::find(&spacing::PADDINGS, token).is_some()
}

fn resolve_padding(token: &str) -> Result<Effect> {
    resolve_spacing(&spacing::PADDINGS, token)
}

fn resolve_spacing(table: &[SpacingPrefix], token: &str) -> Result<Effect> {
    let Some((prefix, suffix)) = spacing::find(table, token) else {
        return Ok(Effect::Nothing);
    };
    let px = spacing::to_px(token, &prefix, suffix)?;
    Ok(Effect::set(prefix.property, px))
}

// === Background ===

fn claims_background(token: &str) -> bool {
    lookup(&palette::BACKGROUNDS, token).is_some()
}

fn resolve_background(token: &str) -> Result<Effect> {
    Ok(lookup(&palette::BACKGROUNDS, token)
        .map_or(Effect::Nothing, |c| Effect::set(StyleProperty::BackgroundColor, c)))
}

// === Border radius ===

fn claims_border_radius(token: &str) -> bool {
    token.starts_with("rounded")
}

fn resolve_border_radius(token: &str) -> Result<Effect> {
    Ok(lookup(&palette::RADII, token)
        .map_or(Effect::Nothing, |r| Effect::set(StyleProperty::BorderRadius, r)))
}

// === Text ===

const BRACKET_OPEN: &str = "text-[";
const BRACKET_CLOSE: &str = "px]";

fn claims_text(token: &str) -> bool {
    token.starts_with("text-")
}

fn resolve_text(token: &str) -> Result<Effect> {
    if token.contains("gray-") {
        let shade = token.rsplit('-').next().unwrap_or_default();
        return Ok(lookup(&palette::TEXT_GRAYS, shade)
            .map_or(Effect::Nothing, |c| Effect::set(StyleProperty::Color, c)));
    }
    if let Some(color) = lookup(&palette::TEXT_COLORS, token) {
        return Ok(Effect::set(StyleProperty::Color, color));
    }
    if let Some(literal) = token.strip_prefix(BRACKET_OPEN) {
        let px = font_size_literal(token, literal)?;
        return Ok(Effect::set(StyleProperty::FontSize, px));
    }
    Ok(lookup(&palette::FONT_SIZES, token)
        .map_or(Effect::Nothing, |px| Effect::set(StyleProperty::FontSize, px)))
}

/// Parse the `<N>px]` tail of a `text-[<N>px]` token.
fn font_size_literal(token: &str, literal: &str) -> Result<i64> {
    let digits = literal
        .strip_suffix(BRACKET_CLOSE)
        .ok_or_else(|| Error::invalid_value(token, "expected `text-[<N>px]`"))?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        let message = format!("font size '{digits}' is not a number");
        return Err(Error::invalid_value(token, message));
    }
    digits
        .parse::<i64>()
        .map_err(|e| Error::invalid_value(token, format!("font size '{digits}': {e}")))
}

// === Font weight ===

const FONT_WEIGHTS: [(&str, &str); 2] = [("font-bold", "bold"), ("font-medium", "500")];

fn claims_font_weight(token: &str) -> bool {
    lookup(&FONT_WEIGHTS, token).is_some()
}

fn resolve_font_weight(token: &str) -> Result<Effect> {
    Ok(lookup(&FONT_WEIGHTS, token)
        .map_or(Effect::Nothing, |w| Effect::set(StyleProperty::FontWeight, w)))
}

// === Shadow ===

fn claims_shadow(token: &str) -> bool {
    matches!(token, "shadow" | "shadow-sm")
}

fn resolve_shadow(_token: &str) -> Result<Effect> {
    Ok(Effect::Merge(vec![
        (StyleProperty::ShadowColor, StyleValue::str("#000")),
        (
            StyleProperty::ShadowOffset,
            StyleValue::map([("width", StyleValue::Int(0)), ("height", StyleValue::Int(1))]),
        ),
        (StyleProperty::ShadowOpacity, StyleValue::Float(0.1)),
        (StyleProperty::ShadowRadius, StyleValue::Int(2)),
    ]))
}
