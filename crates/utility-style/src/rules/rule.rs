//! Single translation rule definition.

use crate::style::StyleMapping;
use crate::types::{StyleProperty, StyleValue};
use crate::Result;

/// The family of tokens a rule handles.
///
/// Categories are listed in the order the rule table consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `flex-1`, `flex-row`, `flex-col`.
    Flex,
    /// `items-*` and `justify-*`.
    Alignment,
    /// `mb-*`, `mt-*`, `mr-*`, `ml-*`.
    Margin,
    /// `p-*`, `px-*`, `py-*`.
    Padding,
    /// `bg-*`.
    Background,
    /// `rounded` and `rounded-*`.
    BorderRadius,
    /// `text-*` (color and size).
    Text,
    /// `font-*`.
    FontWeight,
    /// `shadow`, `shadow-sm`.
    Shadow,
}

/// What a claimed token does to the mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The token belongs to the rule but names nothing it knows.
    Nothing,
    /// Overwrite one property.
    Set(StyleProperty, StyleValue),
    /// Set a group of properties without clearing others.
    Merge(Vec<(StyleProperty, StyleValue)>),
}

impl Effect {
    /// Create a `Set` effect.
    pub fn set(property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        Self::Set(property, value.into())
    }

    /// Apply this effect to a mapping.
    pub fn apply(self, mapping: &mut StyleMapping) {
        match self {
            Self::Nothing => {}
            Self::Set(property, value) => mapping.set(property, value),
            Self::Merge(fields) => mapping.merge(fields),
        }
    }
}

/// A translation rule: a claim predicate plus a resolver.
///
/// A rule that claims a token owns it. Its resolver may still produce
/// [`Effect::Nothing`] for a suffix it does not know, and no later rule is
/// consulted in that case.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Token family handled by this rule.
    pub category: Category,
    /// Whether this rule owns the token.
    pub claims: fn(&str) -> bool,
    /// Compute the effect of a claimed token.
    pub resolve: fn(&str) -> Result<Effect>,
}

impl Rule {
    /// Create a new rule.
    pub const fn new(
        category: Category,
        claims: fn(&str) -> bool,
        resolve: fn(&str) -> Result<Effect>,
    ) -> Self {
        Self {
            category,
            claims,
            resolve,
        }
    }

    /// Resolve `token` if this rule claims it.
    pub fn try_token(&self, token: &str) -> Option<Result<Effect>> {
        (self.claims)(token).then(|| (self.resolve)(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_demo(token: &str) -> bool {
        token.starts_with("demo-")
    }

    fn resolve_demo(token: &str) -> Result<Effect> {
        Ok(match token {
            "demo-one" => Effect::set(StyleProperty::Flex, 1),
            _ => Effect::Nothing,
        })
    }

    #[test]
    fn rule_claims_before_resolving() {
        let rule = Rule::new(Category::Flex, claims_demo, resolve_demo);

        assert!(rule.try_token("other").is_none());
        assert_eq!(
            rule.try_token("demo-one"),
            Some(Ok(Effect::Set(StyleProperty::Flex, StyleValue::Int(1))))
        );
        assert_eq!(rule.try_token("demo-two"), Some(Ok(Effect::Nothing)));
    }

    #[test]
    fn effect_apply() {
        let mut style = StyleMapping::new();
        Effect::Nothing.apply(&mut style);
        assert!(style.is_empty());

        Effect::set(StyleProperty::Padding, 4).apply(&mut style);
        Effect::Merge(vec![(StyleProperty::ShadowRadius, StyleValue::Int(2))]).apply(&mut style);
        assert_eq!(style.to_string(), "{ padding: 4, shadowRadius: 2 }");
    }
}
