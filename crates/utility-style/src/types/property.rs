//! The closed set of style properties the rule table can write.

use std::fmt;

/// A React Native style property produced by the rule table.
///
/// Every property a token can set is listed here, so a rule cannot
/// introduce an arbitrary key. [`StyleProperty::name`] gives the camelCase
/// key used in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    // === Flexbox ===
    /// `flex`
    Flex,
    /// `flexDirection`
    FlexDirection,
    /// `alignItems`
    AlignItems,
    /// `justifyContent`
    JustifyContent,

    // === Box Model ===
    /// `marginBottom`
    MarginBottom,
    /// `marginTop`
    MarginTop,
    /// `marginRight`
    MarginRight,
    /// `marginLeft`
    MarginLeft,
    /// `padding`
    Padding,
    /// `paddingHorizontal`
    PaddingHorizontal,
    /// `paddingVertical`
    PaddingVertical,
    /// `borderRadius`
    BorderRadius,

    // === Background ===
    /// `backgroundColor`
    BackgroundColor,

    // === Typography ===
    /// `color`
    Color,
    /// `fontSize`
    FontSize,
    /// `fontWeight`
    FontWeight,

    // === Effects ===
    /// `shadowColor`
    ShadowColor,
    /// `shadowOffset`
    ShadowOffset,
    /// `shadowOpacity`
    ShadowOpacity,
    /// `shadowRadius`
    ShadowRadius,
}

impl StyleProperty {
    /// All properties, in declaration order.
    pub const ALL: [StyleProperty; 20] = [
        Self::Flex,
        Self::FlexDirection,
        Self::AlignItems,
        Self::JustifyContent,
        Self::MarginBottom,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginLeft,
        Self::Padding,
        Self::PaddingHorizontal,
        Self::PaddingVertical,
        Self::BorderRadius,
        Self::BackgroundColor,
        Self::Color,
        Self::FontSize,
        Self::FontWeight,
        Self::ShadowColor,
        Self::ShadowOffset,
        Self::ShadowOpacity,
        Self::ShadowRadius,
    ];

    /// The camelCase key as written in a style object.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::FlexDirection => "flexDirection",
            Self::AlignItems => "alignItems",
            Self::JustifyContent => "justifyContent",
            Self::MarginBottom => "marginBottom",
            Self::MarginTop => "marginTop",
            Self::MarginRight => "marginRight",
            Self::MarginLeft => "marginLeft",
            Self::Padding => "padding",
            Self::PaddingHorizontal => "paddingHorizontal",
            Self::PaddingVertical => "paddingVertical",
            Self::BorderRadius => "borderRadius",
            Self::BackgroundColor => "backgroundColor",
            Self::Color => "color",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::ShadowColor => "shadowColor",
            Self::ShadowOffset => "shadowOffset",
            Self::ShadowOpacity => "shadowOpacity",
            Self::ShadowRadius => "shadowRadius",
        }
    }

    /// Look up a property by its camelCase key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prop| prop.name() == name)
    }

    /// Check if this property belongs to the shadow group.
    pub fn is_shadow(self) -> bool {
        matches!(
            self,
            Self::ShadowColor | Self::ShadowOffset | Self::ShadowOpacity | Self::ShadowRadius
        )
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
