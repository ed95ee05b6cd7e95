//! Rewriting `className` attributes in component source.
//!
//! Every `className="..."` (or single-quoted) attribute whose tokens
//! translate to at least one property is replaced by the equivalent
//! `style={{ ... }}` attribute. Attributes that translate to nothing are
//! left as they are.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::Translator;
use crate::style::{serialize_as, OutputFormat};
use crate::Result;

static CLASS_NAME: OnceLock<Regex> = OnceLock::new();

fn class_name_pattern() -> &'static Regex {
    CLASS_NAME.get_or_init(|| {
        Regex::new(r#"className=(?:"([^"]*)"|'([^']*)')"#).expect("className pattern is valid")
    })
}

/// Counts gathered while rewriting a source string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Attributes replaced with a `style` attribute.
    pub rewritten: usize,
    /// Attributes left untouched because nothing in them translated.
    pub kept: usize,
}

/// Rewrite `className` attributes in `source` into inline `style` attributes.
///
/// Errors only when the translator is strict and an attribute holds a
/// malformed value.
///
/// # Example
///
/// ```
/// use utility_style::prelude::*;
///
/// let source = r#"<View className="flex-1 p-4"><Text className="w-full" /></View>"#;
/// let (out, summary) = rewrite_class_names(source, &Translator::new()).unwrap();
///
/// assert_eq!(out, r#"<View style={{ flex: 1, padding: 16 }}><Text className="w-full" /></View>"#);
/// assert_eq!(summary.rewritten, 1);
/// assert_eq!(summary.kept, 1);
/// ```
pub fn rewrite_class_names(
    source: &str,
    translator: &Translator,
) -> Result<(String, RewriteSummary)> {
    let mut out = String::with_capacity(source.len());
    let mut summary = RewriteSummary::default();
    let mut last = 0;

    for caps in class_name_pattern().captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&source[last..whole.start()]);
        last = whole.end();

        let tokens = class_tokens(&caps);
        let mapping = translator.to_mapping(tokens)?;
        if mapping.is_empty() {
            tracing::debug!(tokens, "keeping className with no translatable tokens");
            out.push_str(whole.as_str());
            summary.kept += 1;
        } else {
            out.push_str("style=");
            out.push_str(&serialize_as(&mapping, OutputFormat::Jsx));
            summary.rewritten += 1;
        }
    }
    out.push_str(&source[last..]);

    tracing::debug!(
        rewritten = summary.rewritten,
        kept = summary.kept,
        "rewrote className attributes"
    );
    Ok((out, summary))
}

fn class_tokens<'h>(caps: &Captures<'h>) -> &'h str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::TranslateOptions;

    #[test]
    fn rewrites_each_attribute() {
        let source = concat!(
            "<View className=\"flex-row items-center gap-2 mb-2\">\n",
            "  <Text className='font-bold text-lg text-gray-800'>Hi</Text>\n",
            "</View>\n",
        );
        let (out, summary) = rewrite_class_names(source, &Translator::new()).unwrap();

        assert_eq!(
            out,
            concat!(
                "<View style={{ flexDirection: 'row', alignItems: 'center', marginBottom: 8 }}>\n",
                "  <Text style={{ fontWeight: 'bold', fontSize: 18, color: '#1f2937' }}>Hi</Text>\n",
                "</View>\n",
            )
        );
        assert_eq!(summary, RewriteSummary { rewritten: 2, kept: 0 });
    }

    #[test]
    fn source_without_attributes_is_unchanged() {
        let source = "const x = { style: 1 };";
        let (out, summary) = rewrite_class_names(source, &Translator::new()).unwrap();
        assert_eq!(out, source);
        assert_eq!(summary, RewriteSummary::default());
    }

    #[test]
    fn empty_attribute_is_kept() {
        let source = r#"<View className="" />"#;
        let (out, summary) = rewrite_class_names(source, &Translator::new()).unwrap();
        assert_eq!(out, source);
        assert_eq!(summary.kept, 1);
    }

    #[test]
    fn strict_translator_propagates_errors() {
        let translator = Translator::with_options(TranslateOptions::new().strict(true));
        let source = r#"<Text className="text-[hugepx]" />"#;
        assert!(rewrite_class_names(source, &translator).is_err());
    }
}
