//! Token string → style mapping translation.

use std::convert::Infallible;

use crate::rules::{resolve_token, Effect};
use crate::style::{serialize_as, OutputFormat, StyleMapping};
use crate::{Error, Result};

/// Options controlling a [`Translator`].
///
/// # Example
///
/// ```
/// use utility_style::prelude::*;
///
/// let options = TranslateOptions::new().strict(true).format(OutputFormat::Jsx);
/// let translator = Translator::with_options(options);
/// assert_eq!(translator.try_translate("flex-1").unwrap(), "{{ flex: 1 }}");
/// assert!(translator.try_translate("text-[bigpx]").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Reject malformed values (such as `text-[abcpx]`) instead of skipping them.
    pub strict: bool,
    /// Wrapping used when serializing.
    pub format: OutputFormat,
}

impl TranslateOptions {
    /// Create default (lenient, plain object) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict value validation.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// The outcome of translating one token string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// The resolved style mapping.
    pub mapping: StyleMapping,
    /// Tokens no rule claimed.
    pub ignored: Vec<String>,
    /// Tokens a rule claimed but could not turn into a property.
    pub unresolved: Vec<String>,
}

impl Translation {
    /// Check if every token produced a property.
    pub fn is_complete(&self) -> bool {
        self.ignored.is_empty() && self.unresolved.is_empty()
    }
}

/// Translates utility token strings into style object literals.
///
/// A translator only holds its options, so one instance can be shared
/// freely between threads and calls.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    /// Create a lenient translator producing plain object literals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with explicit options.
    pub fn with_options(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// The options this translator was built with.
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translate and serialize, skipping anything that cannot be used.
    ///
    /// This never fails; the `strict` option only affects
    /// [`try_translate`](Self::try_translate).
    pub fn translate(&self, input: &str) -> String {
        let translation = self.lenient(input);
        serialize_as(&translation.mapping, self.options.format)
    }

    /// Translate and serialize, honoring the `strict` option.
    pub fn try_translate(&self, input: &str) -> Result<String> {
        let mapping = self.to_mapping(input)?;
        Ok(serialize_as(&mapping, self.options.format))
    }

    /// Translate into a mapping without serializing it.
    pub fn to_mapping(&self, input: &str) -> Result<StyleMapping> {
        self.translate_report(input).map(|t| t.mapping)
    }

    /// Translate and report which tokens were not used.
    pub fn translate_report(&self, input: &str) -> Result<Translation> {
        if self.options.strict {
            self.run(input, Err)
        } else {
            Ok(self.lenient(input))
        }
    }

    /// Translate, logging and skipping malformed values.
    fn lenient(&self, input: &str) -> Translation {
        let Ok(translation) = self.run(input, |e| -> std::result::Result<(), Infallible> {
            tracing::warn!("Skipping token: {}", e);
            Ok(())
        });
        translation
    }

    /// Translate `input`, passing malformed values to `on_invalid`.
    ///
    /// The token is recorded as unresolved when `on_invalid` returns `Ok`.
    fn run<E>(
        &self,
        input: &str,
        mut on_invalid: impl FnMut(Error) -> std::result::Result<(), E>,
    ) -> std::result::Result<Translation, E> {
        let mut translation = Translation::default();

        for token in input.split_whitespace() {
            let Some((rule, outcome)) = resolve_token(token) else {
                tracing::debug!(token, "no rule for token");
                translation.ignored.push(token.to_string());
                continue;
            };

            match outcome {
                Ok(Effect::Nothing) => {
                    tracing::debug!(token, category = ?rule.category, "unknown suffix");
                    translation.unresolved.push(token.to_string());
                }
                Ok(effect) => {
                    tracing::trace!(token, category = ?rule.category, "applying rule");
                    effect.apply(&mut translation.mapping);
                }
                Err(e) => {
                    on_invalid(e)?;
                    translation.unresolved.push(token.to_string());
                }
            }
        }

        Ok(translation)
    }
}
