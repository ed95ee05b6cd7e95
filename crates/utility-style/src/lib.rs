//! Utility-class to inline-style translation.
//!
//! This crate turns Tailwind-style utility class strings into React Native
//! style object literals, featuring:
//!
//! - **Rule table**: an ordered list of token rules with first-match-wins semantics
//! - **Closed vocabulary**: every output key is a [`StyleProperty`](types::StyleProperty)
//! - **Spacing scale**: four pixels per unit, with fixed half-unit constants
//! - **Serialization**: deterministic `{ key: value }` literals in insertion order
//! - **Rewriting**: replace `className="..."` attributes with `style={{ ... }}`
//!
//! # Example
//!
//! ```
//! use utility_style::translate;
//!
//! assert_eq!(
//!     translate("flex-row items-center mb-4 bg-white"),
//!     "{ flexDirection: 'row', alignItems: 'center', marginBottom: 16, backgroundColor: 'white' }"
//! );
//!
//! // Unknown tokens are ignored.
//! assert_eq!(translate("foo-bar"), "{  }");
//! ```

pub mod rules;
pub mod style;
pub mod translate;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use style::serialize;

/// Translate a whitespace-separated token string into a style object literal.
///
/// Unrecognized and malformed tokens are skipped; this never fails.
pub fn translate(input: &str) -> String {
    translate::Translator::new().translate(input)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::rules::{Category, Effect, Rule, RULES};
    pub use crate::style::{serialize, serialize_as, OutputFormat, StyleMapping};
    pub use crate::translate::{
        rewrite_class_names, RewriteSummary, TranslateOptions, Translation, Translator,
    };
    pub use crate::types::{StyleProperty, StyleValue};
}
