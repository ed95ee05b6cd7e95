//! Token translation and source rewriting.

mod rewrite;
mod translator;

pub use rewrite::{rewrite_class_names, RewriteSummary};
pub use translator::{TranslateOptions, Translation, Translator};
