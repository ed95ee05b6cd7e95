//! Configuration file support.
//!
//! The config file is optional TOML:
//!
//! ```toml
//! strict = false
//! format = "object"   # or "jsx"
//! log_level = "warn"
//! ```

use std::path::Path;

use serde::Deserialize;
use utility_style::prelude::{OutputFormat, TranslateOptions};

use crate::error::{Error, Result};

/// Serialized output wrapping, as named on the command line and in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `{ key: value }`
    #[default]
    Object,
    /// `{{ key: value }}`
    Jsx,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Object => OutputFormat::Object,
            Format::Jsx => OutputFormat::Jsx,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reject malformed values instead of skipping them.
    pub strict: bool,
    /// Output wrapping.
    pub format: Format,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&content).map_err(|e| Error::config(path, e))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Translator options described by this config.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions::new()
            .strict(self.strict)
            .format(self.format.into())
    }
}
