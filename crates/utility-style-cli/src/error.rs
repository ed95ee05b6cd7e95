//! Error types for the command-line front end.

use std::path::PathBuf;
use std::process::ExitCode;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can stop the CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("Invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Standard input or output failed.
    #[error("I/O error: {0}")]
    Stdio(#[from] std::io::Error),

    /// Strict translation rejected a token.
    #[error(transparent)]
    Translate(#[from] utility_style::Error),
}

impl Error {
    /// Create a config read error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error.
    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    ///
    /// Setup problems exit with 2, rejected input with 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } | Self::Config { .. } | Self::Stdio(_) => ExitCode::from(2),
            Self::Translate(_) => ExitCode::from(1),
        }
    }
}
