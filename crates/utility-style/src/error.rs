//! Error types for the translation engine.

/// Result type alias for translation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating utility tokens.
///
/// The default translator never produces these; they only surface when
/// strict validation is enabled through
/// [`TranslateOptions::strict`](crate::translate::TranslateOptions::strict).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token was claimed by a rule but carries a value the rule cannot use.
    #[error("Invalid value in token '{token}': {message}")]
    InvalidValue { token: String, message: String },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            token: token.into(),
            message: message.into(),
        }
    }

    /// The token that triggered the error.
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidValue { token, .. } => token,
        }
    }
}
