//! Error types for token lookups and configuration

use thiserror::Error;

/// Errors raised by token lookups, color parsing and configuration loading
#[derive(Debug, Error)]
pub enum TokenError {
    /// A scale was asked for a key it does not define
    #[error("Unknown {scale} key: {key}")]
    UnknownKey {
        /// Name of the scale that was queried (e.g. "space", "font size")
        scale: &'static str,
        /// The key that was not found
        key: String,
    },

    /// A color token could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An opacity outside of 0.0..=1.0
    #[error("Invalid opacity: {0}")]
    InvalidOpacity(f32),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TokenError {
    pub(crate) fn unknown(scale: &'static str, key: impl Into<String>) -> Self {
        TokenError::UnknownKey {
            scale,
            key: key.into(),
        }
    }
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
