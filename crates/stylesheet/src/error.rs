//! Error types for style resolution

use style_tokens::TokenError;
use thiserror::Error;

/// Errors surfaced while building or reading style mappings
#[derive(Debug, Error)]
pub enum StyleError {
    /// A token lookup or color composition failed inside a provider
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// A mapping has no slot with the given name
    #[error("Missing style slot: {0}")]
    MissingSlot(String),

    /// A static slot was read as a variant, or the reverse
    #[error("Style slot {name} is not {expected}")]
    SlotKind {
        /// Slot name
        name: String,
        /// Kind the caller asked for
        expected: &'static str,
    },
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;
