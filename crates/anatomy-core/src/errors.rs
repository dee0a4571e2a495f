//! Cross-cutting error types for Anatomy Explorer.
//!
//! Domain-specific errors (`SessionError`, `ConfigError`) live in their own
//! crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Anatomy Explorer crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User input failed validation. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// A string did not name a known enum variant.
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// The system random source could not produce bytes for an ID.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}

impl CoreError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
