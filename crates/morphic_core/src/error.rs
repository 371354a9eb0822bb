//! Core error types

use thiserror::Error;

/// Errors raised by the core primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphicError {
    /// A color string was not `#rgb` or `#rrggbb`
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: &'static str },
}

impl MorphicError {
    pub(crate) fn invalid_color(input: &str, reason: &'static str) -> Self {
        Self::InvalidColor {
            input: input.to_string(),
            reason,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, MorphicError>;
