//! Style engine error types

use thiserror::Error;

use crate::params::Field;

/// Errors raised while configuring the style engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A bound has `min > max` or a non-positive step
    #[error("Invalid bounds for {field}: min={min}, max={max}, step={step}")]
    InvalidRange {
        field: Field,
        min: f64,
        max: f64,
        step: f64,
    },
}

/// Result type for style engine operations
pub type Result<T> = std::result::Result<T, StyleError>;
