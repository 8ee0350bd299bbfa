//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Placeholders and values do not line up.
    #[error("template {template:?} expects {expected} value(s), got {given}")]
    Template {
        /// The offending template.
        template: String,
        /// Number of `%s` placeholders.
        expected: usize,
        /// Number of values supplied.
        given: usize,
    },

    /// Commit policy misconfigured.
    #[error("invalid commit policy: {0}")]
    Policy(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
