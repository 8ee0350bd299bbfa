//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Project file not found.
    #[error("project file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Project file already exists.
    #[error("project file already exists: {0}")]
    AlreadyExists(std::path::PathBuf),

    /// Invalid JSON syntax or shape.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
