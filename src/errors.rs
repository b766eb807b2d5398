//! Error types
//!
//! Graph building, ranking and phrase assembly are infallible; errors only
//! arise when loading or validating configuration.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("damping factor must lie within [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("convergence threshold must be non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
