//! Error types for marker

use thiserror::Error;

/// Main error type for marker operations.
///
/// The compile pipeline (`parse`, `scan`, `compile`, `render`) never
/// fails; these variants cover the surrounding edges that touch the
/// filesystem and configuration files.
#[derive(Error, Debug)]
pub enum MarkerError {
    /// IO error reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for marker operations
pub type Result<T> = std::result::Result<T, MarkerError>;
