//! Error types for nibble-core

use thiserror::Error;

/// Result type alias using nibble-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nibble-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Food idea not found
    #[error("Food idea not found: {0}")]
    NotFound(i64),
}
