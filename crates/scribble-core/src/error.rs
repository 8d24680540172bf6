//! Error types for scribble-core

use thiserror::Error;

/// Result type alias using scribble-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scribble-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
