//! # Decoder Errors

use std::io;

use thiserror::Error;

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decoding errors
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid text under any attempted encoding (best guess: {encoding})")]
    Undecodable { path: String, encoding: &'static str },
}

impl DecodeError {
    /// True when the underlying file does not exist. Callers treat a
    /// missing backing document as an empty collection, not a failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            DecodeError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            DecodeError::Undecodable { .. } => false,
        }
    }
}
