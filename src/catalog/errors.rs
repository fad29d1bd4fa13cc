//! # Catalog Errors
//!
//! A legitimately empty collection is `Ok(vec![])`, never an error.
//! `Decode` and `Corrupt` stay distinct variants so operators can tell
//! "no books yet" from "store is broken" even though the serving layer
//! degrades both to an empty collection.

use std::io;

use thiserror::Error;

use crate::decoder::DecodeError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Raw bytes could not be interpreted as text under any attempted
    /// encoding.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Text decoded successfully but is not a well-formed book
    /// collection.
    #[error("Backing document {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    /// Disk I/O failure. On save this means the triggering record is
    /// NOT durably persisted and the caller must not report success.
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The single-writer lock was poisoned by a panicking writer.
    #[error("Catalog writer lock poisoned")]
    Lock,
}

impl CatalogError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Decode(_) => 500,
            CatalogError::Corrupt { .. } => 500,
            CatalogError::Io { .. } => 500,
            CatalogError::Lock => 500,
        }
    }

    /// Short machine-readable class for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Decode(_) => "decode_failure",
            CatalogError::Corrupt { .. } => "corrupt_store",
            CatalogError::Io { .. } => "io_failure",
            CatalogError::Lock => "lock_poisoned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_distinguishes_corrupt_from_decode() {
        let corrupt = CatalogError::Corrupt {
            path: "library.json".to_string(),
            reason: "expected array".to_string(),
        };
        let decode = CatalogError::Decode(DecodeError::Undecodable {
            path: "library.json".to_string(),
            encoding: "windows-1252",
        });
        assert_eq!(corrupt.kind(), "corrupt_store");
        assert_eq!(decode.kind(), "decode_failure");
        assert_ne!(corrupt.kind(), decode.kind());
    }

    #[test]
    fn test_all_store_failures_are_server_errors() {
        let err = CatalogError::Io {
            path: "library.json".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.status_code(), 500);
    }
}
