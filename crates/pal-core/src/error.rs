//! Error types for pal core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for pal operations.
pub type Result<T> = std::result::Result<T, PalError>;

/// Core error type for pal operations.
#[derive(Debug, Error)]
pub enum PalError {
    /// Malformed or empty required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// No entry carries the requested identity
    #[error("Entry not found: {0}")]
    NotFound(i64),

    /// Storage backend error (I/O, SQLite, corrupt records)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Two records share one identity
    #[error("Duplicate entry identity: {0}")]
    DuplicateIdentity(i64),
}

impl From<std::io::Error> for PalError {
    fn from(err: std::io::Error) -> Self {
        PalError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for PalError {
    fn from(err: rusqlite::Error) -> Self {
        PalError::Storage(format!("SQLite: {}", err))
    }
}

impl From<serde_json::Error> for PalError {
    fn from(err: serde_json::Error) -> Self {
        PalError::Storage(format!("Invalid record: {}", err))
    }
}
