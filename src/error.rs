//! Error types for lcb
//!
//! Provides a unified error type for all client operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using LcbError
pub type Result<T> = std::result::Result<T, LcbError>;

/// Unified error type for lcb operations
#[derive(Debug, Error)]
pub enum LcbError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// DNS, connect, read, write or timeout failure. Fatal for the call.
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The server answered with an `SDTP-ERROR:` payload. Holds the full text.
    #[error("{0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    /// Unknown text encoding label
    #[error("Unknown encoding: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A source file for a write could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LcbError {
    /// Whether a batch may carry on with its next item after this error
    ///
    /// Only failures scoped to one item qualify; a dead connection or a bad
    /// config will fail every later item the same way.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LcbError::Protocol(_) | LcbError::InvalidRequest(_) | LcbError::Encoding(_)
        )
    }
}
