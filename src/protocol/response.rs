//! Response definitions
//!
//! A response is every byte the server sent before closing the stream.
//! It is an error iff it starts with `SDTP-ERROR:` (ASCII, any case).

use crate::error::{LcbError, Result};

/// Marker that opens every error response
pub const ERROR_MARKER: &str = "SDTP-ERROR:";

/// A classified response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    payload: Vec<u8>,
    error_message: Option<String>,
}

impl RawResponse {
    /// Classify a complete response buffer
    ///
    /// Only the marker-sized prefix is inspected; the full text is decoded
    /// once the buffer is known to be an error.
    pub fn classify(payload: Vec<u8>) -> Self {
        if is_error_payload(&payload) {
            let message = String::from_utf8_lossy(&payload).into_owned();
            Self {
                payload: Vec::new(),
                error_message: Some(message),
            }
        } else {
            Self {
                payload,
                error_message: None,
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Full server text of an error response
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Data of a successful response; `None` for errors
    pub fn payload(&self) -> Option<&[u8]> {
        if self.is_error() {
            None
        } else {
            Some(&self.payload)
        }
    }

    /// Turn into the payload or a protocol error
    pub fn into_result(self) -> Result<Vec<u8>> {
        match self.error_message {
            Some(message) => Err(LcbError::Protocol(message)),
            None => Ok(self.payload),
        }
    }
}

/// Whether a buffer begins with the error marker
pub fn is_error_payload(bytes: &[u8]) -> bool {
    let marker = ERROR_MARKER.as_bytes();
    bytes.len() >= marker.len() && bytes[..marker.len()].eq_ignore_ascii_case(marker)
}
