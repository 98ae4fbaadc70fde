//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! <GET|PUT> /lcb/<path-suffix> SDTP/1.0\n
//! \n
//! [body bytes, PUT only, no length prefix]
//! ```
//!
//! ### Response
//! ```text
//! raw bytes until the server closes the stream
//! ```
//!
//! The body is unframed; the client half-closes the stream after it so
//! the server sees end-of-stream.

use std::io::{Read, Write};
use crate::error::{LcbError, Result};
use super::{RawResponse, Request};

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request to bytes
///
/// Format: request line + blank line + optional body
pub fn encode_request(request: &Request) -> Vec<u8> {
    let header = request.encode_header();
    let body = request.body().unwrap_or(&[]);

    let mut message = Vec::with_capacity(header.len() + body.len());
    message.extend_from_slice(header.as_bytes());
    message.extend_from_slice(body);

    message
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(request.encode_header().as_bytes())?;
    if let Some(body) = request.body() {
        writer.write_all(body)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
///
/// Blocks until the peer closes its write side.
pub fn read_response<R: Read>(reader: &mut R) -> Result<RawResponse> {
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;
    Ok(RawResponse::classify(payload))
}

/// Salvage the server's reply after writing a request failed
///
/// A server may answer `SDTP-ERROR:` and close before reading the whole
/// body, which breaks the write. If that error reply is still readable it
/// replaces `write_error`; otherwise `write_error` is returned.
pub fn recover_error_response<R: Read>(reader: &mut R, write_error: LcbError) -> Result<RawResponse> {
    match read_response(reader) {
        Ok(response) if response.is_error() => {
            tracing::debug!("Write failed ({}), server replied with an error", write_error);
            Ok(response)
        }
        _ => Err(write_error),
    }
}
