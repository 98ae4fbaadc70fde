//! Encoding Module
//!
//! Moves payloads between raw bytes and text.
//!
//! - No label: bytes pass through untouched.
//! - Known label: bytes are decoded / text is encoded with it.
//! - Unknown label: never fatal. Incoming bytes stay bytes; outgoing text
//!   is encoded as UTF-8.
//!
//! Labels follow the WHATWG registry (`utf-8`, `latin1`, `windows-1252`,
//! `shift_jis`, ...). Encoding into UTF-16 is not supported by that
//! registry and produces UTF-8.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{LcbError, Result};

/// Resolve an encoding label
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| LcbError::Encoding(label.to_string()))
}

/// Resolve a label, degrading to `None` with a warning when unknown
fn resolve_lenient(label: &str) -> Option<&'static Encoding> {
    match resolve(label) {
        Ok(encoding) => Some(encoding),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

// =============================================================================
// Incoming
// =============================================================================

/// A payload after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Bytes(Vec<u8>),
    Text(String),
}

impl Decoded {
    pub fn is_text(&self) -> bool {
        matches!(self, Decoded::Text(_))
    }

    /// Bytes for output; text is written as UTF-8
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Bytes(bytes) => bytes,
            Decoded::Text(text) => text.into_bytes(),
        }
    }
}

/// Normalize a payload received from the server
///
/// Malformed input under a known encoding is replaced with U+FFFD.
pub fn decode(payload: Vec<u8>, encoding: Option<&str>) -> Decoded {
    let Some(encoding) = encoding.and_then(resolve_lenient) else {
        return Decoded::Bytes(payload);
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(&payload);
    if had_errors {
        tracing::debug!("Payload is not valid {}, replaced malformed bytes", encoding.name());
    }
    Decoded::Text(text.into_owned())
}

// =============================================================================
// Outgoing
// =============================================================================

/// Data to store in a clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Sent exactly as given
    Bytes(Vec<u8>),

    /// Encoded with `encoding`, or UTF-8 when absent or unknown
    Text {
        text: String,
        encoding: Option<String>,
    },
}

impl Body {
    pub fn text(text: impl Into<String>, encoding: Option<&str>) -> Self {
        Body::Text {
            text: text.into(),
            encoding: encoding.map(str::to_string),
        }
    }

    /// Read a source file as raw bytes
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        fs::read(path).map(Body::Bytes).map_err(|source| LcbError::SourceFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Wire bytes for this body
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Bytes(bytes) => bytes,
            Body::Text { text, encoding } => encode(&text, encoding.as_deref()),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(bytes)
    }
}

/// Encode text for the wire
pub fn encode(text: &str, encoding: Option<&str>) -> Vec<u8> {
    let encoding = encoding
        .and_then(resolve_lenient)
        .unwrap_or(UTF_8);

    let (bytes, used, had_unmappable) = encoding.encode(text);
    if used != encoding {
        tracing::debug!("{} cannot be encoded to, used {}", encoding.name(), used.name());
    }
    if had_unmappable {
        tracing::debug!("Text has characters outside {}, wrote numeric references", used.name());
    }
    bytes.into_owned()
}
