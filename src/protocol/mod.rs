//! Protocol Module
//!
//! Defines the SDTP wire protocol spoken with the clipboard server.
//!
//! ## Request Format
//! ```text
//! <VERB> /lcb/<name>[suffix] SDTP/1.0\n\n[body]
//! ```
//!
//! ### Methods
//! - READ:   GET, path selects latest / version / history (`:q`)
//! - WRITE:  PUT, body follows the header
//! - DELETE: GET, path carries `:D` or `:<version>:d`
//!
//! ## Response Format
//! Raw bytes until end-of-stream. A response opening with `SDTP-ERROR:`
//! is an error and carries a human-readable message.

mod method;
mod request;
mod response;
mod codec;

pub use method::{Method, WireMethod};
pub use request::{
    validate_clipboard, validate_version, Request, Target, PATH_PREFIX, PROTOCOL_VERSION,
};
pub use response::{is_error_payload, RawResponse, ERROR_MARKER};
pub use codec::{encode_request, read_response, recover_error_response, write_request};
