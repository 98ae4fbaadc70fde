//! # lcb
//!
//! Client for SDTP, the line-oriented protocol spoken by the remote
//! clipboard server:
//! - Read, write and delete versioned clipboards
//! - Error replies (`SDTP-ERROR:`) surfaced as typed errors
//! - Byte/text normalization with named encodings
//! - Parsing of the history listing into version records
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   CLI / caller                               │
//! │        (resolves server, port, name, version, body)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Client                                  │
//! │          (get / set / delete / history / batch)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┬─────────────────┐
//!          │                         │                 │
//!          ▼                         ▼                 ▼
//!   ┌─────────────┐          ┌─────────────┐   ┌─────────────┐
//!   │  Transport  │          │  Encoding   │   │   History   │
//!   │ (1 conn/req)│          │ (bytes/text)│   │  (parser)   │
//!   └──────┬──────┘          └─────────────┘   └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Protocol   │
//!   │   (codec)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod encoding;
pub mod history;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LcbError, Result};
pub use config::ClientConfig;
pub use network::Client;
pub use encoding::{Body, Decoded};
pub use history::{parse_history, VersionRecord};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of lcb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
