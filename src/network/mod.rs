//! Network Module
//!
//! TCP transport and the clipboard client built on it.
//!
//! ## Model
//! - One request per connection, on the calling thread
//! - No pooling, no retries
//! - Timeouts surface as connection errors

mod connection;
mod client;

pub use connection::{send, Connection};
pub use client::{filter_since, BatchItem, Client};
