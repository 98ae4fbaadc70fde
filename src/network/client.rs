//! Clipboard Client
//!
//! Typed operations over [`send`](super::send). Each call is one
//! independent round trip.

use chrono::{DateTime, FixedOffset};

use crate::config::ClientConfig;
use crate::encoding::{self, Body, Decoded};
use crate::error::{LcbError, Result};
use crate::history::{parse_history, VersionRecord};
use crate::protocol::Request;
use super::send;

/// Outcome of one name in a batch
#[derive(Debug)]
pub struct BatchItem<T> {
    pub clipboard: String,
    pub result: Result<T>,
}

/// Client for one clipboard server
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Create a client for an already-resolved destination
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform a request and return its payload
    ///
    /// An `SDTP-ERROR:` reply becomes [`LcbError::Protocol`].
    pub fn send(&self, request: &Request) -> Result<Vec<u8>> {
        send(&self.config, request)?.into_result()
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// Read the latest or a specific version, byte for byte
    pub fn get(&self, clipboard: &str, version: Option<&str>) -> Result<Vec<u8>> {
        let request = match version {
            Some(version) => Request::read_version(clipboard, version)?,
            None => Request::read(clipboard)?,
        };
        self.send(&request)
    }

    /// Read a version and decode it with an optional encoding label
    pub fn get_decoded(
        &self,
        clipboard: &str,
        version: Option<&str>,
        encoding: Option<&str>,
    ) -> Result<Decoded> {
        let payload = self.get(clipboard, version)?;
        Ok(encoding::decode(payload, encoding))
    }

    // =========================================================================
    // Write
    // =========================================================================

    /// Store a new version
    pub fn set(&self, clipboard: &str, body: Body) -> Result<()> {
        let request = Request::write(clipboard, body.into_bytes())?;
        self.send(&request)?;
        Ok(())
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Delete every version of a clipboard
    ///
    /// The server answers on the read channel; the payload is checked for
    /// an error and otherwise discarded.
    pub fn delete(&self, clipboard: &str) -> Result<()> {
        self.send(&Request::delete(clipboard)?)?;
        Ok(())
    }

    /// Delete one version of a clipboard
    pub fn delete_version(&self, clipboard: &str, version: &str) -> Result<()> {
        self.send(&Request::delete_version(clipboard, version)?)?;
        Ok(())
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Fetch and parse the history listing
    pub fn history(&self, clipboard: &str) -> Result<Vec<VersionRecord>> {
        let payload = self.send(&Request::history(clipboard)?)?;
        let text = String::from_utf8_lossy(&payload);
        Ok(parse_history(clipboard, &text))
    }

    /// History restricted to versions dated at or after `since`
    pub fn history_since(
        &self,
        clipboard: &str,
        since: DateTime<FixedOffset>,
    ) -> Result<Vec<VersionRecord>> {
        Ok(filter_since(self.history(clipboard)?, since))
    }

    // =========================================================================
    // Batch
    // =========================================================================

    /// Read several clipboards in order
    pub fn get_many<S: AsRef<str>>(
        &self,
        clipboards: &[S],
        version: Option<&str>,
    ) -> Vec<BatchItem<Vec<u8>>> {
        run_batch(clipboards, |name| self.get(name, version))
    }

    /// Delete several clipboards (or one version of each) in order
    pub fn delete_many<S: AsRef<str>>(
        &self,
        clipboards: &[S],
        version: Option<&str>,
    ) -> Vec<BatchItem<()>> {
        run_batch(clipboards, |name| match version {
            Some(version) => self.delete_version(name, version),
            None => self.delete(name),
        })
    }
}

/// Keep records whose `Date` is at or after `since`
pub fn filter_since(records: Vec<VersionRecord>, since: DateTime<FixedOffset>) -> Vec<VersionRecord> {
    records
        .into_iter()
        .filter(|record| record.date().is_some_and(|date| date >= since))
        .collect()
}

/// Run `op` for each name sequentially
///
/// Recoverable failures are recorded and the batch moves on; a connection
/// failure is recorded and ends the batch.
fn run_batch<S, T, F>(clipboards: &[S], mut op: F) -> Vec<BatchItem<T>>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<T>,
{
    let mut items = Vec::with_capacity(clipboards.len());

    for name in clipboards {
        let name = name.as_ref();
        let result = op(name);

        let stop = match &result {
            Err(e) if !e.is_recoverable() => {
                tracing::warn!("Batch stopped at {}: {}", name, e);
                true
            }
            Err(e) => {
                tracing::debug!("Batch item {} failed: {}", name, e);
                false
            }
            Ok(_) => false,
        };

        items.push(BatchItem {
            clipboard: name.to_string(),
            result,
        });

        if stop {
            break;
        }
    }

    items
}

impl<T> BatchItem<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The error, if this item failed at the protocol level
    pub fn protocol_error(&self) -> Option<&str> {
        match &self.result {
            Err(LcbError::Protocol(message)) => Some(message),
            _ => None,
        }
    }
}
