//! Request definitions
//!
//! A request names one clipboard and what to do with it. The path is
//! rendered by literal substitution:
//!
//! ```text
//! /lcb/<name>               read latest
//! /lcb/<name>:<version>     read version
//! /lcb/<name>:q             history listing
//! /lcb/<name>:D             delete clipboard
//! /lcb/<name>:<version>:d   delete version
//! ```

use crate::error::{LcbError, Result};
use super::{Method, WireMethod};

/// Prefix of every clipboard path
pub const PATH_PREFIX: &str = "/lcb/";

/// Protocol tag closing the request line
pub const PROTOCOL_VERSION: &str = "SDTP/1.0";

/// Path suffix selecting what part of a clipboard a request touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Newest version (also the target of writes)
    Latest,

    /// One stored version
    Version(String),

    /// The history listing
    History,

    /// Every version of the clipboard
    DeleteAll,

    /// One stored version, deleted
    DeleteVersion(String),
}

impl Target {
    /// Suffix appended after the clipboard name
    pub fn suffix(&self) -> String {
        match self {
            Target::Latest => String::new(),
            Target::Version(version) => format!(":{}", version),
            Target::History => ":q".to_string(),
            Target::DeleteAll => ":D".to_string(),
            Target::DeleteVersion(version) => format!(":{}:d", version),
        }
    }
}

/// One SDTP request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    clipboard: String,
    target: Target,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Read the latest version of a clipboard
    pub fn read(clipboard: impl Into<String>) -> Result<Self> {
        Self::build(Method::Read, clipboard.into(), Target::Latest, None)
    }

    /// Read one version of a clipboard
    pub fn read_version(clipboard: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        validate_version(&version)?;
        Self::build(Method::Read, clipboard.into(), Target::Version(version), None)
    }

    /// Read the history listing of a clipboard
    pub fn history(clipboard: impl Into<String>) -> Result<Self> {
        Self::build(Method::Read, clipboard.into(), Target::History, None)
    }

    /// Store a new version of a clipboard
    pub fn write(clipboard: impl Into<String>, body: Vec<u8>) -> Result<Self> {
        Self::build(Method::Write, clipboard.into(), Target::Latest, Some(body))
    }

    /// Delete a whole clipboard
    pub fn delete(clipboard: impl Into<String>) -> Result<Self> {
        Self::build(Method::Delete, clipboard.into(), Target::DeleteAll, None)
    }

    /// Delete one version of a clipboard
    pub fn delete_version(clipboard: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        validate_version(&version)?;
        Self::build(Method::Delete, clipboard.into(), Target::DeleteVersion(version), None)
    }

    fn build(method: Method, clipboard: String, target: Target, body: Option<Vec<u8>>) -> Result<Self> {
        validate_clipboard(&clipboard)?;
        Ok(Self {
            method,
            clipboard,
            target,
            body,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Verb written on the request line
    pub fn wire_method(&self) -> WireMethod {
        self.method.wire()
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Full request path, e.g. `/lcb/data:3:d`
    pub fn path(&self) -> String {
        format!("{}{}{}", PATH_PREFIX, self.clipboard, self.target.suffix())
    }

    /// Request line plus the blank line that ends the header
    pub fn encode_header(&self) -> String {
        format!("{} {} {}\n\n", self.wire_method(), self.path(), PROTOCOL_VERSION)
    }
}

/// Check that a clipboard name can be substituted into a path as-is
pub fn validate_clipboard(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LcbError::InvalidRequest(
            "clipboard name must not be empty".to_string(),
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| *c == ':' || c.is_whitespace() || c.is_control())
    {
        return Err(LcbError::InvalidRequest(format!(
            "clipboard name {:?} contains forbidden character {:?}",
            name, bad
        )));
    }
    Ok(())
}

/// Check that a version is a numeric token
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LcbError::InvalidRequest(format!(
            "version {:?} is not a number",
            version
        )));
    }
    Ok(())
}
