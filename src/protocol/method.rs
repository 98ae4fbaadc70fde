//! Method definitions
//!
//! Caller-facing operations and the wire verbs they travel as.

use std::fmt;

/// What the caller wants done with a clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Read,
    Write,
    Delete,
}

/// Verb written on the request line
///
/// There is no wire-level DELETE: deletes go out as GET with a delete
/// directive in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireMethod {
    Get,
    Put,
}

impl Method {
    /// Get the wire verb for this method
    pub fn wire(&self) -> WireMethod {
        match self {
            Method::Read | Method::Delete => WireMethod::Get,
            Method::Write => WireMethod::Put,
        }
    }
}

impl WireMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireMethod::Get => "GET",
            WireMethod::Put => "PUT",
        }
    }

    /// Parse a request-line verb (exact, upper case)
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "GET" => Some(WireMethod::Get),
            "PUT" => Some(WireMethod::Put),
            _ => None,
        }
    }
}

impl fmt::Display for WireMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
