//! Version records
//!
//! One record per stored version, as listed by the server.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

/// Property holding the version timestamp
pub const DATE_PROPERTY: &str = "Date";

/// Value of one record property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Date(DateTime<FixedOffset>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            PropertyValue::Date(date) => Some(*date),
            PropertyValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Date(date) => f.write_str(&date.to_rfc3339()),
        }
    }
}

/// One stored version of a clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub clipboard: String,

    /// Numeric token, kept as text so `007` stays `007`
    pub version: String,

    /// Properties in listing order
    pub properties: IndexMap<String, PropertyValue>,
}

impl VersionRecord {
    pub fn new(clipboard: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            clipboard: clipboard.into(),
            version: version.into(),
            properties: IndexMap::new(),
        }
    }

    /// Add a property; a repeated name keeps its first position
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name.into(), value);
    }

    /// Look up a property by name, ignoring ASCII case
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Parsed `Date` property, if present and parseable
    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        self.get(DATE_PROPERTY).and_then(PropertyValue::as_date)
    }
}

impl fmt::Display for VersionRecord {
    /// Listing form: header line plus indented properties
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Item {}:{}", self.clipboard, self.version)?;
        for (name, value) in &self.properties {
            writeln!(f, "  {}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Render records back into the listing format the server sends
pub fn render_listing(records: &[VersionRecord]) -> String {
    records.iter().map(|record| record.to_string()).collect()
}
