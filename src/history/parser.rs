//! History listing parser
//!
//! Lines are classified by a small tokenizer and fed to a two-state
//! machine. A record is emitted when the next header arrives or the
//! input ends.
//!
//! ```text
//!                 header                         header (emit current)
//! NoCurrentRecord ───────▶ BuildingRecord(rec) ◀──────────────┐
//!                               │   property: add to rec      │
//!                               └─────────────────────────────┘
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use super::record::{PropertyValue, VersionRecord, DATE_PROPERTY};

/// Header keyword, matched without regard to case
const HEADER_KEYWORD: &str = "item";

/// Naive date-time layouts accepted for `Date`, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
];

/// Offset-carrying layouts accepted for `Date`
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Date-only layouts, read as midnight UTC
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

// =============================================================================
// Tokenizer
// =============================================================================

/// What a single listing line means
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    /// `Item <clipboard>:<version>`
    Header { version: &'a str },

    /// `<name>: <value>`
    Property { name: &'a str, value: &'a str },

    Other,
}

/// Split on `\r\n`, `\r` or `\n`
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn classify<'a>(line: &'a str, clipboard: &str) -> Line<'a> {
    let line = line.trim();

    if let Some(version) = match_header(line, clipboard) {
        return Line::Header { version };
    }

    // An `Item` line for another clipboard is a foreign header, not a property
    if starts_with_keyword(line) {
        return Line::Other;
    }

    match line.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Line::Property {
            name: name.trim(),
            value: value.trim(),
        },
        _ => Line::Other,
    }
}

/// Whether the first token of a trimmed line is the header keyword
fn starts_with_keyword(line: &str) -> bool {
    let first = line.split(char::is_whitespace).next().unwrap_or_default();
    first.eq_ignore_ascii_case(HEADER_KEYWORD)
}

/// Version token of a header for `clipboard`, if `line` is one
fn match_header<'a>(line: &'a str, clipboard: &str) -> Option<&'a str> {
    let keyword = line.get(..HEADER_KEYWORD.len())?;
    if !keyword.eq_ignore_ascii_case(HEADER_KEYWORD) {
        return None;
    }

    let rest = &line[HEADER_KEYWORD.len()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, version) = rest.trim_start().rsplit_once(':')?;
    let is_version = !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit());

    (is_version && name.to_lowercase() == clipboard.to_lowercase()).then_some(version)
}

// =============================================================================
// Dates
// =============================================================================

/// Parse a `Date` property value
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date);
    }
    if let Some(date) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(date);
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Some(naive) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(naive.and_utc().fixed_offset());
    }

    DateTime::parse_from_rfc2822(value).ok()
}

fn property_value(name: &str, value: &str) -> PropertyValue {
    if !name.eq_ignore_ascii_case(DATE_PROPERTY) {
        return PropertyValue::Text(value.to_string());
    }

    match parse_date(value) {
        Some(date) => PropertyValue::Date(date),
        None => {
            tracing::warn!("Unrecognized date {:?}, keeping it as text", value);
            PropertyValue::Text(value.to_string())
        }
    }
}

// =============================================================================
// State Machine
// =============================================================================

#[derive(Debug)]
enum State {
    NoCurrentRecord,
    BuildingRecord(VersionRecord),
}

/// Incremental history parser for one clipboard
#[derive(Debug)]
pub struct HistoryParser {
    clipboard: String,
    state: State,
    records: Vec<VersionRecord>,
}

impl HistoryParser {
    pub fn new(clipboard: impl Into<String>) -> Self {
        Self {
            clipboard: clipboard.into(),
            state: State::NoCurrentRecord,
            records: Vec::new(),
        }
    }

    /// Feed one line (without its terminator)
    pub fn feed(&mut self, line: &str) {
        let state = std::mem::replace(&mut self.state, State::NoCurrentRecord);

        self.state = match (state, classify(line, &self.clipboard)) {
            (current, Line::Header { version }) => {
                self.emit(current);
                State::BuildingRecord(VersionRecord::new(self.clipboard.clone(), version))
            }
            (State::BuildingRecord(mut record), Line::Property { name, value }) => {
                record.insert(name, property_value(name, value));
                State::BuildingRecord(record)
            }
            (current, _) => current,
        };
    }

    /// End of input: emit the open record and return everything in order
    pub fn finish(mut self) -> Vec<VersionRecord> {
        let state = std::mem::replace(&mut self.state, State::NoCurrentRecord);
        self.emit(state);
        self.records
    }

    fn emit(&mut self, state: State) {
        if let State::BuildingRecord(record) = state {
            self.records.push(record);
        }
    }
}

/// Parse a history listing into version records, in listing order
///
/// Lines that are neither headers nor properties of an open record are
/// skipped. No headers means no records.
pub fn parse_history(clipboard: &str, text: &str) -> Vec<VersionRecord> {
    let mut parser = HistoryParser::new(clipboard);
    for line in split_lines(text) {
        parser.feed(line);
    }
    parser.finish()
}
