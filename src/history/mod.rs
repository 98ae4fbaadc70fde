//! History Module
//!
//! Turns the `:q` listing into version records.
//!
//! ## Listing Format
//! ```text
//! Item <name>:<version>
//!   Date: <date-time>
//!   <Property>: <value>
//! Item <name>:<version>
//!   ...
//! ```

mod record;
mod parser;

pub use record::{render_listing, PropertyValue, VersionRecord, DATE_PROPERTY};
pub use parser::{parse_date, parse_history, HistoryParser};
