//! Version Record Tests
//!
//! Tests for record accessors and listing rendering.

use lcb::history::{parse_history, render_listing, PropertyValue, VersionRecord};

fn sample_listing() -> &'static str {
    "Item data:1\n  Date: 2024-01-01\n  Size: 10\n  Content Type: text/plain\n\
     Item data:2\n  Date: 2024-02-01T08:30:00.250+05:30\n  Size: 20\n\
     Item data:010\n  Date: never\n"
}

#[test]
fn test_render_single_record() {
    let mut record = VersionRecord::new("data", "1");
    record.insert("Size", PropertyValue::Text("10".to_string()));
    assert_eq!(record.to_string(), "Item data:1\n  Size: 10\n");
}

#[test]
fn test_render_date_as_rfc3339() {
    let records = parse_history("data", "Item data:1\n  Date: 2024-01-01\n");
    assert_eq!(
        render_listing(&records),
        "Item data:1\n  Date: 2024-01-01T00:00:00+00:00\n"
    );
}

#[test]
fn test_render_empty() {
    assert_eq!(render_listing(&[]), "");
}

#[test]
fn test_reparse_rendered_listing_is_stable() {
    let records = parse_history("data", sample_listing());
    assert_eq!(records.len(), 3);

    let rendered = render_listing(&records);
    let reparsed = parse_history("data", &rendered);

    assert_eq!(reparsed, records);
    assert_eq!(render_listing(&reparsed), rendered);
}

#[test]
fn test_get_is_case_insensitive() {
    let records = parse_history("data", sample_listing());
    assert_eq!(records[0].get("size"), records[0].get("Size"));
    assert!(records[0].get("missing").is_none());
}

#[test]
fn test_property_value_accessors() {
    let records = parse_history("data", sample_listing());

    let date = records[1].get("Date").unwrap();
    assert!(date.as_date().is_some());
    assert!(date.as_text().is_none());

    let size = records[1].get("Size").unwrap();
    assert_eq!(size.as_text(), Some("20"));
    assert!(size.as_date().is_none());
}

#[test]
fn test_fractional_seconds_and_offset_survive_rendering() {
    let records = parse_history("data", sample_listing());
    let rendered = records[1].get("Date").unwrap().to_string();
    assert_eq!(rendered, "2024-02-01T08:30:00.250+05:30");
}
