//! Request Tests
//!
//! Tests for path construction, method mapping and validation.

use lcb::protocol::{Method, Request, Target, WireMethod};
use lcb::LcbError;

// =============================================================================
// Path Construction Tests
// =============================================================================

#[test]
fn test_read_latest_path() {
    let req = Request::read("data").unwrap();
    assert_eq!(req.path(), "/lcb/data");
    assert_eq!(req.target(), &Target::Latest);
}

#[test]
fn test_read_version_path() {
    let req = Request::read_version("data", "7").unwrap();
    assert_eq!(req.path(), "/lcb/data:7");
}

#[test]
fn test_history_path() {
    let req = Request::history("data").unwrap();
    assert_eq!(req.path(), "/lcb/data:q");
}

#[test]
fn test_delete_all_path() {
    let req = Request::delete("data").unwrap();
    assert_eq!(req.path(), "/lcb/data:D");
}

#[test]
fn test_delete_version_path() {
    let req = Request::delete_version("data", "3").unwrap();
    assert_eq!(req.path(), "/lcb/data:3:d");
    assert_eq!(req.wire_method(), WireMethod::Get);
    assert_eq!(req.method(), Method::Delete);
}

#[test]
fn test_write_path_carries_body() {
    let req = Request::write("data", b"payload".to_vec()).unwrap();
    assert_eq!(req.path(), "/lcb/data");
    assert_eq!(req.body(), Some(&b"payload"[..]));
}

#[test]
fn test_version_keeps_leading_zeros() {
    let req = Request::read_version("data", "007").unwrap();
    assert_eq!(req.path(), "/lcb/data:007");
}

#[test]
fn test_name_substituted_literally() {
    let req = Request::read("my.clip-board_%41").unwrap();
    assert_eq!(req.path(), "/lcb/my.clip-board_%41");
}

// =============================================================================
// Method Mapping Tests
// =============================================================================

#[test]
fn test_wire_methods() {
    assert_eq!(Method::Read.wire(), WireMethod::Get);
    assert_eq!(Method::Write.wire(), WireMethod::Put);
    assert_eq!(Method::Delete.wire(), WireMethod::Get);
}

#[test]
fn test_encode_header_format() {
    let req = Request::read("data").unwrap();
    assert_eq!(req.encode_header(), "GET /lcb/data SDTP/1.0\n\n");

    let req = Request::write("data", vec![1, 2, 3]).unwrap();
    assert_eq!(req.encode_header(), "PUT /lcb/data SDTP/1.0\n\n");

    let req = Request::delete("data").unwrap();
    assert_eq!(req.encode_header(), "GET /lcb/data:D SDTP/1.0\n\n");
}

#[test]
fn test_reads_and_deletes_have_no_body() {
    assert!(Request::read("a").unwrap().body().is_none());
    assert!(Request::history("a").unwrap().body().is_none());
    assert!(Request::delete("a").unwrap().body().is_none());
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_empty_name_rejected() {
    assert!(matches!(Request::read(""), Err(LcbError::InvalidRequest(_))));
}

#[test]
fn test_name_with_separator_rejected() {
    assert!(matches!(Request::read("a:b"), Err(LcbError::InvalidRequest(_))));
}

#[test]
fn test_name_with_whitespace_rejected() {
    assert!(matches!(Request::read("a b"), Err(LcbError::InvalidRequest(_))));
    assert!(matches!(Request::read("a\nb"), Err(LcbError::InvalidRequest(_))));
}

#[test]
fn test_non_numeric_version_rejected() {
    assert!(matches!(
        Request::read_version("data", "latest"),
        Err(LcbError::InvalidRequest(_))
    ));
    assert!(matches!(
        Request::delete_version("data", ""),
        Err(LcbError::InvalidRequest(_))
    ));
    assert!(matches!(
        Request::delete_version("data", "-1"),
        Err(LcbError::InvalidRequest(_))
    ));
}

#[test]
fn test_invalid_request_is_recoverable() {
    let err = Request::read("").unwrap_err();
    assert!(err.is_recoverable());
}
