use http::StatusCode;
use respond_impl::{RecordingSink, RespondError, ResponseSink};

#[test]
fn test_commit_assembles_raw_bytes() {
    let mut sink = RecordingSink::new();
    sink.set_status(StatusCode::CREATED);
    sink.set_header("Content-Type", "application/json");
    sink.write_body(br#"{"id":1}"#).unwrap();

    assert!(sink.is_written());
    let raw = sink.raw_bytes();
    assert!(raw.starts_with(b"HTTP/1.1 201 Created\r\n"));
    assert!(raw.ends_with(b"\r\n\r\n{\"id\":1}"));
}

#[test]
fn test_empty_commit_has_no_body() {
    let mut sink = RecordingSink::new();
    sink.set_status(StatusCode::NO_CONTENT);
    sink.write_body(&[]).unwrap();

    assert_eq!(sink.status(), StatusCode::NO_CONTENT);
    assert!(sink.body().is_empty());
    assert!(sink.raw_bytes().ends_with(b"\r\n\r\n"));
}

#[test]
fn test_status_defaults_to_ok() {
    let mut sink = RecordingSink::new();
    sink.write_body(&[]).unwrap();

    assert_eq!(sink.status(), StatusCode::OK);
    assert!(sink.raw_bytes().starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_second_commit_rejected() {
    let mut sink = RecordingSink::new();
    sink.set_status(StatusCode::OK);
    sink.write_body(b"first").unwrap();

    let err = sink.write_body(b"second").unwrap_err();
    assert!(matches!(err, RespondError::AlreadyWritten));
    assert_eq!(sink.body().as_ref(), b"first");
}

#[test]
fn test_mutation_after_commit_ignored() {
    let mut sink = RecordingSink::new();
    sink.set_status(StatusCode::OK);
    sink.write_body(b"body").unwrap();

    sink.set_status(StatusCode::INTERNAL_SERVER_ERROR);
    sink.set_header("Content-Type", "text/plain");

    assert_eq!(sink.status(), StatusCode::OK);
    assert!(sink.header("Content-Type").is_none());
}

#[test]
fn test_invalid_header_dropped() {
    let mut sink = RecordingSink::new();
    sink.set_header("Bad\r\nName", "value");
    sink.write_body(&[]).unwrap();

    assert!(sink.headers().is_empty());
}

#[test]
fn test_raw_bytes_empty_before_commit() {
    let mut sink = RecordingSink::new();
    sink.set_status(StatusCode::OK);

    assert!(!sink.is_written());
    assert!(sink.raw_bytes().is_empty());
}
