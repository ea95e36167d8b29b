//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use lexiclear_foundation::{Error, ErrorContext, ErrorKind, IndexKind, TermId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_malformed_record() {
    let err = Error::malformed_record(2, "duplicate id 7");
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedVocabulary { record: Some(2), .. }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("record 2"));
    assert!(msg.contains("duplicate id 7"));
}

#[test]
fn error_malformed_document() {
    let err = Error::malformed_vocabulary("expected a JSON array");
    let msg = format!("{err}");
    assert!(!msg.contains("record"));
    assert!(msg.contains("expected a JSON array"));
}

#[test]
fn error_position_mismatch() {
    let err = Error::position_mismatch(7, "accept", "except");
    let msg = format!("{err}");
    assert!(msg.contains('7'));
    assert!(msg.contains("\"accept\""));
    assert!(msg.contains("\"except\""));
}

#[test]
fn error_index_out_of_range() {
    let err = Error::index_out_of_range(IndexKind::Variant, TermId::new(3), 4, 2);
    assert_eq!(
        format!("{err}"),
        "variant index 4 out of range for term #3 (2 available)"
    );
}

#[test]
fn error_term_not_found() {
    let err = Error::term_not_found(TermId::new(42));
    assert!(matches!(err.kind, ErrorKind::TermNotFound(_)));
    assert!(format!("{err}").contains("#42"));
}

#[test]
fn error_tagger() {
    let err = Error::tagger("model not loaded");
    assert_eq!(format!("{err}"), "tagger error: model not loaded");
}

#[test]
fn error_limits() {
    let err = Error::new(ErrorKind::TextTooLong {
        length: 12,
        limit: 10,
    });
    assert!(format!("{err}").contains("limit 10"));

    let err = Error::new(ErrorKind::UnsupportedFormat {
        extension: "pdf".to_string(),
        allowed: "txt".to_string(),
    });
    assert!(format!("{err}").contains("pdf"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_source_and_frames() {
    let context = ErrorContext::new()
        .with_source("words.json")
        .with_frame("loading vocabulary");
    let err = Error::io("permission denied").with_context(context);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("words.json"));
    assert_eq!(context.stack, vec!["loading vocabulary".to_string()]);

    let shown = format!("{context}");
    assert!(shown.starts_with("at words.json"));
    assert!(shown.contains("in loading vocabulary"));
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::io("disk full"));
}
