//! Integration tests for single replacements and case adaptation

use lexiclear_engine::{adapt_case, replace_at, shift_position};
use lexiclear_foundation::ErrorKind;

#[test]
fn offset_round_trip() {
    let (text, delta) = replace_at("I will accept this.", 7, "accept", "deny").unwrap();
    assert_eq!(text, "I will deny this.");
    assert_eq!(delta, -2);

    // A later match recorded at 100 now lives at 98
    assert_eq!(shift_position(100, delta).unwrap(), 98);
}

#[test]
fn equal_length_has_zero_delta() {
    let (text, delta) = replace_at("accept", 0, "accept", "except").unwrap();
    assert_eq!(text, "except");
    assert_eq!(delta, 0);
}

#[test]
fn stale_offset_is_rejected() {
    let err = replace_at("I will deny this.", 7, "accept", "except").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PositionMismatch { position: 7, .. }));
}

#[test]
fn case_preservation_table() {
    let cases = [
        ("ACCEPT", "except", "EXCEPT"),
        ("accept", "EXCEPT", "except"),
        ("Accept", "except", "Except"),
        ("Accept", "except all", "Except all"),
        ("AcCePt", "except", "except"),
        ("", "except", "except"),
    ];
    for (source, target, expected) in cases {
        assert_eq!(adapt_case(source, target), expected, "{source} -> {target}");
    }
}

#[test]
fn non_ascii_case() {
    assert_eq!(adapt_case("ÉTÉ", "hiver"), "HIVER");
    assert_eq!(adapt_case("Été", "hiver"), "Hiver");
}
