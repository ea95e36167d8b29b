//! Integration tests for match records and choices

use lexiclear_foundation::TermId;
use lexiclear_matcher::{Choice, MatchRecord};

#[test]
fn legacy_encoding_table() {
    assert_eq!(Choice::Unresolved.to_legacy(), (false, -1, -1));
    assert_eq!(Choice::BaseTerm.to_legacy(), (true, -1, -1));
    assert_eq!(Choice::BaseVariant(2).to_legacy(), (true, 0, 2));
    assert_eq!(
        Choice::Related {
            related_index: 0,
            variant_index: 1
        }
        .to_legacy(),
        (true, 1, 1)
    );
}

#[test]
fn legacy_base_without_variant() {
    assert_eq!(Choice::from_legacy(true, 0, -1), Some(Choice::BaseTerm));
    assert_eq!(Choice::from_legacy(true, -1, 3), Some(Choice::BaseVariant(3)));
}

#[test]
fn record_display() {
    let record = MatchRecord::new("accept", 7, TermId::new(1));
    assert_eq!(record.to_string(), "\"accept\"@7 (#1)");
}

#[test]
fn choosing_again_replaces_choice() {
    let mut record = MatchRecord::new("accept", 7, TermId::new(1));
    record.choose(Choice::BaseTerm);
    record.choose(Choice::BaseVariant(1));
    assert_eq!(record.choice, Choice::BaseVariant(1));
    record.choose(Choice::Unresolved);
    assert!(!record.resolved());
}
