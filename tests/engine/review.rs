//! Integration tests for the review model

use lexiclear_engine::Review;
use lexiclear_foundation::{TermId, TermKind};
use lexiclear_matcher::{Choice, MatchRecord};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};

fn vocabulary() -> Vocabulary {
    Vocabulary::new(vec![
        AmbiguousTerm::new(1, "affect", "to influence", TermKind::Verb)
            .with_related([2])
            .with_variants(["affect", "affects"]),
        AmbiguousTerm::new(2, "effect", "a result", TermKind::Noun).with_related([1]),
    ])
    .unwrap()
}

fn review() -> Review {
    Review::new(
        "It affects the effect.",
        vec![
            MatchRecord::new("affects", 3, TermId::new(1)),
            MatchRecord::new("effect", 15, TermId::new(2)),
        ],
    )
}

#[test]
fn options_for_term_with_variants() {
    let options = review().options(&vocabulary()).unwrap();
    let summary: Vec<_> = options
        .iter()
        .map(|o| (o.group, o.label.as_str(), o.choice))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "affect", Choice::BaseVariant(0)),
            (0, "affects", Choice::BaseVariant(1)),
            (
                1,
                "effect",
                Choice::Related {
                    related_index: 0,
                    variant_index: 0
                }
            ),
        ]
    );
    assert_eq!(options[2].meaning, "a result");
}

#[test]
fn picking_options_drives_export() {
    let vocab = vocabulary();
    let mut review = review();

    let effect = review.options(&vocab).unwrap()[2].choice;
    review.choose(effect);
    assert_eq!(review.preview(&vocab).unwrap().as_deref(), Some("effect"));

    review.next();
    let affects = review.options(&vocab).unwrap()[2].choice;
    review.choose(affects);

    assert_eq!(review.progress(), (2, 2));
    assert_eq!(review.export(&vocab).unwrap(), "It effect the affects.");
    assert_eq!(review.text(), "It affects the effect.");
}

#[test]
fn export_before_any_choice_is_identity() {
    let review = review();
    assert_eq!(review.export(&vocabulary()).unwrap(), review.text());
    assert_eq!(review.progress(), (0, 2));
}

#[test]
fn unknown_term_fails_options() {
    let review = Review::new("x", vec![MatchRecord::new("x", 0, TermId::new(9))]);
    assert!(review.options(&vocabulary()).is_err());
}
