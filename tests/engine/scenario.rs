//! End-to-end: detect, choose, export

use lexiclear_engine::{Review, resolve_all};
use lexiclear_foundation::{TermId, TermKind};
use lexiclear_matcher::{Choice, LexiconTagger, find_matches};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};

fn accept_except() -> Vocabulary {
    Vocabulary::from_json(
        br#"[
            {"id": 1, "word": "accept", "meaning": "to receive", "kind": 2, "relatedIds": [2], "variants": []},
            {"id": 2, "word": "except", "meaning": "excluding", "kind": 2, "relatedIds": [1], "variants": []}
        ]"#,
    )
    .unwrap()
}

#[test]
fn accept_except_scenario() {
    let vocab = accept_except();
    let text = "I will accept this, except that one.";

    let mut records = find_matches(text, &vocab, &mut LexiconTagger::new()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].position, records[0].term_id), (7, TermId::new(1)));
    assert_eq!((records[1].position, records[1].term_id), (20, TermId::new(2)));

    records[0].choose(Choice::Related {
        related_index: 0,
        variant_index: 0,
    });

    assert_eq!(
        resolve_all(text, &records, &vocab).unwrap(),
        "I will except this, except that one."
    );
}

#[test]
fn scenario_through_review() {
    let vocab = accept_except();
    let text = "Accept it. ACCEPT it!";
    let records = find_matches(text, &vocab, &mut LexiconTagger::new()).unwrap();
    let mut review = Review::new(text, records);

    for _ in 0..review.records().len() {
        let related = review.options(&vocab).unwrap()[1].choice;
        review.choose(related);
        review.next();
    }

    assert_eq!(review.export(&vocab).unwrap(), "Except it. EXCEPT it!");
}

#[test]
fn lemma_and_lexical_together() {
    let vocab = Vocabulary::new(vec![
        AmbiguousTerm::new(1, "lose", "to misplace", TermKind::Verb)
            .with_related([2])
            .with_variants(["lose", "loses", "lost"]),
        AmbiguousTerm::new(2, "loose", "not tight", TermKind::Other).with_related([1]),
    ])
    .unwrap();
    let mut tagger = LexiconTagger::new().with_entry("loses", "lose", "VERB");
    let text = "He loses the loose screw.";

    let mut records = find_matches(text, &vocab, &mut tagger).unwrap();
    let surfaces: Vec<_> = records.iter().map(|r| r.surface_text.as_str()).collect();
    assert_eq!(surfaces, vec!["loses", "loose"]);

    records[1].choose(Choice::Related {
        related_index: 0,
        variant_index: 0,
    });
    assert_eq!(
        resolve_all(text, &records, &vocab).unwrap(),
        "He loses the lose screw."
    );
}

#[test]
fn multibyte_text_keeps_later_positions_valid() {
    let vocab = Vocabulary::new(vec![
        AmbiguousTerm::new(1, "accept", "to receive", TermKind::Other)
            .with_related([2])
            .with_variants(["accept", "accepté"]),
        AmbiguousTerm::new(2, "except", "excluding", TermKind::Other).with_related([1]),
    ])
    .unwrap();
    let text = "Déjà: accept ça, except ça.";

    let mut records = find_matches(text, &vocab, &mut LexiconTagger::new()).unwrap();
    let positions: Vec<_> = records.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![6, 17]);

    records[0].choose(Choice::BaseVariant(1));
    records[1].choose(Choice::Related {
        related_index: 0,
        variant_index: 0,
    });

    assert_eq!(
        resolve_all(text, &records, &vocab).unwrap(),
        "Déjà: accepté ça, accept ça."
    );
}
