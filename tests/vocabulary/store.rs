//! Integration tests for the vocabulary store

use std::sync::Arc;

use lexiclear_foundation::{ErrorKind, TermId, TermKind};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};

fn homophones() -> Vocabulary {
    Vocabulary::new(vec![
        AmbiguousTerm::new(1, "accept", "to receive", TermKind::Other).with_related([2, 99]),
        AmbiguousTerm::new(2, "except", "excluding", TermKind::Other).with_related([1]),
        AmbiguousTerm::new(3, "lead", "to guide", TermKind::Verb).with_variants(["lead", "leads", "led"]),
    ])
    .unwrap()
}

#[test]
fn lookup_by_id() {
    let vocab = homophones();
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.get(TermId::new(2)).map(|t| t.word.as_str()), Some("except"));
    assert!(vocab.get(TermId::new(5)).is_none());
}

#[test]
fn duplicate_ids_rejected() {
    let err = Vocabulary::new(vec![
        AmbiguousTerm::new(1, "a", "", TermKind::Other),
        AmbiguousTerm::new(1, "b", "", TermKind::Other),
    ])
    .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedVocabulary { record: Some(1), .. }
    ));
}

#[test]
fn related_skips_dangling_ids() {
    let vocab = homophones();
    let accept = vocab.get(TermId::new(1)).unwrap();
    let related = vocab.related_of(accept);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].word, "except");
}

#[test]
fn related_is_cached() {
    let vocab = homophones();
    assert_eq!(vocab.related_cache_len(), 0);

    let accept = vocab.get(TermId::new(1)).unwrap();
    let first = vocab.related_of(accept);
    let second = vocab.related_of(accept);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(vocab.related_cache_len(), 1);
}

#[test]
fn terms_of_kind_keeps_order() {
    let vocab = homophones();
    let other: Vec<_> = vocab.terms_of_kind(TermKind::Other).map(|t| t.id).collect();
    assert_eq!(other, vec![TermId::new(1), TermId::new(2)]);
}

#[test]
fn candidates_fall_back_to_word() {
    let vocab = homophones();
    assert_eq!(vocab.get(TermId::new(1)).unwrap().candidates(), vec!["accept"]);
    assert_eq!(
        vocab.get(TermId::new(3)).unwrap().candidates(),
        vec!["lead", "leads", "led"]
    );
}

#[test]
fn shared_across_threads() {
    let vocab = Arc::new(homophones());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let vocab = Arc::clone(&vocab);
            std::thread::spawn(move || {
                let accept = vocab.get(TermId::new(1)).unwrap();
                vocab.related_of(accept).len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    assert_eq!(vocab.related_cache_len(), 1);
}
