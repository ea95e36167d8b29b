//! Tests for reading and writing files

use std::fs;

use lexiclear_foundation::{ErrorKind, TermKind};
use lexiclear_runtime::{Settings, io};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};
use tempfile::TempDir;

#[test]
fn read_text_within_limit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("essay.txt");
    fs::write(&path, "naïve café").unwrap();

    // ten characters, twelve bytes
    let settings = Settings::default().with_max_characters(10);
    assert_eq!(io::read_text(&path, &settings).unwrap(), "naïve café");
}

#[test]
fn read_text_over_limit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("essay.txt");
    fs::write(&path, "too long").unwrap();

    let err = io::read_text(&path, &Settings::default().with_max_characters(3)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TextTooLong { length: 8, limit: 3 }));
    let source = err.context.and_then(|c| c.source).unwrap();
    assert!(source.ends_with("essay.txt"));
}

#[test]
fn read_text_rejects_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("essay.md");
    fs::write(&path, "text").unwrap();

    let err = io::read_text(&path, &Settings::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedFormat { .. }));
}

#[test]
fn read_missing_text_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = io::read_text(dir.path().join("missing.txt"), &Settings::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn write_text_appends_extension() {
    let dir = TempDir::new().unwrap();
    let written = io::write_text(dir.path().join("checked"), "done").unwrap();
    assert_eq!(written, dir.path().join("checked.txt"));
    assert_eq!(fs::read_to_string(written).unwrap(), "done");

    let written = io::write_text(dir.path().join("kept.TXT"), "x").unwrap();
    assert_eq!(written, dir.path().join("kept.TXT"));
}

#[test]
fn vocabulary_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    let vocab = Vocabulary::new(vec![
        AmbiguousTerm::new(1, "accept", "to receive", TermKind::Other).with_related([2]),
        AmbiguousTerm::new(2, "except", "excluding", TermKind::Other).with_related([1]),
    ])
    .unwrap();

    io::save_vocabulary(&path, &vocab).unwrap();
    let loaded = io::load_vocabulary(&path).unwrap();
    assert_eq!(loaded.terms(), vocab.terms());
}

#[test]
fn malformed_vocabulary_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"not": "an array"}"#).unwrap();

    let err = io::load_vocabulary(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedVocabulary { .. }));
    assert!(err.context.is_some());
}

#[test]
fn lexicon_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.json");
    fs::write(&path, r#"{"banks": {"lemma": "bank", "pos": "NOUN"}}"#).unwrap();

    let lexicon = io::load_lexicon(&path).unwrap();
    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.lookup("Banks").unwrap().lemma, "bank");
}
