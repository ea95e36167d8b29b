//! Tests for the review REPL driven by scripted input

use std::collections::VecDeque;

use lexiclear_engine::Review;
use lexiclear_foundation::{Result, TermId, TermKind};
use lexiclear_matcher::MatchRecord;
use lexiclear_runtime::repl::{Command, Response};
use lexiclear_runtime::{LineEditor, ReadResult, Repl, Settings};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};
use tempfile::TempDir;

struct ScriptedEditor {
    lines: VecDeque<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn vocabulary() -> Vocabulary {
    Vocabulary::new(vec![
        AmbiguousTerm::new(1, "accept", "to receive", TermKind::Other).with_related([2]),
        AmbiguousTerm::new(2, "except", "excluding", TermKind::Other).with_related([1]),
    ])
    .unwrap()
}

fn review() -> Review {
    Review::new(
        "I will accept this, except that one.",
        vec![
            MatchRecord::new("accept", 7, TermId::new(1)),
            MatchRecord::new("except", 20, TermId::new(2)),
        ],
    )
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(lines), review(), vocabulary(), Settings::default()).without_banner()
}

#[test]
fn parse_commands() {
    assert_eq!(Command::parse("n"), Ok(Command::Next));
    assert_eq!(Command::parse("pick 2"), Ok(Command::Pick(2)));
    assert_eq!(Command::parse("export"), Ok(Command::Export(None)));
    assert!(Command::parse("pick two").is_err());
    assert!(Command::parse("next 3").is_err());
    assert!(Command::parse("frobnicate").is_err());
}

#[test]
fn pick_then_text() {
    let mut repl = repl(&[]);
    let Response::Output(out) = repl.execute(Command::Pick(2)).unwrap() else {
        panic!("expected output");
    };
    assert!(out.contains("except"));
    assert!(out.contains("1/2"));

    let Response::Output(text) = repl.execute(Command::Text).unwrap() else {
        panic!("expected output");
    };
    assert_eq!(text, "I will except this, except that one.");
}

#[test]
fn out_of_range_pick_changes_nothing() {
    let mut repl = repl(&[]);
    repl.execute(Command::Pick(9)).unwrap();
    assert_eq!(repl.review().progress(), (0, 2));
}

#[test]
fn scripted_session_exports() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("checked");
    let export = format!("export {}", target.display());

    let mut repl = repl(&["pick 2", "next", "pick 1", "bogus", &export, "quit"]);
    repl.run().unwrap();

    assert_eq!(repl.review().progress(), (2, 2));
    let written = std::fs::read_to_string(dir.path().join("checked.txt")).unwrap();
    assert_eq!(written, "I will except this, except that one.");
}

#[test]
fn save_and_restore_through_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("review.msgpack");

    let mut repl = repl(&[]);
    repl.execute(Command::Pick(2)).unwrap();
    repl.execute(Command::Save(path.clone())).unwrap();

    let mut other = Repl::with_editor(
        ScriptedEditor::new(&[]),
        review(),
        vocabulary(),
        Settings::default(),
    );
    other.execute(Command::Restore(path)).unwrap();
    assert_eq!(other.review().progress(), (1, 2));
}

#[test]
fn quit_response() {
    assert_eq!(repl(&[]).execute(Command::Quit).unwrap(), Response::Quit);
}

#[test]
fn corrupted_snapshot_keeps_current_review() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("review.msgpack");
    let corrupted = Review::new(
        "I will accept this.",
        vec![MatchRecord::new("accept", usize::MAX - 2, TermId::new(1))],
    );
    lexiclear_runtime::snapshot::save_to_file(&corrupted, &path).unwrap();

    let mut repl = repl(&[]);
    repl.execute(Command::Pick(2)).unwrap();
    assert!(repl.execute(Command::Restore(path)).is_err());
    assert_eq!(repl.review().progress(), (1, 2));
    assert_eq!(repl.review().text(), "I will accept this, except that one.");
}
