//! Ambiguous-term detection for Lexiclear.
//!
//! This crate finds every occurrence of a vocabulary term in a block of text
//! and reports it as a [`MatchRecord`] the user can later resolve.
//!
//! # Architecture
//!
//! ```text
//! "I will accept the banks' offer"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICAL         │  → "accept" @7 (kind = other, whole word, any case)
//! │ SCAN            │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TAGGER          │  → [I/PRON, will/AUX, accept/VERB, the/DET, banks/NOUN→bank, ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEMMA           │  → "banks" @18 (kind = noun, lemma "bank")
//! │ MATCHING        │     tokens inside lexical spans are skipped
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ORDERED         │  → [accept@7, banks@18], all unresolved
//! │ RECORDS         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tagger`] - The tagger contract and tagged tokens
//! - [`tokenizer`] - Word segmentation with byte offsets
//! - [`lexicon`] - A table-driven tagger
//! - [`record`] - Match records and the user's choice
//! - [`matcher`] - The detection pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod matcher;
pub mod record;
pub mod tagger;
pub mod tokenizer;

pub use lexicon::LexiconTagger;
pub use matcher::find_matches;
pub use record::{Choice, MatchRecord};
pub use tagger::{TaggedToken, Tagger};
pub use tokenizer::{WordSpan, WordTokenizer};
