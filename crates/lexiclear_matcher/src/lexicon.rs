//! Table-driven tagger.
//!
//! [`LexiconTagger`] tags words by looking their lowercase surface form up in
//! a table of `form -> (lemma, part of speech)` entries. It does no
//! morphological analysis: inflected forms must be listed explicitly.
//!
//! Lexicon files are JSON objects keyed by surface form:
//!
//! ```json
//! {
//!     "banks": { "lemma": "bank", "pos": "NOUN" },
//!     "leads": { "lemma": "lead", "pos": "VERB" }
//! }
//! ```

use std::collections::HashMap;

use lexiclear_foundation::{CharCursor, Error, PartOfSpeech, Result};
use serde::Deserialize;
use tracing::debug;

use crate::tagger::{TaggedToken, Tagger};
use crate::tokenizer::WordTokenizer;

/// Tag assigned to words missing from the lexicon.
const UNKNOWN_TAG: &str = "X";

/// Lemma and tag for one surface form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Dictionary form
    pub lemma: String,
    /// Coarse part of speech
    pub pos: PartOfSpeech,
}

#[derive(Deserialize)]
struct RawEntry {
    lemma: String,
    pos: String,
}

/// A [`Tagger`] backed by a surface-form table.
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger {
    /// Lowercase surface form -> entry
    entries: HashMap<String, LexiconEntry>,
}

impl LexiconTagger {
    /// Creates a tagger with an empty lexicon.
    ///
    /// Every word is tagged as unknown, with its lowercase form as lemma.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a lexicon document.
    ///
    /// # Errors
    ///
    /// Returns a tagger error if the document is not an object of
    /// `{"lemma": ..., "pos": ...}` entries.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: HashMap<String, RawEntry> = serde_json::from_slice(bytes)
            .map_err(|e| Error::tagger(format!("invalid lexicon: {e}")))?;

        let mut tagger = Self::new();
        for (form, entry) in raw {
            tagger = tagger.with_entry(&form, entry.lemma, &entry.pos);
        }

        debug!(entries = tagger.len(), "lexicon loaded");
        Ok(tagger)
    }

    /// Builder method to add or replace the entry for a surface form.
    #[must_use]
    pub fn with_entry(mut self, form: &str, lemma: impl Into<String>, tag: &str) -> Self {
        self.insert(form, lemma, tag);
        self
    }

    /// Adds or replaces the entry for a surface form.
    pub fn insert(&mut self, form: &str, lemma: impl Into<String>, tag: &str) {
        self.entries.insert(
            form.to_lowercase(),
            LexiconEntry {
                lemma: lemma.into(),
                pos: PartOfSpeech::from_tag(tag),
            },
        );
    }

    /// Looks up a surface form, ignoring case.
    #[must_use]
    pub fn lookup(&self, form: &str) -> Option<&LexiconEntry> {
        self.entries.get(&form.to_lowercase())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tagger for LexiconTagger {
    fn tag(&mut self, text: &str) -> Result<Vec<TaggedToken>> {
        let mut cursor = CharCursor::new(text);
        WordTokenizer::tokenize(text)
            .into_iter()
            .map(|span| -> Result<TaggedToken> {
                let start = cursor
                    .char_of(span.start)
                    .ok_or_else(|| Error::tagger(format!("word {:?} splits a character", span.text)))?;
                Ok(match self.lookup(span.text) {
                    Some(entry) => TaggedToken::new(span.text, start, &entry.lemma, entry.pos.clone()),
                    None => TaggedToken::new(
                        span.text,
                        start,
                        span.text.to_lowercase(),
                        PartOfSpeech::Other(UNKNOWN_TAG.to_string()),
                    ),
                })
            })
            .collect()
    }
}
