//! Stepping through matches and recording choices.
//!
//! A [`Review`] owns the text being checked and its match list, and keeps a
//! cursor on the match the user is looking at. It renders nothing; front
//! ends ask it for the options of the current match and report back which
//! one was picked.

use lexiclear_foundation::{Error, Result, TermId};
use lexiclear_matcher::{Choice, MatchRecord};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};
use tracing::debug;

use crate::resolve::{chosen_word, resolve_all};

/// One pickable replacement for the current match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOption {
    /// 0 for the matched term, `n` for its `n`-th related term
    pub group: usize,
    /// The term this option belongs to
    pub term_id: TermId,
    /// That term's canonical word
    pub term_word: String,
    /// That term's gloss
    pub meaning: String,
    /// The word written if this option is picked (before case adaptation)
    pub label: String,
    /// The choice picking this option records
    pub choice: Choice,
}

/// An in-progress review of one text.
#[derive(Clone, Debug)]
pub struct Review {
    text: String,
    records: Vec<MatchRecord>,
    current: usize,
}

impl Review {
    /// Starts a review at the first match.
    #[must_use]
    pub fn new(text: impl Into<String>, records: Vec<MatchRecord>) -> Self {
        Self::with_cursor(text, records, 0)
    }

    /// Resumes a review at a given match.
    ///
    /// A cursor past the end is clamped to the last match.
    #[must_use]
    pub fn with_cursor(text: impl Into<String>, records: Vec<MatchRecord>, current: usize) -> Self {
        let current = current.min(records.len().saturating_sub(1));
        Self {
            text: text.into(),
            records,
            current,
        }
    }

    /// Returns the text under review, without any choices applied.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns all matches in position order.
    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the match under the cursor, if there are any matches.
    #[must_use]
    pub fn current(&self) -> Option<&MatchRecord> {
        self.records.get(self.current)
    }

    /// Returns true if the text had no ambiguous words.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }

    /// Moves to the next match, wrapping to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&MatchRecord> {
        if !self.records.is_empty() {
            self.current = (self.current + 1) % self.records.len();
        }
        self.current()
    }

    /// Moves to the previous match, wrapping to the last.
    pub fn previous(&mut self) -> Option<&MatchRecord> {
        if !self.records.is_empty() {
            let len = self.records.len();
            self.current = (self.current + len - 1) % len;
        }
        self.current()
    }

    /// Lists the replacements offered for the current match.
    ///
    /// The matched term comes first, then each related term in order. A term
    /// with variants offers one option per variant; otherwise it offers its
    /// word.
    ///
    /// # Errors
    ///
    /// Returns an error if the current match names a term that is not in
    /// `vocabulary`.
    pub fn options(&self, vocabulary: &Vocabulary) -> Result<Vec<ReviewOption>> {
        let Some(record) = self.current() else {
            return Ok(Vec::new());
        };
        let base = vocabulary
            .get(record.term_id)
            .ok_or_else(|| Error::term_not_found(record.term_id))?;

        let mut options = group_options(0, base, |variant| match variant {
            Some(index) => Choice::BaseVariant(index),
            None => Choice::BaseTerm,
        });

        for (related_index, term) in vocabulary.related_of(base).iter().enumerate() {
            options.extend(group_options(related_index + 1, term, |variant| Choice::Related {
                related_index,
                variant_index: variant.unwrap_or(0),
            }));
        }

        Ok(options)
    }

    /// Records a choice for the current match.
    ///
    /// Returns false, changing nothing, if there are no matches.
    pub fn choose(&mut self, choice: Choice) -> bool {
        let index = self.current;
        match self.records.get_mut(index) {
            Some(record) => {
                debug!(index, %record, ?choice, "choice recorded");
                record.choose(choice);
                true
            }
            None => false,
        }
    }

    /// Returns `(resolved, total)` match counts.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let resolved = self.records.iter().filter(|r| r.resolved()).count();
        (resolved, self.records.len())
    }

    /// The case-adapted word the current choice would write, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the current choice does not fit the vocabulary.
    pub fn preview(&self, vocabulary: &Vocabulary) -> Result<Option<String>> {
        match self.current() {
            Some(record) => chosen_word(record, vocabulary),
            None => Ok(None),
        }
    }

    /// Produces the text with every recorded choice applied.
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded choice does not fit the vocabulary.
    pub fn export(&self, vocabulary: &Vocabulary) -> Result<String> {
        resolve_all(&self.text, &self.records, vocabulary)
    }

    /// Splits the review into text, matches, and cursor.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<MatchRecord>, usize) {
        (self.text, self.records, self.current)
    }
}

fn group_options(
    group: usize,
    term: &AmbiguousTerm,
    choice: impl Fn(Option<usize>) -> Choice,
) -> Vec<ReviewOption> {
    let option = |label: &str, variant: Option<usize>| ReviewOption {
        group,
        term_id: term.id,
        term_word: term.word.clone(),
        meaning: term.meaning.clone(),
        label: label.to_string(),
        choice: choice(variant),
    };

    if term.variants.is_empty() {
        vec![option(&term.word, None)]
    } else {
        term.variants
            .iter()
            .enumerate()
            .map(|(index, variant)| option(variant, Some(index)))
            .collect()
    }
}
