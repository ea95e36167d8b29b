//! The tagger contract.
//!
//! A tagger splits text into tokens and reports, for each, its lemma and a
//! coarse part of speech. The matcher calls it exactly once per text.

use lexiclear_foundation::{PartOfSpeech, Result, char_len};

/// A token produced by a [`Tagger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface text as it appears in the input
    pub text: String,
    /// Character index of the first character in the input
    pub start: usize,
    /// Dictionary form
    pub lemma: String,
    /// Coarse part of speech
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    /// Creates a tagged token.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: usize,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            lemma: lemma.into(),
            pos,
        }
    }

    /// Character index one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start.saturating_add(char_len(&self.text))
    }
}

/// Produces tagged tokens for a text.
pub trait Tagger {
    /// Tags the full text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying analyser fails. The matcher passes
    /// it through unchanged.
    fn tag(&mut self, text: &str) -> Result<Vec<TaggedToken>>;
}

/// Any `FnMut(&str) -> Result<Vec<TaggedToken>>` closure is a tagger.
impl<F> Tagger for F
where
    F: FnMut(&str) -> Result<Vec<TaggedToken>>,
{
    fn tag(&mut self, text: &str) -> Result<Vec<TaggedToken>> {
        self(text)
    }
}
