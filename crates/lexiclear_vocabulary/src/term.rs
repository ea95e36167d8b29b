//! The ambiguous term entry.

use lexiclear_foundation::{TermId, TermKind};

/// A vocabulary entry for a word with more than one possible reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmbiguousTerm {
    /// Unique, stable identity
    pub id: TermId,
    /// Canonical surface form
    pub word: String,
    /// Human-readable gloss
    pub meaning: String,
    /// Matching strategy
    pub kind: TermKind,
    /// Terms offered as alternative readings, in display order
    pub related_ids: Vec<TermId>,
    /// Surface forms that may substitute for `word`.
    ///
    /// Empty means `word` itself is the only substitution candidate.
    pub variants: Vec<String>,
}

impl AmbiguousTerm {
    /// Creates a term with no related terms and no variants.
    #[must_use]
    pub fn new(
        id: u32,
        word: impl Into<String>,
        meaning: impl Into<String>,
        kind: TermKind,
    ) -> Self {
        Self {
            id: TermId::new(id),
            word: word.into(),
            meaning: meaning.into(),
            kind,
            related_ids: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Builder method to set the related term ids.
    #[must_use]
    pub fn with_related(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.related_ids = ids.into_iter().map(TermId::new).collect();
        self
    }

    /// Builder method to set the variants.
    #[must_use]
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the surface forms a user may pick for this term: its variants,
    /// or the canonical word when it has none.
    #[must_use]
    pub fn candidates(&self) -> Vec<&str> {
        if self.variants.is_empty() {
            vec![self.word.as_str()]
        } else {
            self.variants.iter().map(String::as_str).collect()
        }
    }
}
