//! Match records and user choices.

use std::fmt;

use lexiclear_foundation::{TermId, char_len};

/// What the user picked for one occurrence.
///
/// The word finally written is decided at export time:
///
/// - [`Choice::BaseTerm`] writes the matched term's canonical word
/// - [`Choice::BaseVariant`] writes one of the matched term's variants
/// - [`Choice::Related`] writes a related term's word or one of its variants
///
/// A variant index on a term without variants selects its canonical word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    /// No choice made yet; the original text stands.
    #[default]
    Unresolved,
    /// Use the matched term's canonical word.
    BaseTerm,
    /// Use the matched term's variant at this index.
    BaseVariant(usize),
    /// Use a related term.
    Related {
        /// Zero-based index into the matched term's related terms
        related_index: usize,
        /// Index into that related term's variants
        variant_index: usize,
    },
}

impl Choice {
    /// Decodes the compact `(resolved, related_index, variant_index)` triple.
    ///
    /// `related_index` is `-1` for the base term, `0` for one of the base
    /// term's variants and `n > 0` for the `(n - 1)`-th related term. A
    /// negative variant index alongside `related_index <= 0` means the base
    /// term's word. Returns `None` for a related choice without a variant
    /// index.
    ///
    /// `(true, -1, -1)` decodes to [`Choice::BaseTerm`], which writes the
    /// canonical word even when the term has variants; it is never treated
    /// as an invalid variant index.
    #[must_use]
    pub fn from_legacy(resolved: bool, related_index: i64, variant_index: i64) -> Option<Self> {
        if !resolved {
            return Some(Self::Unresolved);
        }
        let variant = usize::try_from(variant_index).ok();
        if related_index <= 0 {
            return Some(variant.map_or(Self::BaseTerm, Self::BaseVariant));
        }
        let related_index = usize::try_from(related_index - 1).ok()?;
        Some(Self::Related {
            related_index,
            variant_index: variant?,
        })
    }

    /// Encodes this choice as a `(resolved, related_index, variant_index)`
    /// triple. Inverse of [`Choice::from_legacy`].
    #[must_use]
    pub fn to_legacy(self) -> (bool, i64, i64) {
        match self {
            Self::Unresolved => (false, -1, -1),
            Self::BaseTerm => (true, -1, -1),
            Self::BaseVariant(variant) => (true, 0, to_i64(variant)),
            Self::Related {
                related_index,
                variant_index,
            } => (true, to_i64(related_index) + 1, to_i64(variant_index)),
        }
    }

    /// Returns true unless this is [`Choice::Unresolved`].
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != Self::Unresolved
    }
}

fn to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// One occurrence of an ambiguous term in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// The matched substring, with its original casing
    pub surface_text: String,
    /// Character index of the match in the text it was found in
    pub position: usize,
    /// The term that matched
    pub term_id: TermId,
    /// The user's choice for this occurrence
    pub choice: Choice,
}

impl MatchRecord {
    /// Creates an unresolved record.
    #[must_use]
    pub fn new(surface_text: impl Into<String>, position: usize, term_id: TermId) -> Self {
        Self {
            surface_text: surface_text.into(),
            position,
            term_id,
            choice: Choice::Unresolved,
        }
    }

    /// Returns true if the user has made a choice.
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.choice.is_resolved()
    }

    /// Records the user's choice, replacing any earlier one.
    pub fn choose(&mut self, choice: Choice) {
        self.choice = choice;
    }

    /// Character index one past the match, saturating at `usize::MAX`.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position.saturating_add(char_len(&self.surface_text))
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} ({})", self.surface_text, self.position, self.term_id)
    }
}
