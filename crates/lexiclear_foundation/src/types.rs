//! Identifiers and classification tags shared by every layer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identity of an ambiguous term within a vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TermId(pub u32);

impl TermId {
    /// Creates a term id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TermId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How occurrences of a term are located in text.
///
/// The numeric codes are the ones used by vocabulary files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermKind {
    /// Matched by lemma when the tagger reports a noun (code 0).
    Noun,
    /// Matched by lemma when the tagger reports a verb (code 1).
    Verb,
    /// Matched lexically as a whole word, case-insensitively (code 2).
    Other,
}

impl TermKind {
    /// Returns the vocabulary-file code for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Noun => 0,
            Self::Verb => 1,
            Self::Other => 2,
        }
    }

    /// Parses a vocabulary-file code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Noun),
            1 => Some(Self::Verb),
            2 => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns true if this kind is matched through the tagger.
    #[must_use]
    pub const fn is_lemma_based(self) -> bool {
        matches!(self, Self::Noun | Self::Verb)
    }

    /// Returns true if a token tagged `pos` agrees with this kind.
    #[must_use]
    pub fn accepts(self, pos: &PartOfSpeech) -> bool {
        matches!(
            (self, pos),
            (Self::Noun, PartOfSpeech::Noun) | (Self::Verb, PartOfSpeech::Verb)
        )
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Verb => write!(f, "verb"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Coarse part-of-speech tag attached to a tagged token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartOfSpeech {
    /// A common noun (`NOUN`).
    Noun,
    /// A main verb (`VERB`).
    Verb,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl PartOfSpeech {
    /// Maps a universal dependencies style tag (`NOUN`, `VERB`, ...) to a
    /// coarse tag. Comparison is case-insensitive.
    ///
    /// Only `NOUN` and `VERB` are lemma-matchable; proper nouns (`PROPN`) and
    /// auxiliaries (`AUX`) stay [`PartOfSpeech::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let upper = tag.trim().to_ascii_uppercase();
        match upper.as_str() {
            "NOUN" => Self::Noun,
            "VERB" => Self::Verb,
            _ => Self::Other(upper),
        }
    }

    /// Returns the tag string.
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
