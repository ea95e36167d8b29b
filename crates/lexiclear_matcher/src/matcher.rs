//! The detection pipeline.
//!
//! Matching runs in two phases over the same text:
//!
//! 1. **Lexical**: every term of kind [`TermKind::Other`] is searched as a
//!    whole word, ignoring case. Each hit claims its byte range.
//! 2. **Lemma**: the tagger runs once; every token not starting inside a
//!    claimed range is compared by lemma and part of speech against the noun
//!    and verb terms. The first agreeing term wins and claims the token.
//!
//! Hits from different lexical terms are never deduplicated against each
//! other; only lemma hits are suppressed by lexical ones.

use std::collections::BTreeMap;

use lexiclear_foundation::{CharCursor, Error, ErrorKind, Result, TermKind};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};
use regex::RegexBuilder;
use tracing::{debug, trace};

use crate::record::MatchRecord;
use crate::tagger::{TaggedToken, Tagger};

/// Finds every ambiguous occurrence in `text`.
///
/// Records are ordered by ascending position; records at the same position
/// keep discovery order (lexical first, then vocabulary order). Every record
/// starts unresolved, and its position is a character index into `text`.
///
/// # Errors
///
/// Returns the tagger's error unchanged if tagging fails, or a tagger error
/// if a token's offset and surface text do not agree with `text`.
pub fn find_matches<T>(text: &str, vocabulary: &Vocabulary, tagger: &mut T) -> Result<Vec<MatchRecord>>
where
    T: Tagger + ?Sized,
{
    let mut claims = Claims::default();
    // Byte offsets until the final pass
    let mut records = Vec::new();

    for term in vocabulary.terms_of_kind(TermKind::Other) {
        for (start, end) in lexical_occurrences(text, &term.word)? {
            claims.claim(start, end);
            records.push(MatchRecord::new(&text[start..end], start, term.id));
        }
    }
    let lexical = records.len();

    let tokens = tagger.tag(text)?;
    let lemma_terms: Vec<(&AmbiguousTerm, String)> = vocabulary
        .iter()
        .filter(|term| term.kind.is_lemma_based() && !term.word.is_empty())
        .map(|term| (term, term.word.to_lowercase()))
        .collect();

    let mut cursor = CharCursor::new(text);
    for token in &tokens {
        let (start, end) = token_span(text, &mut cursor, token)?;
        if token.text.is_empty() || claims.contains(start) {
            continue;
        }

        let lemma = token.lemma.to_lowercase();
        let hit = lemma_terms
            .iter()
            .find(|(term, word)| *word == lemma && term.kind.accepts(&token.pos));

        if let Some((term, _)) = hit {
            trace!(token = %token.text, start = token.start, term = %term.id, "lemma match");
            claims.claim(start, end);
            records.push(MatchRecord::new(token.text.clone(), start, term.id));
        }
    }

    records.sort_by_key(|record| record.position);

    let mut cursor = CharCursor::new(text);
    for record in &mut records {
        record.position = cursor.char_of(record.position).ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "match {:?} does not start on a character",
                record.surface_text
            )))
        })?;
    }

    debug!(
        lexical,
        lemma = records.len() - lexical,
        tokens = tokens.len(),
        "matching complete"
    );
    Ok(records)
}

/// Byte ranges of whole-word, case-insensitive occurrences of `word`.
///
/// A whole word is not preceded or followed by an alphanumeric character.
/// `word` is matched literally; an empty word never matches.
fn lexical_occurrences(text: &str, word: &str) -> Result<Vec<(usize, usize)>> {
    if word.is_empty() {
        trace!("skipping lexical term with empty word");
        return Ok(Vec::new());
    }

    let pattern = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("cannot search for {word:?}: {e}"))))?;

    let mut found = Vec::new();
    let mut from = 0;
    while let Some(m) = pattern.find_at(text, from) {
        if is_word_boundary(text, m.start(), m.end()) {
            found.push((m.start(), m.end()));
            from = m.end();
        } else {
            // Retry one character later; an overlapping occurrence may still
            // stand on its own.
            from = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
        if from > text.len() {
            break;
        }
    }
    Ok(found)
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Byte range of a token, rejecting tokens that do not describe a substring
/// of `text`.
fn token_span(text: &str, cursor: &mut CharCursor<'_>, token: &TaggedToken) -> Result<(usize, usize)> {
    let span = cursor.byte_of(token.start).and_then(|start| {
        let end = start.checked_add(token.text.len())?;
        (text.get(start..end)? == token.text).then_some((start, end))
    });

    span.ok_or_else(|| {
        Error::tagger(format!(
            "token {:?} at {} does not match the input text",
            token.text, token.start
        ))
    })
}

/// Disjoint claimed byte ranges, keyed by start.
#[derive(Debug, Default)]
struct Claims {
    spans: BTreeMap<usize, usize>,
}

impl Claims {
    /// Claims `[start, end)`, merging with any touching ranges.
    fn claim(&mut self, start: usize, end: usize) {
        let mut merged_start = start;
        let mut merged_end = end;

        if let Some((&s, &e)) = self.spans.range(..=start).next_back() {
            if e >= start {
                merged_start = s;
                merged_end = merged_end.max(e);
            }
        }

        let covered: Vec<usize> = self
            .spans
            .range(merged_start..=merged_end)
            .map(|(&s, _)| s)
            .collect();
        for s in covered {
            if let Some(e) = self.spans.remove(&s) {
                merged_end = merged_end.max(e);
            }
        }

        self.spans.insert(merged_start, merged_end);
    }

    /// Returns true if `offset` lies inside a claimed range.
    fn contains(&self, offset: usize) -> bool {
        self.spans
            .range(..=offset)
            .next_back()
            .is_some_and(|(_, &end)| offset < end)
    }
}
