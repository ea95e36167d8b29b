//! Turning confirmed choices into the exported text.

use lexiclear_foundation::{Error, IndexKind, Result};
use lexiclear_matcher::{Choice, MatchRecord};
use lexiclear_vocabulary::{AmbiguousTerm, Vocabulary};
use tracing::{debug, info};

use crate::substitute::{adapt_case, replace_at, shift_position};

/// Applies every resolved record to `original`.
///
/// Records are applied in the order given, which must be the ascending
/// position order the matcher produced. Each replacement shifts the
/// positions of the records after it by its length delta. Unresolved
/// records leave the text untouched.
///
/// # Errors
///
/// Returns an error if a record names a missing term, an index the term
/// does not have, or a position that no longer holds its surface text.
pub fn resolve_all(original: &str, records: &[MatchRecord], vocabulary: &Vocabulary) -> Result<String> {
    let mut text = original.to_string();
    let mut accumulator: isize = 0;
    let mut applied = 0usize;

    for record in records {
        let Some(word) = chosen_word(record, vocabulary)? else {
            continue;
        };

        let position = shift_position(record.position, accumulator)?;
        let (rewritten, delta) = replace_at(&text, position, &record.surface_text, &word)?;
        debug!(
            surface = %record.surface_text,
            replacement = %word,
            position,
            delta,
            "applied choice"
        );

        text = rewritten;
        accumulator += delta;
        applied += 1;
    }

    info!(applied, total = records.len(), "resolution complete");
    Ok(text)
}

/// The case-adapted word a record's choice selects.
///
/// Returns `None` for an unresolved record.
///
/// # Errors
///
/// Returns [`TermNotFound`](lexiclear_foundation::ErrorKind::TermNotFound)
/// if the record's term is missing, or
/// [`IndexOutOfRange`](lexiclear_foundation::ErrorKind::IndexOutOfRange) if
/// the choice names a related term or variant that does not exist.
pub fn chosen_word(record: &MatchRecord, vocabulary: &Vocabulary) -> Result<Option<String>> {
    if !record.resolved() {
        return Ok(None);
    }
    let base = vocabulary
        .get(record.term_id)
        .ok_or_else(|| Error::term_not_found(record.term_id))?;

    let word = match record.choice {
        Choice::Unresolved => return Ok(None),
        Choice::BaseTerm => base.word.clone(),
        Choice::BaseVariant(variant) => variant_word(base, variant)?,
        Choice::Related {
            related_index,
            variant_index,
        } => {
            let related = vocabulary.related_of(base);
            let term = related.get(related_index).ok_or_else(|| {
                Error::index_out_of_range(IndexKind::Related, base.id, related_index, related.len())
            })?;
            variant_word(term, variant_index)?
        }
    };

    Ok(Some(adapt_case(&record.surface_text, &word)))
}

/// A term's variant, or its word when it has none.
fn variant_word(term: &AmbiguousTerm, index: usize) -> Result<String> {
    if term.variants.is_empty() {
        return Ok(term.word.clone());
    }
    term.variants
        .get(index)
        .cloned()
        .ok_or_else(|| Error::index_out_of_range(IndexKind::Variant, term.id, index, term.variants.len()))
}
