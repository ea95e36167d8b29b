//! Position-checked replacement of single words.
//!
//! Positions and length changes count characters. Every replacement reports
//! how much it moved the text after it, so callers applying several
//! replacements left to right can keep later positions valid.

use lexiclear_foundation::{Error, Result, byte_offset, char_len};
use tracing::error;

/// Replaces `expected` at character index `position` with `new_word`.
///
/// Returns the rewritten text and the signed change in character count.
///
/// # Errors
///
/// Returns a position mismatch if the text at `position` is not exactly
/// `expected` (case-sensitive), including when the span runs past the end of
/// the text.
pub fn replace_at(text: &str, position: usize, expected: &str, new_word: &str) -> Result<(String, isize)> {
    let start = byte_offset(text, position);
    let span = start.and_then(|start| Some((start, start.checked_add(expected.len())?)));
    let found = span.and_then(|(start, end)| text.get(start..end));

    let Some((start, end)) = span.filter(|_| found == Some(expected)) else {
        let found = start.map_or_else(String::new, |start| {
            text[start..].chars().take(char_len(expected)).collect()
        });
        error!(position, expected, found = %found, "stale match position");
        return Err(Error::position_mismatch(position, expected, found));
    };

    let mut rewritten = String::with_capacity(text.len() - expected.len() + new_word.len());
    rewritten.push_str(&text[..start]);
    rewritten.push_str(new_word);
    rewritten.push_str(&text[end..]);

    Ok((rewritten, length_delta(expected, new_word)))
}

/// Signed character-count change from `old` to `new`.
fn length_delta(old: &str, new: &str) -> isize {
    let old = isize::try_from(char_len(old)).unwrap_or(isize::MAX);
    let new = isize::try_from(char_len(new)).unwrap_or(isize::MAX);
    new - old
}

/// Applies a signed offset correction to a position.
///
/// # Errors
///
/// Returns a position mismatch if the corrected position would be negative.
pub fn shift_position(position: usize, accumulator: isize) -> Result<usize> {
    position.checked_add_signed(accumulator).ok_or_else(|| {
        Error::position_mismatch(
            position,
            String::new(),
            format!("offset correction {accumulator} underflows"),
        )
    })
}

/// Gives `target` the casing pattern of `source`.
///
/// - all uppercase `source` => uppercase `target`
/// - all lowercase `source` => lowercase `target`
/// - title-case `source` => `target` with its first character uppercased
/// - anything else => `target` unchanged
///
/// Characters without case are ignored when classifying `source`; a source
/// without any cased character leaves `target` unchanged.
#[must_use]
pub fn adapt_case(source: &str, target: &str) -> String {
    match CasePattern::of(source) {
        CasePattern::Upper => target.to_uppercase(),
        CasePattern::Lower => target.to_lowercase(),
        CasePattern::Title => capitalize_first(target),
        CasePattern::Mixed => target.to_string(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CasePattern {
    Upper,
    Lower,
    Title,
    Mixed,
}

impl CasePattern {
    fn of(word: &str) -> Self {
        let cased = || word.chars().filter(|c| is_cased(*c));
        if cased().next().is_none() {
            return Self::Mixed;
        }
        if cased().all(char::is_uppercase) {
            return Self::Upper;
        }
        if cased().all(char::is_lowercase) {
            return Self::Lower;
        }
        if is_title(word) {
            return Self::Title;
        }
        Self::Mixed
    }
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Every run of cased characters starts uppercase and continues lowercase.
fn is_title(word: &str) -> bool {
    let mut previous_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
        } else {
            previous_cased = false;
        }
    }
    true
}
