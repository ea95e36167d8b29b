//! Word segmentation.
//!
//! Splits prose into words while remembering where each word starts, so
//! tokens can be mapped back onto the original text.

/// A word and its byte offset in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// The word exactly as written
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
}

impl WordSpan<'_> {
    /// Byte offset one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Tokenizes prose into words.
pub struct WordTokenizer;

impl WordTokenizer {
    /// Tokenizes a text into word spans.
    ///
    /// - A word is a run of alphanumeric characters
    /// - An apostrophe or hyphen between two alphanumerics joins them
    ///   ("don't", "well-known")
    /// - Everything else separates words and is dropped
    /// - Case is preserved
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<WordSpan<'_>> {
        let mut spans = Vec::new();
        let mut chars = input.char_indices().peekable();
        let mut current: Option<usize> = None;

        while let Some((offset, ch)) = chars.next() {
            if ch.is_alphanumeric() {
                current.get_or_insert(offset);
                continue;
            }

            // Joiner inside a word
            if current.is_some()
                && is_joiner(ch)
                && chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric())
            {
                continue;
            }

            if let Some(start) = current.take() {
                spans.push(WordSpan {
                    text: &input[start..offset],
                    start,
                });
            }
        }

        // Flush final word
        if let Some(start) = current {
            spans.push(WordSpan {
                text: &input[start..],
                start,
            });
        }

        spans
    }
}

fn is_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '-')
}
