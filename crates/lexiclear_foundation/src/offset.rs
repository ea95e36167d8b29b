//! Character offsets.
//!
//! Match positions and length changes are counted in characters (Unicode
//! scalar values), while Rust slices strings by byte. [`CharCursor`] maps
//! between the two.

/// Maps character indexes to byte offsets and back.
///
/// The cursor remembers the last position it reached, so walking a text in
/// ascending order costs one pass over it. Asking for an earlier position
/// restarts from the beginning.
#[derive(Clone, Debug)]
pub struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn rewind(&mut self) {
        self.byte = 0;
        self.chars = 0;
    }

    /// Byte offset of the character at `index`.
    ///
    /// The character count of the text maps to its byte length. Returns
    /// `None` past that.
    pub fn byte_of(&mut self, index: usize) -> Option<usize> {
        if index < self.chars {
            self.rewind();
        }
        let text = self.text;
        for ch in text[self.byte..].chars() {
            if self.chars == index {
                break;
            }
            self.byte += ch.len_utf8();
            self.chars += 1;
        }
        (self.chars == index).then_some(self.byte)
    }

    /// Character index of the byte offset `byte`.
    ///
    /// Returns `None` if `byte` is past the end or inside a character.
    pub fn char_of(&mut self, byte: usize) -> Option<usize> {
        if !self.text.is_char_boundary(byte) {
            return None;
        }
        if byte < self.byte {
            self.rewind();
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        Some(self.chars)
    }
}

/// Byte offset of the character at `index` in `text`.
#[must_use]
pub fn byte_offset(text: &str, index: usize) -> Option<usize> {
    CharCursor::new(text).byte_of(index)
}

/// The `len` characters of `text` starting at character `start`.
///
/// Returns `None` if the range runs past the end of `text`.
#[must_use]
pub fn char_slice(text: &str, start: usize, len: usize) -> Option<&str> {
    let mut cursor = CharCursor::new(text);
    let from = cursor.byte_of(start)?;
    let to = cursor.byte_of(start.checked_add(len)?)?;
    Some(&text[from..to])
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
