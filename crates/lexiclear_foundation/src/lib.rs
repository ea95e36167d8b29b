//! Core types and errors for Lexiclear.
//!
//! This crate provides:
//! - [`TermId`] - Stable identity of a vocabulary entry
//! - [`TermKind`] - Matching strategy of a vocabulary entry
//! - [`PartOfSpeech`] - Coarse tag reported by a tagger
//! - [`CharCursor`] - Character index to byte offset mapping
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod offset;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, IndexKind, Result};
pub use offset::{CharCursor, byte_offset, char_len, char_slice};
pub use types::{PartOfSpeech, TermId, TermKind};
