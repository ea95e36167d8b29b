//! Ambiguous-term vocabulary for Lexiclear.
//!
//! A vocabulary is the list of words the matcher looks for, each with a
//! gloss, a matching strategy, the alternative readings it can be confused
//! with, and the surface forms that may replace it.
//!
//! # Modules
//!
//! - [`term`] - The [`AmbiguousTerm`] entry type
//! - [`store`] - The [`Vocabulary`] lookup table and relationship cache
//! - [`format`] - JSON record format for loading and saving vocabularies

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod store;
pub mod term;

pub use store::Vocabulary;
pub use term::AmbiguousTerm;
