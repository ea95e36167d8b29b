//! Substitution, resolution, and review for Lexiclear.
//!
//! This crate provides:
//! - [`replace_at`] / [`adapt_case`] - Single replacements with offset deltas
//! - [`resolve_all`] - Applying every confirmed choice to the original text
//! - [`Review`] - Stepping through matches and recording choices

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod resolve;
pub mod review;
pub mod substitute;

pub use resolve::{chosen_word, resolve_all};
pub use review::{Review, ReviewOption};
pub use substitute::{adapt_case, replace_at, shift_position};
