//! Lexiclear Runtime
//!
//! This crate provides the user-facing side of Lexiclear:
//! - [`Settings`] - Limits, file names, and logging options
//! - [`io`] - Reading texts and vocabularies from disk
//! - [`snapshot`] - Saving and restoring an in-progress review
//! - [`Repl`] - Interactive review in the terminal
//! - [`logging`] - Subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod io;
pub mod logging;
pub mod repl;
pub mod snapshot;

pub use config::Settings;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
