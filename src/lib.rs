//! Lexiclear - Ambiguous-word detection and position-stable substitution
//!
//! This crate re-exports all layers of the Lexiclear system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lexiclear_runtime    - REPL, CLI, settings, logging, file I/O
//! Layer 3: lexiclear_engine     - Substitution, resolution, review navigation
//! Layer 2: lexiclear_matcher    - Tagger contract, tokenizer, match detection
//! Layer 1: lexiclear_vocabulary - Ambiguous terms and their relationships
//! Layer 0: lexiclear_foundation - Core types (TermId, TermKind, Error)
//! ```

pub use lexiclear_engine as engine;
pub use lexiclear_foundation as foundation;
pub use lexiclear_matcher as matcher;
pub use lexiclear_runtime as runtime;
pub use lexiclear_vocabulary as vocabulary;
