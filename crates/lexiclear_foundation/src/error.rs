//! Error types for the Lexiclear system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::TermId;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lexiclear operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed vocabulary error for the whole document.
    #[must_use]
    pub fn malformed_vocabulary(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedVocabulary {
            record: None,
            message: message.into(),
        })
    }

    /// Creates a malformed vocabulary error for a single record.
    #[must_use]
    pub fn malformed_record(record: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedVocabulary {
            record: Some(record),
            message: message.into(),
        })
    }

    /// Creates a position mismatch error.
    #[must_use]
    pub fn position_mismatch(
        position: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::PositionMismatch {
            position,
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(what: IndexKind, term: TermId, index: usize, available: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange {
            what,
            term,
            index,
            available,
        })
    }

    /// Creates a term not found error.
    #[must_use]
    pub fn term_not_found(id: TermId) -> Self {
        Self::new(ErrorKind::TermNotFound(id))
    }

    /// Creates a tagger failure error.
    #[must_use]
    pub fn tagger(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Tagger(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A vocabulary document violated the record schema.
    #[error("malformed vocabulary{}: {message}", record_suffix(*.record))]
    MalformedVocabulary {
        /// Index of the offending record, if the problem is record-local.
        record: Option<usize>,
        /// Description of the violation.
        message: String,
    },

    /// The text at a recorded position is not the recorded surface text.
    #[error("position mismatch at {position}: expected {expected:?}, found {found:?}")]
    PositionMismatch {
        /// The (corrected) position that was checked.
        position: usize,
        /// The surface text the match record expected.
        expected: String,
        /// What the text actually holds there.
        found: String,
    },

    /// A related-term or variant index does not exist on the term.
    #[error("{what} index {index} out of range for term {term} ({available} available)")]
    IndexOutOfRange {
        /// Which index was out of range.
        what: IndexKind,
        /// The term the index was applied to.
        term: TermId,
        /// The requested index.
        index: usize,
        /// How many entries the term actually has.
        available: usize,
    },

    /// A match record references a term that is not in the vocabulary.
    #[error("term not found: {0}")]
    TermNotFound(TermId),

    /// The tagger failed or violated its contract.
    #[error("tagger error: {0}")]
    Tagger(String),

    /// Input text exceeds the configured character limit.
    #[error("text too long: {length} characters (limit {limit})")]
    TextTooLong {
        /// Number of characters in the input.
        length: usize,
        /// The configured limit.
        limit: usize,
    },

    /// Input file extension is not accepted.
    #[error("unsupported file format {extension:?} (allowed: {allowed})")]
    UnsupportedFormat {
        /// The rejected extension (empty when the file has none).
        extension: String,
        /// Comma-separated list of accepted extensions.
        allowed: String,
    },

    /// File system error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot or vocabulary encoding error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn record_suffix(record: Option<usize>) -> String {
    record.map_or_else(String::new, |r| format!(" (record {r})"))
}

/// Which choice index an [`ErrorKind::IndexOutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Index into a term's related ambiguities.
    Related,
    /// Index into a term's variants.
    Variant,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Related => write!(f, "related"),
            Self::Variant => write!(f, "variant"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the failing operation was reading or writing.
    pub source: Option<String>,
    /// Operations that were in progress, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
