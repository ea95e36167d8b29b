//! Runtime settings.

use std::path::PathBuf;

/// Default input limit, in characters.
pub const DEFAULT_MAX_CHARACTERS: usize = 10_000_000;

/// Settings for reading, exporting, and logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Longest accepted input text, in characters.
    pub max_characters: usize,

    /// Accepted input file extensions, without the dot.
    pub allowed_extensions: Vec<String>,

    /// File name used when exporting without an explicit path.
    pub export_file_name: String,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Output format: true for JSON, false for human-readable.
    pub log_json: bool,

    /// Vocabulary document to load.
    pub vocabulary_path: PathBuf,

    /// Optional lexicon for the tagger.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_characters: DEFAULT_MAX_CHARACTERS,
            allowed_extensions: vec!["txt".to_string()],
            export_file_name: "textChecked.txt".to_string(),
            log_level: "warn".to_string(),
            log_json: false,
            vocabulary_path: PathBuf::from("ambiguous_words.json"),
            lexicon_path: None,
        }
    }
}

impl Settings {
    /// Creates a configuration for diagnosing matches, logging at `debug`.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Builder method to set the input limit.
    #[must_use]
    pub fn with_max_characters(mut self, limit: usize) -> Self {
        self.max_characters = limit;
        self
    }

    /// Builder method to set the accepted extensions.
    #[must_use]
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the default export file name.
    #[must_use]
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    /// Builder method to set the default log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder method to enable/disable JSON log output.
    #[must_use]
    pub fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Builder method to set the vocabulary path.
    #[must_use]
    pub fn with_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = path.into();
        self
    }

    /// Builder method to set the lexicon path.
    #[must_use]
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Returns true if `extension` is accepted, ignoring case.
    #[must_use]
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}
