//! Reading and writing the files Lexiclear works with.
//!
//! Every error names the file it came from through its
//! [`ErrorContext`] source, and the operation as a frame.

use std::fs;
use std::path::{Path, PathBuf};

use lexiclear_foundation::{Error, ErrorContext, ErrorKind, Result};
use lexiclear_matcher::LexiconTagger;
use lexiclear_vocabulary::Vocabulary;
use tracing::{debug, info};

use crate::config::Settings;

/// Extension forced onto exported files.
const EXPORT_EXTENSION: &str = "txt";

const LOAD_VOCABULARY: &str = "load vocabulary";
const LOAD_LEXICON: &str = "load lexicon";

/// Reads a text to check.
///
/// # Errors
///
/// Returns an error if the extension is not allowed, the file cannot be
/// read as UTF-8, or it holds more than `settings.max_characters`
/// characters.
pub fn read_text(path: impl AsRef<Path>, settings: &Settings) -> Result<String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if !settings.allows_extension(extension) {
        return Err(Error::new(ErrorKind::UnsupportedFormat {
            extension: extension.to_string(),
            allowed: settings.allowed_extensions.join(", "),
        })
        .with_context(context(path, "read text")));
    }

    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())).with_context(context(path, "read text")))?;

    let length = text.chars().count();
    if length > settings.max_characters {
        return Err(Error::new(ErrorKind::TextTooLong {
            length,
            limit: settings.max_characters,
        })
        .with_context(context(path, "read text")));
    }

    debug!(path = %path.display(), length, "text loaded");
    Ok(text)
}

/// Writes an exported text, appending `.txt` when the path lacks it.
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<PathBuf> {
    let path = export_path(path.as_ref());
    fs::write(&path, text).map_err(|e| {
        Error::io(format!("failed to write file '{}': {e}", path.display())).with_context(context(&path, "export text"))
    })?;
    info!(path = %path.display(), bytes = text.len(), "text exported");
    Ok(path)
}

/// The path an export to `path` lands at.
#[must_use]
pub fn export_path(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(EXPORT_EXTENSION));
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(EXPORT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Loads a vocabulary document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// vocabulary.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let bytes = read_bytes(path, LOAD_VOCABULARY)?;
    Vocabulary::from_json(&bytes).map_err(|e| e.with_context(context(path, LOAD_VOCABULARY)))
}

/// Saves a vocabulary document.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_vocabulary(path: impl AsRef<Path>, vocabulary: &Vocabulary) -> Result<()> {
    let path = path.as_ref();
    let json = vocabulary.to_json().map_err(|e| e.with_context(context(path, "save vocabulary")))?;
    fs::write(path, json).map_err(|e| {
        Error::io(format!("failed to write file '{}': {e}", path.display())).with_context(context(path, "save vocabulary"))
    })
}

/// Loads a tagger lexicon.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid lexicon.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<LexiconTagger> {
    let path = path.as_ref();
    let bytes = read_bytes(path, LOAD_LEXICON)?;
    LexiconTagger::from_json(&bytes).map_err(|e| e.with_context(context(path, LOAD_LEXICON)))
}

fn read_bytes(path: &Path, operation: &str) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())).with_context(context(path, operation)))
}

/// Names the file and the operation an error came from.
pub(crate) fn context(path: &Path, operation: &str) -> ErrorContext {
    ErrorContext::new()
        .with_source(path.display().to_string())
        .with_frame(operation)
}
