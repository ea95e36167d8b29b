//! Review snapshots using `MessagePack`.
//!
//! A snapshot holds the text under review, its matches with their choices,
//! and the cursor. Choices are stored in the compact
//! `(resolved, related_index, variant_index)` form.
//!
//! Every record must point at its surface text in the stored text; a
//! snapshot that does not is rejected on restore.
//!
//! Snapshots do not embed the vocabulary. Restoring against a different
//! vocabulary than the one the matches came from is only detected when the
//! choices are resolved.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use lexiclear_engine::Review;
use lexiclear_foundation::{Error, ErrorKind, Result, TermId, char_len, char_slice};
use lexiclear_matcher::{Choice, MatchRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io::context;

/// Current snapshot layout version.
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    text: String,
    current: usize,
    records: Vec<SnapshotRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRecord {
    surface_text: String,
    position: usize,
    term_id: TermId,
    resolved: bool,
    related_index: i64,
    variant_index: i64,
}

impl From<&MatchRecord> for SnapshotRecord {
    fn from(record: &MatchRecord) -> Self {
        let (resolved, related_index, variant_index) = record.choice.to_legacy();
        Self {
            surface_text: record.surface_text.clone(),
            position: record.position,
            term_id: record.term_id,
            resolved,
            related_index,
            variant_index,
        }
    }
}

impl SnapshotRecord {
    fn into_record(self, index: usize, text: &str) -> Result<MatchRecord> {
        let stored = char_slice(text, self.position, char_len(&self.surface_text));
        if stored != Some(self.surface_text.as_str()) {
            return Err(serialization_error(format!(
                "record {index} ({:?} at {}) does not match the snapshot text",
                self.surface_text, self.position
            )));
        }
        let choice = Choice::from_legacy(self.resolved, self.related_index, self.variant_index).ok_or_else(|| {
            serialization_error(format!(
                "record {index} has invalid choice ({}, {}, {})",
                self.resolved, self.related_index, self.variant_index
            ))
        })?;
        let mut record = MatchRecord::new(self.surface_text, self.position, self.term_id);
        record.choose(choice);
        Ok(record)
    }
}

fn serialization_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Serialization(message.into()))
}

/// Serializes a review to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(review: &Review) -> Result<Vec<u8>> {
    let snapshot = Snapshot {
        version: FORMAT_VERSION,
        text: review.text().to_string(),
        current: review.current_index(),
        records: review.records().iter().map(SnapshotRecord::from).collect(),
    };
    rmp_serde::to_vec_named(&snapshot).map_err(|e| serialization_error(e.to_string()))
}

/// Deserializes a review from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails, the layout version is
/// unknown, a stored choice is invalid, or a record does not point at its
/// surface text in the stored text.
pub fn from_bytes(bytes: &[u8]) -> Result<Review> {
    let snapshot: Snapshot = rmp_serde::from_slice(bytes).map_err(|e| serialization_error(e.to_string()))?;

    if snapshot.version != FORMAT_VERSION {
        return Err(serialization_error(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }

    let records = snapshot
        .records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_record(index, &snapshot.text))
        .collect::<Result<Vec<_>>>()?;

    Ok(Review::with_cursor(snapshot.text, records, snapshot.current))
}

/// Saves a review to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(review: &Review, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display())).with_context(context(path, "save snapshot"))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(review)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display())).with_context(context(path, "save snapshot"))
    })?;
    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display())).with_context(context(path, "save snapshot"))
    })?;

    debug!(path = %path.display(), matches = review.records().len(), "snapshot saved");
    Ok(())
}

/// Loads a review from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Review> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file '{}': {e}", path.display())).with_context(context(path, "restore snapshot"))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display())).with_context(context(path, "restore snapshot"))
    })?;

    from_bytes(&bytes).map_err(|e| e.with_context(context(path, "restore snapshot")))
}
