//! JSON record format for vocabularies.
//!
//! A vocabulary document is a JSON array of records:
//!
//! ```json
//! [
//!     {
//!         "id": 1,
//!         "word": "accept",
//!         "meaning": "to receive willingly",
//!         "kind": 2,
//!         "relatedIds": [2],
//!         "variants": []
//!     }
//! ]
//! ```
//!
//! `kind` is 0 (noun), 1 (verb) or 2 (other). `variants` may be omitted or
//! null. The capitalised names `Id`, `Word`, `Meaning`, `Type`, `Ambiguities`
//! and `Variants` are accepted as aliases. Unknown fields are ignored and are
//! not written back.

use lexiclear_foundation::{Error, ErrorKind, Result, TermId, TermKind};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::store::Vocabulary;
use crate::term::AmbiguousTerm;

/// On-disk shape of one term.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TermRecord {
    #[serde(alias = "Id")]
    id: u32,
    #[serde(alias = "Word")]
    word: String,
    #[serde(alias = "Meaning")]
    meaning: String,
    #[serde(alias = "Type")]
    kind: i64,
    #[serde(alias = "Ambiguities")]
    related_ids: Vec<u32>,
    #[serde(alias = "Variants", default)]
    variants: Option<Vec<String>>,
}

impl TermRecord {
    fn into_term(self, record: usize) -> Result<AmbiguousTerm> {
        let kind = TermKind::from_code(self.kind).ok_or_else(|| {
            Error::malformed_record(
                record,
                format!("kind must be 0, 1 or 2, got {}", self.kind),
            )
        })?;

        Ok(AmbiguousTerm {
            id: TermId::new(self.id),
            word: self.word,
            meaning: self.meaning,
            kind,
            related_ids: self.related_ids.into_iter().map(TermId::new).collect(),
            variants: self.variants.unwrap_or_default(),
        })
    }

    fn from_term(term: &AmbiguousTerm) -> Self {
        Self {
            id: term.id.get(),
            word: term.word.clone(),
            meaning: term.meaning.clone(),
            kind: i64::from(term.kind.code()),
            related_ids: term.related_ids.iter().map(|id| id.get()).collect(),
            variants: Some(term.variants.clone()),
        }
    }
}

impl Vocabulary {
    /// Parses a vocabulary document.
    ///
    /// # Errors
    ///
    /// Returns a malformed vocabulary error if the document is not a JSON
    /// array of records, a record is missing a required field, a field has
    /// the wrong type, `kind` is out of range, or an id is repeated.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::malformed_vocabulary(format!("invalid JSON: {e}")))?;

        let serde_json::Value::Array(records) = document else {
            return Err(Error::malformed_vocabulary(
                "expected a JSON array of term records",
            ));
        };

        let mut terms = Vec::with_capacity(records.len());
        for (index, raw) in records.into_iter().enumerate() {
            if !raw.is_object() {
                return Err(Error::malformed_record(index, "record is not an object"));
            }
            let record: TermRecord = serde_json::from_value(raw)
                .map_err(|e| Error::malformed_record(index, e.to_string()))?;
            terms.push(record.into_term(index)?);
        }

        debug!(terms = terms.len(), "vocabulary parsed");
        Self::new(terms)
    }

    /// Serializes the vocabulary as a pretty-printed JSON document.
    ///
    /// The output parses back into an equal vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<TermRecord> = self.iter().map(TermRecord::from_term).collect();

        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut serializer)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;

        String::from_utf8(out).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }
}
