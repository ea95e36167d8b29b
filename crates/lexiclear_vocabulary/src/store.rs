//! Vocabulary store.
//!
//! Holds the ambiguous terms in load order, indexes them by id, and resolves
//! each term's related ambiguities once, caching the result for the lifetime
//! of the store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use lexiclear_foundation::{Error, Result, TermId, TermKind};
use tracing::{debug, trace};

use crate::term::AmbiguousTerm;

/// Runtime storage for ambiguous term definitions.
#[derive(Debug, Default)]
pub struct Vocabulary {
    /// Terms in load order
    terms: Vec<AmbiguousTerm>,
    /// Term id -> position in `terms`
    index: HashMap<TermId, usize>,
    /// Term id -> resolved related terms
    related: Mutex<HashMap<TermId, Arc<[AmbiguousTerm]>>>,
}

impl Vocabulary {
    /// Builds a vocabulary from terms, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a malformed vocabulary error naming the first term whose id
    /// was already used.
    pub fn new(terms: Vec<AmbiguousTerm>) -> Result<Self> {
        let mut index = HashMap::with_capacity(terms.len());
        for (position, term) in terms.iter().enumerate() {
            if index.insert(term.id, position).is_some() {
                return Err(Error::malformed_record(
                    position,
                    format!("duplicate id {}", term.id.get()),
                ));
            }
        }

        debug!(terms = terms.len(), "vocabulary built");

        Ok(Self {
            terms,
            index,
            related: Mutex::new(HashMap::new()),
        })
    }

    /// Creates an empty vocabulary.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up a term by id.
    #[must_use]
    pub fn get(&self, id: TermId) -> Option<&AmbiguousTerm> {
        self.index.get(&id).map(|&position| &self.terms[position])
    }

    /// Returns the terms listed in `term.related_ids`, in listed order.
    ///
    /// Ids that do not resolve are skipped. The first call for a term id
    /// scans the vocabulary; later calls return the same shared slice.
    #[must_use]
    pub fn related_of(&self, term: &AmbiguousTerm) -> Arc<[AmbiguousTerm]> {
        let mut cache = self.related.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = cache.get(&term.id) {
            return Arc::clone(hit);
        }

        let resolved: Arc<[AmbiguousTerm]> = term
            .related_ids
            .iter()
            .filter_map(|id| {
                let found = self.get(*id);
                if found.is_none() {
                    trace!(term = %term.id, related = %id, "skipping dangling related id");
                }
                found.cloned()
            })
            .collect();

        cache.insert(term.id, Arc::clone(&resolved));
        resolved
    }

    /// Returns how many terms have had their relationships resolved.
    #[must_use]
    pub fn related_cache_len(&self) -> usize {
        self.related
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Iterates over the terms in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, AmbiguousTerm> {
        self.terms.iter()
    }

    /// Iterates over the terms of one kind, in load order.
    pub fn terms_of_kind(&self, kind: TermKind) -> impl Iterator<Item = &AmbiguousTerm> {
        self.terms.iter().filter(move |term| term.kind == kind)
    }

    /// Returns the terms as a slice.
    #[must_use]
    pub fn terms(&self) -> &[AmbiguousTerm] {
        &self.terms
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the vocabulary has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Clone for Vocabulary {
    fn clone(&self) -> Self {
        let related = self
            .related
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self {
            terms: self.terms.clone(),
            index: self.index.clone(),
            related: Mutex::new(related),
        }
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Vocabulary {}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a AmbiguousTerm;
    type IntoIter = std::slice::Iter<'a, AmbiguousTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
