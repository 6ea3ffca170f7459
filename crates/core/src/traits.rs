//! The index backend contract
//!
//! This module defines the Index trait that enables swapping the trie and the
//! inverted backend (or any future one) without touching the orchestrator.
//! Both backends must expose identical externally observable semantics.

use crate::dump::{Dump, RestoreInput};
use crate::error::{Error, Result};
use crate::types::{DistanceMap, DocId, Word};

/// Word/document index backend
///
/// Holds the many-to-many posting relation between words and docIds in both
/// directions. A (word, docId) pair exists in one direction iff it exists in
/// the other; removing the last docId of a word drops the word and removing
/// the last word of a docId drops the docId.
///
/// Words are assumed to be normalized already.
///
/// Thread safety: implementations hold no interior mutability. Callers share
/// an index across threads behind a lock (requires Send + Sync).
pub trait Index: Send + Sync {
    /// Number of unique words (n-gram keys included)
    fn word_count(&self) -> usize;

    /// Number of unique docIds
    fn doc_id_count(&self) -> usize;

    /// All indexed words, sorted
    fn all_words(&self) -> Vec<Word>;

    /// All indexed docIds, sorted
    fn all_doc_ids(&self) -> Vec<DocId>;

    /// Register a (word, docId) pair
    ///
    /// Returns true iff the pair was not present before.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `word` or `doc_id` is empty.
    fn add_word(&mut self, word: &str, doc_id: &str) -> Result<bool>;

    /// Remove a (word, docId) pair
    ///
    /// Returns whether the pair was present.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `word` or `doc_id` is empty.
    fn remove_word(&mut self, word: &str, doc_id: &str) -> Result<bool>;

    /// Remove every pair for `doc_id`, returning how many were removed
    fn remove_doc_id(&mut self, doc_id: &str) -> usize;

    /// DocIds carrying exactly `word`, sorted
    fn search_exact(&self, word: &str) -> Vec<DocId>;

    /// DocIds reachable through any word starting with `prefix`
    ///
    /// Each docId maps to the minimum edit distance between `prefix` and any
    /// matching word that reaches it.
    fn search_by_prefix_with_distance(&self, prefix: &str) -> DistanceMap;

    /// DocIds reachable through any word within `max_distance` edits of `word`
    ///
    /// Each docId maps to the minimum distance among its matching words.
    fn search_fuzzy_with_distance(&self, word: &str, max_distance: usize) -> DistanceMap;

    /// Words associated with `doc_id`, sorted
    fn search_by_doc_id(&self, doc_id: &str) -> Vec<Word>;

    /// Drop all state
    fn clear(&mut self);

    /// Snapshot of every posting
    fn dump(&self) -> Dump;

    /// Prefix matches sorted ascending by distance (ties by docId)
    fn search_by_prefix(&self, prefix: &str) -> Vec<DocId> {
        sort_by_distance(&self.search_by_prefix_with_distance(prefix))
    }

    /// Fuzzy matches sorted ascending by distance (ties by docId)
    fn search_fuzzy(&self, word: &str, max_distance: usize) -> Vec<DocId> {
        sort_by_distance(&self.search_fuzzy_with_distance(word, max_distance))
    }

    /// True when nothing is indexed
    fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    /// Replace all state with the snapshot in `input`
    ///
    /// Returns `Ok(false)` without touching state when the snapshot has no
    /// `words` map.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the input cannot be parsed, or
    /// `Error::InvalidArgument` if it holds empty words or docIds. In both
    /// cases existing state is left intact.
    fn restore(&mut self, input: RestoreInput) -> Result<bool> {
        let dump = match input.into_dump() {
            Ok(Some(dump)) => dump,
            Ok(None) => {
                tracing::warn!(
                    target: "searchable::index",
                    "Snapshot has no words map, index left unchanged"
                );
                return Ok(false);
            }
            Err(e) => {
                tracing::error!(
                    target: "searchable::index",
                    error = %e,
                    "Error restoring index"
                );
                return Err(e);
            }
        };
        dump.validate()?;

        self.clear();
        for (word, doc_ids) in &dump.words {
            for doc_id in doc_ids {
                self.add_word(word, doc_id)?;
            }
        }

        tracing::info!(
            target: "searchable::index",
            postings = dump.posting_count(),
            words = self.word_count(),
            doc_ids = self.doc_id_count(),
            "Index restored from snapshot"
        );
        Ok(true)
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Reject empty words and docIds
pub fn validate_posting(word: &str, doc_id: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::invalid_argument("Word must be a non-empty string"));
    }
    if doc_id.is_empty() {
        return Err(Error::invalid_argument("DocId must be a non-empty string"));
    }
    Ok(())
}

/// Keep the smaller of the stored and the new distance for `doc_id`
pub fn record_min_distance(map: &mut DistanceMap, doc_id: &str, distance: usize) {
    match map.get_mut(doc_id) {
        Some(current) => *current = (*current).min(distance),
        None => {
            map.insert(doc_id.to_string(), distance);
        }
    }
}

/// DocIds ordered by ascending distance
///
/// The sort is stable over the map's docId order, so ties come out ascending
/// by docId.
pub fn sort_by_distance(map: &DistanceMap) -> Vec<DocId> {
    let mut entries: Vec<(&DocId, &usize)> = map.iter().collect();
    entries.sort_by_key(|(_, distance)| **distance);
    entries.into_iter().map(|(id, _)| id.clone()).collect()
}
