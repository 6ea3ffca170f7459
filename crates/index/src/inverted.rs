//! Hash-map inverted index
//!
//! This module provides:
//! - word -> docIds and docId -> words maps kept consistent on every mutation
//! - O(1) exact lookup
//! - prefix and fuzzy search by linear scan of the vocabulary
//!
//! # Invariant
//!
//! A (word, docId) pair is present in `word_to_doc_ids` iff it is present in
//! `doc_id_to_words`. Neither map ever holds an empty set.

use searchable_core::{
    record_min_distance, validate_posting, DistanceMap, DocId, Dump, Index, Result, Word,
};
use searchable_text::levenshtein;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// ============================================================================
// InvertedIndex
// ============================================================================

/// Inverted index over normalized words
///
/// The default backend. Exact lookups are a single map probe; prefix and
/// fuzzy lookups visit every indexed word.
///
/// # Example
///
/// ```
/// use searchable_core::Index;
/// use searchable_index::InvertedIndex;
///
/// let mut index = InvertedIndex::new();
/// index.add_word("hello", "doc1").unwrap();
/// index.add_word("hello", "doc2").unwrap();
///
/// assert_eq!(index.search_exact("hello"), vec!["doc1", "doc2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Main index: word -> docIds
    word_to_doc_ids: HashMap<Word, BTreeSet<DocId>>,

    /// Reverse index: docId -> words
    doc_id_to_words: HashMap<DocId, BTreeSet<Word>>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every word accepted by `matches` into a distance map
    fn scan<F>(&self, mut matches: F) -> DistanceMap
    where
        F: FnMut(&str) -> Option<usize>,
    {
        let mut out = DistanceMap::new();
        for (word, doc_ids) in &self.word_to_doc_ids {
            if let Some(distance) = matches(word) {
                for doc_id in doc_ids {
                    record_min_distance(&mut out, doc_id, distance);
                }
            }
        }
        out
    }
}

impl Index for InvertedIndex {
    fn word_count(&self) -> usize {
        self.word_to_doc_ids.len()
    }

    fn doc_id_count(&self) -> usize {
        self.doc_id_to_words.len()
    }

    fn all_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.word_to_doc_ids.keys().cloned().collect();
        words.sort();
        words
    }

    fn all_doc_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.doc_id_to_words.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn add_word(&mut self, word: &str, doc_id: &str) -> Result<bool> {
        validate_posting(word, doc_id)?;

        let is_new = self
            .word_to_doc_ids
            .entry(word.to_string())
            .or_default()
            .insert(doc_id.to_string());

        self.doc_id_to_words
            .entry(doc_id.to_string())
            .or_default()
            .insert(word.to_string());

        Ok(is_new)
    }

    fn remove_word(&mut self, word: &str, doc_id: &str) -> Result<bool> {
        validate_posting(word, doc_id)?;

        let Some(doc_ids) = self.word_to_doc_ids.get_mut(word) else {
            return Ok(false);
        };
        let removed = doc_ids.remove(doc_id);
        if doc_ids.is_empty() {
            self.word_to_doc_ids.remove(word);
        }

        if let Some(words) = self.doc_id_to_words.get_mut(doc_id) {
            words.remove(word);
            if words.is_empty() {
                self.doc_id_to_words.remove(doc_id);
            }
        }

        Ok(removed)
    }

    fn remove_doc_id(&mut self, doc_id: &str) -> usize {
        let Some(words) = self.doc_id_to_words.remove(doc_id) else {
            return 0;
        };

        for word in &words {
            if let Some(doc_ids) = self.word_to_doc_ids.get_mut(word) {
                doc_ids.remove(doc_id);
                if doc_ids.is_empty() {
                    self.word_to_doc_ids.remove(word);
                }
            }
        }

        tracing::debug!(
            target: "searchable::index",
            doc_id = doc_id,
            removed = words.len(),
            "Removed docId from inverted index"
        );
        words.len()
    }

    fn search_exact(&self, word: &str) -> Vec<DocId> {
        self.word_to_doc_ids
            .get(word)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn search_by_prefix_with_distance(&self, prefix: &str) -> DistanceMap {
        self.scan(|word| word.starts_with(prefix).then(|| levenshtein(prefix, word)))
    }

    fn search_fuzzy_with_distance(&self, word: &str, max_distance: usize) -> DistanceMap {
        self.scan(|indexed| {
            let distance = levenshtein(word, indexed);
            (distance <= max_distance).then_some(distance)
        })
    }

    fn search_by_doc_id(&self, doc_id: &str) -> Vec<Word> {
        self.doc_id_to_words
            .get(doc_id)
            .map(|words| words.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        self.word_to_doc_ids.clear();
        self.doc_id_to_words.clear();
    }

    fn dump(&self) -> Dump {
        let words: BTreeMap<Word, Vec<DocId>> = self
            .word_to_doc_ids
            .iter()
            .map(|(word, ids)| (word.clone(), ids.iter().cloned().collect()))
            .collect();
        Dump::new(words)
    }
}
