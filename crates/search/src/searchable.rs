//! Query orchestrator
//!
//! This module provides:
//! - the insert pipeline (normalize, tokenize, stopwords, word normalizer, n-grams)
//! - the query pipeline (normalize, tokenize, per-word lookup, AND intersection,
//!   distance sort)
//! - strategy dispatch, dump/restore and introspection
//!
//! `Searchable` owns exactly one backend and talks to it only through the
//! `Index` trait.

use crate::config::SearchableConfig;
use crate::last_query::LastQuery;
use parking_lot::Mutex;
use searchable_core::{
    record_min_distance, DistanceMap, DocId, Dump, Error, Index, RestoreInput, Result,
    SearchStrategy, Word,
};
use searchable_index::new_index;
use searchable_text::{ngrams, normalize, Tokenizer};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

// ============================================================================
// Supporting types
// ============================================================================

/// Output of [`Searchable::dump`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutput {
    /// Serialized JSON text
    Json(String),
    /// Structured snapshot
    Structured(Dump),
}

/// One query word's backend answer
enum WordHits {
    /// Exact lookups carry no distance
    Exact(Vec<DocId>),
    /// Prefix and fuzzy lookups carry per-doc distance
    Ranked(DistanceMap),
}

// ============================================================================
// Searchable
// ============================================================================

/// Full-text index over caller-identified documents
///
/// # Architecture
///
/// ```text
///  add(text, docId)              search(query)
///        │                             │
///        ▼                             ▼
///  ┌──────────────┐             ┌──────────────┐
///  │  to_words    │             │  to_words    │
///  │  + n-grams   │             │  query mode  │
///  └──────┬───────┘             └──────┬───────┘
///         │ add_word                   │ one lookup per word
///         ▼                            ▼
///  ┌─────────────────────────────────────────────┐
///  │                 dyn Index                   │
///  └─────────────────────────────────────────────┘
///                                      │
///                                      ▼
///                        intersect, sort by distance
/// ```
///
/// # Example
///
/// ```
/// use searchable_search::{Searchable, SearchableConfig};
///
/// let mut index = Searchable::new(SearchableConfig::default()).unwrap();
/// index.add("james bond", "007").unwrap();
///
/// assert_eq!(index.search("Bond. James Bond.", None, None), vec!["007"]);
/// assert_eq!(index.search_fuzzy("jmaes", 2), vec!["007"]);
/// ```
pub struct Searchable {
    config: SearchableConfig,
    tokenizer: Tokenizer,
    index: Box<dyn Index>,
    last_query: Mutex<LastQuery>,
}

impl fmt::Debug for Searchable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Searchable")
            .field("config", &self.config)
            .field("word_count", &self.index.word_count())
            .field("doc_id_count", &self.index.doc_id_count())
            .finish()
    }
}

impl Searchable {
    /// Create an empty instance
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the config does not validate or its
    /// whitelist cannot be turned into a tokenizer.
    pub fn new(config: SearchableConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(&config.non_word_char_whitelist)?;
        let index = new_index(config.index);

        tracing::debug!(
            target: "searchable::search",
            index = %config.index,
            default_strategy = %config.default_strategy,
            "Searchable created"
        );

        Ok(Searchable {
            config,
            tokenizer,
            index,
            last_query: Mutex::new(LastQuery::default()),
        })
    }

    /// Settings this instance was built with
    pub fn config(&self) -> &SearchableConfig {
        &self.config
    }

    /// Borrow the backend
    pub fn index(&self) -> &dyn Index {
        self.index.as_ref()
    }

    /// Indexed words, n-grams included
    pub fn word_count(&self) -> usize {
        self.index.word_count()
    }

    /// Indexed documents
    pub fn doc_id_count(&self) -> usize {
        self.index.doc_id_count()
    }

    /// Snapshot of the most recent search call
    pub fn last_query(&self) -> LastQuery {
        self.last_query.lock().clone()
    }

    // ========================================================================
    // Word pipeline
    // ========================================================================

    fn is_stopword(&self, word: &str) -> bool {
        self.config
            .is_stopword
            .as_ref()
            .is_some_and(|is_stopword| is_stopword(word))
    }

    /// Split input into unique index words
    ///
    /// With `is_query` set the word normalizer is skipped, so queries only go
    /// through normalization, tokenization and the first stopword pass.
    pub fn to_words(&self, input: &str, is_query: bool) -> Vec<Word> {
        let options = self.config.normalize_options();
        let input = normalize(input, options);

        let mut words: Vec<Word> = self
            .tokenizer
            .tokenize(&input)
            .into_iter()
            .filter(|w| !self.is_stopword(w))
            .collect();

        if !is_query {
            if let Some(normalize_word) = &self.config.normalize_word {
                words = words
                    .iter()
                    .flat_map(|w| normalize_word(w.as_str()).into_words())
                    .collect();
            }
            // The normalizer may have produced anything; bring it back in line
            words = words
                .iter()
                .map(|w| normalize(w, options))
                .filter(|w| !w.is_empty() && !self.is_stopword(w))
                .collect();
        }

        let mut seen = HashSet::new();
        words.retain(|w| seen.insert(w.clone()));
        words
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Index `input` under `doc_id`
    ///
    /// Returns how many new (word, docId) pairs were created, n-grams
    /// included. Re-adding the same text is a no-op returning 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `input` or `doc_id` is empty.
    pub fn add(&mut self, input: &str, doc_id: &str) -> Result<usize> {
        if input.is_empty() {
            return Err(Error::invalid_argument("Input must be a non-empty string"));
        }
        if doc_id.is_empty() {
            return Err(Error::invalid_argument("DocId must be a non-empty string"));
        }

        let words = self.to_words(input, false);
        let mut added = 0;
        for word in &words {
            added += usize::from(self.index.add_word(word, doc_id)?);

            for size in self.config.active_ngram_sizes() {
                for ngram in ngrams(word, size, None) {
                    added += usize::from(self.index.add_word(&ngram, doc_id)?);
                }
            }
        }

        tracing::debug!(
            target: "searchable::search",
            doc_id = doc_id,
            words = words.len(),
            added = added,
            "Document indexed"
        );
        Ok(added)
    }

    /// Like [`add`](Self::add) but never fails: invalid input is logged and
    /// counts as zero additions
    pub fn add_lenient(&mut self, input: &str, doc_id: &str) -> usize {
        match self.add(input, doc_id) {
            Ok(added) => added,
            Err(e) => {
                tracing::warn!(
                    target: "searchable::search",
                    doc_id = doc_id,
                    error = %e,
                    "Skipped document"
                );
                0
            }
        }
    }

    /// Drop every word of a document
    pub fn remove_doc_id(&mut self, doc_id: &str) -> usize {
        self.index.remove_doc_id(doc_id)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Run `lookup` per query word, AND the results, sort by distance
    fn run_query<F>(&self, query: &str, strategy: SearchStrategy, lookup: F) -> Vec<DocId>
    where
        F: Fn(&dyn Index, &str) -> WordHits,
    {
        let words = self.to_words(query, true);
        let min_len = self.config.query_min_word_length;
        let runnable = words.iter().any(|w| w.chars().count() >= min_len);

        let used = if runnable { words.join(" ") } else { String::new() };
        self.last_query
            .lock()
            .record(query, used, self.config.query_history_len);

        if !runnable {
            tracing::debug!(
                target: "searchable::search",
                query = query,
                min_word_length = min_len,
                "Query too short"
            );
            return Vec::new();
        }

        let mut distances = DistanceMap::new();
        let mut survivors: Option<BTreeSet<DocId>> = None;

        for word in &words {
            let found: BTreeSet<DocId> = match lookup(self.index.as_ref(), word) {
                WordHits::Exact(doc_ids) => doc_ids.into_iter().collect(),
                WordHits::Ranked(map) => {
                    for (doc_id, distance) in &map {
                        record_min_distance(&mut distances, doc_id, *distance);
                    }
                    map.into_keys().collect()
                }
            };

            survivors = Some(match survivors {
                None => found,
                Some(acc) => acc.intersection(&found).cloned().collect(),
            });
            if survivors.as_ref().is_some_and(BTreeSet::is_empty) {
                break;
            }
        }

        let mut results: Vec<DocId> = survivors.unwrap_or_default().into_iter().collect();
        results.sort_by_key(|doc_id| distances.get(doc_id).copied().unwrap_or(0));

        tracing::debug!(
            target: "searchable::search",
            query = query,
            strategy = %strategy,
            words = words.len(),
            results = results.len(),
            "Query executed"
        );
        results
    }

    /// Documents containing every query word exactly
    pub fn search_exact(&self, query: &str) -> Vec<DocId> {
        self.run_query(query, SearchStrategy::Exact, |index, word| {
            WordHits::Exact(index.search_exact(word))
        })
    }

    /// Documents with a word starting with each query word, closest first
    pub fn search_by_prefix(&self, query: &str) -> Vec<DocId> {
        self.run_query(query, SearchStrategy::Prefix, |index, word| {
            WordHits::Ranked(index.search_by_prefix_with_distance(word))
        })
    }

    /// Documents with a word within `max_distance` edits of each query word,
    /// closest first
    ///
    /// With n-grams enabled, n-gram keys match too and their distances are
    /// mixed in with real words, which can make results very permissive.
    pub fn search_fuzzy(&self, query: &str, max_distance: usize) -> Vec<DocId> {
        self.run_query(query, SearchStrategy::Fuzzy, |index, word| {
            WordHits::Ranked(index.search_fuzzy_with_distance(word, max_distance))
        })
    }

    /// Dispatch to a strategy
    ///
    /// `strategy` falls back to the configured default, and `max_distance`
    /// (fuzzy only) to the configured default max distance.
    pub fn search(
        &self,
        query: &str,
        strategy: Option<SearchStrategy>,
        max_distance: Option<usize>,
    ) -> Vec<DocId> {
        let strategy = strategy.unwrap_or(self.config.default_strategy);
        match strategy {
            SearchStrategy::Exact => self.search_exact(query),
            SearchStrategy::Prefix => self.search_by_prefix(query),
            SearchStrategy::Fuzzy => self.search_fuzzy(
                query,
                max_distance.unwrap_or(self.config.default_max_distance),
            ),
        }
    }

    /// Dispatch to a strategy given by name (`"exact"`, `"prefix"`, `"fuzzy"`)
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownStrategy` for any other name.
    pub fn search_named(
        &self,
        query: &str,
        strategy: &str,
        max_distance: Option<usize>,
    ) -> Result<Vec<DocId>> {
        let strategy: SearchStrategy = strategy.parse()?;
        Ok(self.search(query, Some(strategy), max_distance))
    }

    // ========================================================================
    // Dump / restore
    // ========================================================================

    /// Snapshot the backend, as JSON text if `stringify` is set
    pub fn dump(&self, stringify: bool) -> Result<DumpOutput> {
        let dump = self.index.dump();
        if stringify {
            Ok(DumpOutput::Json(dump.to_json()?))
        } else {
            Ok(DumpOutput::Structured(dump))
        }
    }

    /// Snapshot the backend as JSON text
    pub fn dump_json(&self) -> Result<String> {
        self.index.dump().to_json()
    }

    /// Snapshot the backend as a structure
    pub fn dump_structured(&self) -> Dump {
        self.index.dump()
    }

    /// Replace the whole index with a snapshot
    ///
    /// Returns `Ok(false)` (index untouched) when the snapshot has no `words`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the input does not parse; the index
    /// is left untouched.
    pub fn restore(&mut self, input: impl Into<RestoreInput>) -> Result<bool> {
        let restored = self.index.restore(input.into())?;
        if restored {
            tracing::info!(
                target: "searchable::search",
                words = self.index.word_count(),
                doc_ids = self.index.doc_id_count(),
                "Searchable restored"
            );
        }
        Ok(restored)
    }
}
