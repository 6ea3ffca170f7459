//! Thread-shared handle
//!
//! `Searchable` does no locking of its own. `SharedSearchable` wraps one in a
//! read-write lock: any number of concurrent searches, one writer at a time.

use crate::batch::BatchResult;
use crate::config::SearchableConfig;
use crate::searchable::Searchable;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use searchable_core::{DocId, RestoreInput, Result, SearchStrategy};
use std::sync::Arc;

/// Cloneable, thread-safe handle to one `Searchable`
///
/// Clones share the same index.
///
/// # Example
///
/// ```
/// use searchable_search::{SearchableConfig, SharedSearchable};
///
/// let shared = SharedSearchable::new(SearchableConfig::default()).unwrap();
/// shared.add("james bond", "007").unwrap();
///
/// let reader = shared.clone();
/// let found = std::thread::spawn(move || reader.search("bond", None, None))
///     .join()
///     .unwrap();
/// assert_eq!(found, vec!["007"]);
/// ```
#[derive(Debug, Clone)]
pub struct SharedSearchable {
    inner: Arc<RwLock<Searchable>>,
}

impl SharedSearchable {
    /// Build a fresh instance behind a lock
    pub fn new(config: SearchableConfig) -> Result<Self> {
        Ok(Self::from_searchable(Searchable::new(config)?))
    }

    /// Share an existing instance
    pub fn from_searchable(searchable: Searchable) -> Self {
        SharedSearchable {
            inner: Arc::new(RwLock::new(searchable)),
        }
    }

    /// Shared access for several reads under one lock
    pub fn read(&self) -> RwLockReadGuard<'_, Searchable> {
        self.inner.read()
    }

    /// Exclusive access for several writes under one lock
    pub fn write(&self) -> RwLockWriteGuard<'_, Searchable> {
        self.inner.write()
    }

    /// See [`Searchable::search`]
    pub fn search(
        &self,
        query: &str,
        strategy: Option<SearchStrategy>,
        max_distance: Option<usize>,
    ) -> Vec<DocId> {
        self.inner.read().search(query, strategy, max_distance)
    }

    /// See [`Searchable::add`]
    pub fn add(&self, input: &str, doc_id: &str) -> Result<usize> {
        self.inner.write().add(input, doc_id)
    }

    /// See [`Searchable::add_batch`]
    pub fn add_batch<I, K, V>(&self, items: I, strict: bool) -> Result<BatchResult>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inner.write().add_batch(items, strict)
    }

    /// See [`Searchable::remove_doc_id`]
    pub fn remove_doc_id(&self, doc_id: &str) -> usize {
        self.inner.write().remove_doc_id(doc_id)
    }

    /// See [`Searchable::restore`]
    pub fn restore(&self, input: impl Into<RestoreInput>) -> Result<bool> {
        self.inner.write().restore(input)
    }

    /// See [`Searchable::dump_json`]
    pub fn dump_json(&self) -> Result<String> {
        self.inner.read().dump_json()
    }
}
