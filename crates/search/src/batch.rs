//! Batch insert

use crate::searchable::Searchable;
use searchable_core::{DocId, Error, Result};

/// Outcome of [`Searchable::add_batch`]
#[derive(Debug, Default)]
pub struct BatchResult {
    /// New (word, docId) pairs across the whole batch
    pub added: usize,
    /// Documents that failed, in input order (non-strict mode only)
    pub errors: Vec<(DocId, Error)>,
}

impl BatchResult {
    /// True if every document went in
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Searchable {
    /// Index many `(doc_id, text)` pairs
    ///
    /// Accepts anything iterable as pairs: vectors, arrays, maps.
    ///
    /// In strict mode the first failing document aborts the batch (documents
    /// before it stay indexed). Otherwise failures are collected in
    /// [`BatchResult::errors`] and the batch carries on.
    ///
    /// # Example
    ///
    /// ```
    /// use searchable_search::{Searchable, SearchableConfig};
    /// use std::collections::BTreeMap;
    ///
    /// let mut index = Searchable::new(SearchableConfig::default()).unwrap();
    /// let docs = BTreeMap::from([("1", "peter pan"), ("2", ""), ("3", "shrek")]);
    ///
    /// let result = index.add_batch(docs, false).unwrap();
    /// assert_eq!(result.added, 3);
    /// assert_eq!(result.errors.len(), 1);
    /// ```
    pub fn add_batch<I, K, V>(&mut self, items: I, strict: bool) -> Result<BatchResult>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut result = BatchResult::default();
        for (doc_id, input) in items {
            let doc_id = doc_id.as_ref();
            match self.add(input.as_ref(), doc_id) {
                Ok(added) => result.added += added,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        target: "searchable::search",
                        doc_id = doc_id,
                        error = %e,
                        "Batch entry skipped"
                    );
                    result.errors.push((doc_id.to_string(), e));
                }
            }
        }

        tracing::info!(
            target: "searchable::search",
            added = result.added,
            errors = result.errors.len(),
            "Batch indexed"
        );
        Ok(result)
    }
}
