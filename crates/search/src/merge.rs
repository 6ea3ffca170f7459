//! Search across several instances

use crate::searchable::Searchable;
use searchable_core::{DocId, SearchStrategy};
use std::collections::HashSet;

/// Read-only façade over several `Searchable` instances
///
/// Each instance answers with its own configuration (backend, defaults,
/// normalization). Results are the union of every instance's answer in
/// first-seen order; per-instance ranking does not survive the union.
#[derive(Debug, Clone)]
pub struct MergedSearch<'a> {
    instances: Vec<&'a Searchable>,
}

impl MergedSearch<'_> {
    /// Instances searched, in order
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True if there is nothing to search
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Search every instance with its default strategy
    pub fn search(&self, query: &str) -> Vec<DocId> {
        self.search_with(query, None, None)
    }

    /// Search every instance with an explicit strategy / max distance
    pub fn search_with(
        &self,
        query: &str,
        strategy: Option<SearchStrategy>,
        max_distance: Option<usize>,
    ) -> Vec<DocId> {
        let mut seen = HashSet::new();
        let mut union = Vec::new();
        for instance in &self.instances {
            for doc_id in instance.search(query, strategy, max_distance) {
                if seen.insert(doc_id.clone()) {
                    union.push(doc_id);
                }
            }
        }
        union
    }
}

impl Searchable {
    /// Combine instances into one searchable façade
    ///
    /// # Example
    ///
    /// ```
    /// use searchable_search::{Searchable, SearchableConfig};
    ///
    /// let mut people = Searchable::new(SearchableConfig::default()).unwrap();
    /// people.add("james bond", "007").unwrap();
    /// let mut drinks = Searchable::new(SearchableConfig::default()).unwrap();
    /// drinks.add("jameson", "whiskey").unwrap();
    ///
    /// let merged = Searchable::merge([&people, &drinks]);
    /// assert_eq!(merged.search("jam"), vec!["007", "whiskey"]);
    /// ```
    pub fn merge<'a, I>(instances: I) -> MergedSearch<'a>
    where
        I: IntoIterator<Item = &'a Searchable>,
    {
        MergedSearch {
            instances: instances.into_iter().collect(),
        }
    }
}
