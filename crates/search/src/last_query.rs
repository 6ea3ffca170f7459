//! Last query bookkeeping
//!
//! Purely observational: the search pipeline records into it and never reads
//! it back.

use std::collections::VecDeque;

/// The most recent query and a short history of used queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastQuery {
    /// Query text as given by the caller
    pub raw: String,
    /// Query words that actually ran, space separated (empty if none did)
    pub used: String,
    /// Most recent used queries, oldest first
    pub history: VecDeque<String>,
}

impl LastQuery {
    /// Record one search call, keeping at most `capacity` history entries
    ///
    /// Empty and repeated-consecutive used queries are not added to the
    /// history.
    pub(crate) fn record(&mut self, raw: &str, used: String, capacity: usize) {
        self.raw = raw.to_string();
        if capacity > 0 && !used.is_empty() && self.history.back() != Some(&used) {
            self.history.push_back(used.clone());
            while self.history.len() > capacity {
                self.history.pop_front();
            }
        }
        self.used = used;
    }
}
