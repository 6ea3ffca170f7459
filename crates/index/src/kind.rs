//! Backend selection

use crate::{InvertedIndex, TrieIndex};
use searchable_core::{Error, Index};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which backend a Searchable instance owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Hash-map inverted index (default)
    #[default]
    Inverted,
    /// Character trie
    Trie,
}

impl IndexKind {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Inverted => "inverted",
            IndexKind::Trie => "trie",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inverted" => Ok(IndexKind::Inverted),
            "trie" => Ok(IndexKind::Trie),
            other => Err(Error::invalid_config(format!(
                "unknown index kind '{}', expected \"inverted\" or \"trie\"",
                other
            ))),
        }
    }
}

/// Create an empty backend of the given kind
pub fn new_index(kind: IndexKind) -> Box<dyn Index> {
    match kind {
        IndexKind::Inverted => Box::new(InvertedIndex::new()),
        IndexKind::Trie => Box::new(TrieIndex::new()),
    }
}
