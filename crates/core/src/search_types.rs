//! Search strategy selection
//!
//! The orchestrator resolves a strategy per call from an explicit argument,
//! then the configured default, then [`SearchStrategy::Prefix`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// SearchStrategy
// ============================================================================

/// How each query word is matched against indexed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Indexed word equals the query word
    Exact,
    /// Indexed word starts with the query word (default)
    #[default]
    Prefix,
    /// Indexed word is within a maximum edit distance of the query word
    Fuzzy,
}

impl SearchStrategy {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Exact => "exact",
            SearchStrategy::Prefix => "prefix",
            SearchStrategy::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(SearchStrategy::Exact),
            "prefix" => Ok(SearchStrategy::Prefix),
            "fuzzy" => Ok(SearchStrategy::Fuzzy),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}
