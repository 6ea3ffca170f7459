//! Backend-agnostic index snapshot
//!
//! A dump is a flat `word -> [docId]` map, sufficient to rebuild either
//! backend from scratch:
//!
//! ```json
//! { "version": "1.0", "words": { "<word>": ["<docId>", ...] } }
//! ```
//!
//! `version` is advisory. A snapshot is accepted whatever its version as long
//! as it carries a `words` map.

use crate::error::{Error, Result};
use crate::types::{DocId, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version written by every `dump()`
pub const DUMP_VERSION: &str = "1.0";

// ============================================================================
// Dump
// ============================================================================

/// Flat snapshot of an index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dump {
    /// Schema version (advisory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Word -> docIds carrying it (a set, serialized as a list)
    pub words: BTreeMap<Word, Vec<DocId>>,
}

impl Dump {
    /// Create a snapshot stamped with [`DUMP_VERSION`]
    pub fn new(words: BTreeMap<Word, Vec<DocId>>) -> Self {
        Dump {
            version: Some(DUMP_VERSION.to_string()),
            words,
        }
    }

    /// Serialize to the JSON wire form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Total number of (word, docId) pairs
    pub fn posting_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Reject snapshots that would make a backend fail halfway through a rebuild
    pub fn validate(&self) -> Result<()> {
        for (word, doc_ids) in &self.words {
            if word.is_empty() {
                return Err(Error::invalid_argument("Dump contains an empty word"));
            }
            if doc_ids.iter().any(String::is_empty) {
                return Err(Error::invalid_argument(format!(
                    "Dump contains an empty docId for word \"{}\"",
                    word
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// RestoreInput
// ============================================================================

/// Wire shape accepted before a snapshot is known to carry `words`
#[derive(Deserialize)]
struct RawDump {
    #[serde(default)]
    version: Option<serde_json::Value>,
    #[serde(default)]
    words: Option<BTreeMap<Word, Vec<DocId>>>,
}

/// Anything `restore()` accepts: the structure or its serialized form
#[derive(Debug, Clone)]
pub enum RestoreInput {
    /// JSON text as produced by `dump(true)`
    Json(String),
    /// Already-parsed JSON
    Value(serde_json::Value),
    /// Structured snapshot
    Dump(Dump),
}

impl RestoreInput {
    /// Resolve into a snapshot
    ///
    /// Returns `Ok(None)` when the input parses but has no `words` map, and
    /// `Err(Error::Serialization)` when it does not parse at all.
    pub fn into_dump(self) -> Result<Option<Dump>> {
        let raw: Option<RawDump> = match self {
            RestoreInput::Dump(dump) => return Ok(Some(dump)),
            RestoreInput::Json(text) => serde_json::from_str(&text)?,
            RestoreInput::Value(value) => serde_json::from_value(value)?,
        };

        let Some(raw) = raw else {
            return Ok(None);
        };
        let Some(words) = raw.words else {
            return Ok(None);
        };

        // Only a string version is kept; any other JSON type is dropped.
        let version = match raw.version {
            Some(serde_json::Value::String(v)) => Some(v),
            _ => None,
        };
        if version.as_deref().is_some_and(|v| v != DUMP_VERSION) {
            tracing::debug!(
                target: "searchable::dump",
                version = version.as_deref().unwrap_or_default(),
                expected = DUMP_VERSION,
                "Restoring snapshot with unfamiliar version"
            );
        }

        Ok(Some(Dump { version, words }))
    }
}

impl From<&str> for RestoreInput {
    fn from(s: &str) -> Self {
        RestoreInput::Json(s.to_string())
    }
}

impl From<String> for RestoreInput {
    fn from(s: String) -> Self {
        RestoreInput::Json(s)
    }
}

impl From<&String> for RestoreInput {
    fn from(s: &String) -> Self {
        RestoreInput::Json(s.clone())
    }
}

impl From<serde_json::Value> for RestoreInput {
    fn from(v: serde_json::Value) -> Self {
        RestoreInput::Value(v)
    }
}

impl From<Dump> for RestoreInput {
    fn from(d: Dump) -> Self {
        RestoreInput::Dump(d)
    }
}
