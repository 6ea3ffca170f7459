//! Searchable configuration
//!
//! A `SearchableConfig` is built once, validated, and moved into the
//! `Searchable` it configures. Plain settings can also be loaded from TOML;
//! the two hooks (stopword predicate and word normalizer) are code and are
//! attached with builder methods.
//!
//! ```toml
//! case_sensitive = false
//! accent_sensitive = false
//! index = "trie"
//! non_word_char_whitelist = "@-"
//! ngram_sizes = [3]
//! query_min_word_length = 1
//! default_strategy = "prefix"
//! default_max_distance = 2
//! query_history_len = 5
//! ```

use searchable_core::{Error, Result, SearchStrategy};
use searchable_index::IndexKind;
use searchable_text::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// In-word characters used when no whitelist is configured
pub const DEFAULT_NON_WORD_CHAR_WHITELIST: &str = "@-";

/// Max edit distance used by fuzzy search when none is given
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Number of used queries kept in `LastQuery::history`
pub const DEFAULT_QUERY_HISTORY_LEN: usize = 5;

// ============================================================================
// Hooks
// ============================================================================

/// Stopword predicate: `true` drops the word
pub type StopwordFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Word normalizer applied at insert time (stemming, synonyms, aliases...)
pub type NormalizeWordFn = Arc<dyn Fn(&str) -> NormalizedWord + Send + Sync>;

/// What a word normalizer turns one token into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedWord {
    /// Replace the token with one word
    One(String),
    /// Expand the token into several words
    Many(Vec<String>),
    /// Drop the token
    Drop,
}

impl NormalizedWord {
    /// Flatten into the resulting words
    pub fn into_words(self) -> Vec<String> {
        match self {
            NormalizedWord::One(word) => vec![word],
            NormalizedWord::Many(words) => words,
            NormalizedWord::Drop => Vec::new(),
        }
    }
}

impl From<&str> for NormalizedWord {
    fn from(word: &str) -> Self {
        NormalizedWord::One(word.to_string())
    }
}

impl From<String> for NormalizedWord {
    fn from(word: String) -> Self {
        NormalizedWord::One(word)
    }
}

impl From<Vec<String>> for NormalizedWord {
    fn from(words: Vec<String>) -> Self {
        NormalizedWord::Many(words)
    }
}

impl From<Option<String>> for NormalizedWord {
    fn from(word: Option<String>) -> Self {
        word.map_or(NormalizedWord::Drop, NormalizedWord::One)
    }
}

// ============================================================================
// SearchableConfig
// ============================================================================

/// Per-instance settings, read-only once the instance is built
///
/// # Example
///
/// ```
/// use searchable_search::{NormalizedWord, SearchableConfig};
/// use searchable_index::IndexKind;
///
/// let config = SearchableConfig::default()
///     .with_index(IndexKind::Trie)
///     .with_ngram_sizes([3])
///     .with_stopwords(|w| w == "the")
///     .with_normalize_word(|w| match w {
///         "football" | "basketball" => NormalizedWord::from("sport"),
///         other => NormalizedWord::from(other),
///     });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchableConfig {
    /// Keep letter case (default: false)
    pub case_sensitive: bool,

    /// Keep diacritics (default: false)
    pub accent_sensitive: bool,

    /// Backend (default: inverted)
    pub index: IndexKind,

    /// Extra characters treated as part of a word (default: `"@-"`)
    pub non_word_char_whitelist: String,

    /// N-gram sizes indexed next to every word; empty or `0` disables
    pub ngram_sizes: Vec<usize>,

    /// A query runs only if at least one of its words is this long (in chars)
    pub query_min_word_length: usize,

    /// Strategy used by `search` when none is given (default: prefix)
    pub default_strategy: SearchStrategy,

    /// Fuzzy max distance used by `search` when none is given (default: 2)
    pub default_max_distance: usize,

    /// Used queries remembered by `last_query()`; 0 disables the history
    pub query_history_len: usize,

    /// Stopword predicate, consulted before and after word normalization
    #[serde(skip)]
    pub is_stopword: Option<StopwordFn>,

    /// Insert-time word normalizer
    #[serde(skip)]
    pub normalize_word: Option<NormalizeWordFn>,
}

impl Default for SearchableConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            accent_sensitive: false,
            index: IndexKind::default(),
            non_word_char_whitelist: DEFAULT_NON_WORD_CHAR_WHITELIST.to_string(),
            ngram_sizes: Vec::new(),
            query_min_word_length: 1,
            default_strategy: SearchStrategy::default(),
            default_max_distance: DEFAULT_MAX_DISTANCE,
            query_history_len: DEFAULT_QUERY_HISTORY_LEN,
            is_stopword: None,
            normalize_word: None,
        }
    }
}

impl fmt::Debug for SearchableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableConfig")
            .field("case_sensitive", &self.case_sensitive)
            .field("accent_sensitive", &self.accent_sensitive)
            .field("index", &self.index)
            .field("non_word_char_whitelist", &self.non_word_char_whitelist)
            .field("ngram_sizes", &self.ngram_sizes)
            .field("query_min_word_length", &self.query_min_word_length)
            .field("default_strategy", &self.default_strategy)
            .field("default_max_distance", &self.default_max_distance)
            .field("query_history_len", &self.query_history_len)
            .field("is_stopword", &self.is_stopword.is_some())
            .field("normalize_word", &self.normalize_word.is_some())
            .finish()
    }
}

impl SearchableConfig {
    /// Builder: set case sensitivity
    pub fn with_case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Builder: set accent sensitivity
    pub fn with_accent_sensitive(mut self, yes: bool) -> Self {
        self.accent_sensitive = yes;
        self
    }

    /// Builder: choose the backend
    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    /// Builder: set the in-word character whitelist
    pub fn with_non_word_char_whitelist(mut self, whitelist: impl Into<String>) -> Self {
        self.non_word_char_whitelist = whitelist.into();
        self
    }

    /// Builder: set the n-gram sizes
    pub fn with_ngram_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.ngram_sizes = sizes.into_iter().collect();
        self
    }

    /// Builder: set the minimum query word length
    pub fn with_query_min_word_length(mut self, len: usize) -> Self {
        self.query_min_word_length = len;
        self
    }

    /// Builder: set the default strategy
    pub fn with_default_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Builder: set the default fuzzy max distance
    pub fn with_default_max_distance(mut self, max_distance: usize) -> Self {
        self.default_max_distance = max_distance;
        self
    }

    /// Builder: set the query history length
    pub fn with_query_history_len(mut self, len: usize) -> Self {
        self.query_history_len = len;
        self
    }

    /// Builder: attach a stopword predicate
    pub fn with_stopwords<F>(mut self, is_stopword: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.is_stopword = Some(Arc::new(is_stopword));
        self
    }

    /// Builder: attach a word normalizer
    pub fn with_normalize_word<F>(mut self, normalize_word: F) -> Self
    where
        F: Fn(&str) -> NormalizedWord + Send + Sync + 'static,
    {
        self.normalize_word = Some(Arc::new(normalize_word));
        self
    }

    /// Case/accent settings for the text normalizer
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_case_sensitive(self.case_sensitive)
            .with_accent_sensitive(self.accent_sensitive)
    }

    /// N-gram sizes actually in effect (zeros skipped)
    pub fn active_ngram_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.ngram_sizes.iter().copied().filter(|&size| size > 0)
    }

    /// Check settings that cannot be expressed in the type
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if an n-gram size is 1.
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.active_ngram_sizes().find(|&size| size < 2) {
            return Err(Error::invalid_config(format!(
                "Invalid n-gram size {}. Sizes must be at least 2 (or 0 to disable).",
                size
            )));
        }
        Ok(())
    }

    /// Parse settings from TOML text; missing keys take defaults
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the text does not parse or does not
    /// pass [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchableConfig = toml::from_str(content).map_err(|e| {
            Error::invalid_config(format!("Failed to parse searchable config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the plain settings to TOML (hooks are not included)
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))
    }
}
