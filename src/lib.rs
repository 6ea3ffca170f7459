//! Searchable - embeddable in-memory full-text index
//!
//! Documents are short strings tagged with a caller-supplied id. Searchable
//! splits them into normalized words, indexes them in one of two backends
//! (a hash-map inverted index or a character trie) and answers exact, prefix
//! and fuzzy (edit-distance) word queries with AND semantics across query
//! words, closest matches first.
//!
//! # Quick Start
//!
//! ```
//! use searchable::{Searchable, SearchableConfig, SearchStrategy};
//!
//! let mut index = Searchable::new(SearchableConfig::default()).unwrap();
//! index.add("james bond", "007").unwrap();
//! index.add("jameson irish whiskey", "whiskey").unwrap();
//!
//! assert_eq!(index.search("jam", None, None), vec!["007", "whiskey"]);
//! assert_eq!(index.search("Bond. James Bond.", None, None), vec!["007"]);
//! assert_eq!(index.search("jmaes", Some(SearchStrategy::Fuzzy), Some(2)), vec!["007"]);
//! ```
//!
//! # Architecture
//!
//! - `searchable-core`: error type, `Index` trait, snapshot format
//! - `searchable-text`: edit distance, n-grams, normalization, tokenization
//! - `searchable-index`: `InvertedIndex` and `TrieIndex` backends
//! - `searchable-search`: the `Searchable` orchestrator and its config
//!
//! The library logs through `tracing` and never installs a subscriber.

pub use searchable_core::{
    record_min_distance, sort_by_distance, validate_posting, DistanceMap, DocId, Dump, Error,
    Index, RestoreInput, Result, SearchStrategy, Word, DUMP_VERSION,
};
pub use searchable_index::{new_index, IndexKind, InvertedIndex, TrieIndex, TrieNode};
pub use searchable_search::{
    BatchResult, DumpOutput, LastQuery, MergedSearch, NormalizeWordFn, NormalizedWord,
    Searchable, SearchableConfig, SharedSearchable, StopwordFn,
};
pub use searchable_text::{
    levenshtein, ngrams, normalize, tokenize, unaccent, NormalizeOptions, Tokenizer,
    DEFAULT_PAD_CHAR,
};
