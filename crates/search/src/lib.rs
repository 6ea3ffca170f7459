//! Query orchestration for Searchable
//!
//! This crate provides:
//! - SearchableConfig for per-instance settings (builder + TOML)
//! - Searchable, the insert/query pipeline over one index backend
//! - BatchResult for bulk inserts
//! - MergedSearch for searching several instances at once
//! - LastQuery bookkeeping
//! - SharedSearchable for concurrent readers with a single writer
//!
//! # Usage
//!
//! ```
//! use searchable_search::{Searchable, SearchableConfig};
//!
//! let mut index = Searchable::new(SearchableConfig::default()).unwrap();
//! index.add("james bond", "007").unwrap();
//! assert_eq!(index.search("bond", None, None), vec!["007"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod last_query;
pub mod merge;
pub mod searchable;
pub mod shared;

// Re-export commonly used types
pub use batch::BatchResult;
pub use config::{
    NormalizeWordFn, NormalizedWord, SearchableConfig, StopwordFn, DEFAULT_MAX_DISTANCE,
    DEFAULT_NON_WORD_CHAR_WHITELIST, DEFAULT_QUERY_HISTORY_LEN,
};
pub use last_query::LastQuery;
pub use merge::MergedSearch;
pub use searchable::{DumpOutput, Searchable};
pub use shared::SharedSearchable;
