//! Core types and traits for Searchable
//!
//! This crate defines the foundational types shared by every index backend
//! and by the query orchestrator:
//! - DocId / Word: posting identifiers
//! - DistanceMap: per-document minimum edit distance
//! - SearchStrategy: exact, prefix or fuzzy matching
//! - Dump / RestoreInput: backend-agnostic index snapshot
//! - Index: the contract every backend implements
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dump;
pub mod error;
pub mod search_types;
pub mod traits;
pub mod types;

pub use dump::{Dump, RestoreInput, DUMP_VERSION};
pub use error::{Error, Result};
pub use search_types::SearchStrategy;
pub use traits::{record_min_distance, sort_by_distance, validate_posting, Index};
pub use types::{DistanceMap, DocId, Word};
