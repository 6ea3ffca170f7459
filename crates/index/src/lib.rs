//! Index backends for Searchable
//!
//! Two interchangeable implementations of [`searchable_core::Index`]:
//! - `InvertedIndex`: hash maps in both directions, O(1) exact lookup,
//!   linear scans for prefix and fuzzy search
//! - `TrieIndex`: character trie with docId sets on end-of-word nodes plus a
//!   docId -> words side map
//!
//! Both return identical results for the same insertion sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod inverted;
pub mod kind;
pub mod trie;

pub use inverted::InvertedIndex;
pub use kind::{new_index, IndexKind};
pub use trie::{TrieIndex, TrieNode};
