//! Posting identifiers
//!
//! Words and document ids are plain strings. The engine never inspects a
//! DocId; it is stored, compared and returned.

use std::collections::BTreeMap;

/// Opaque, caller-supplied, non-empty document identifier
pub type DocId = String;

/// Normalized token used as an index key
pub type Word = String;

/// DocId -> minimum edit distance of any matching word reaching it
///
/// Ordered so that iteration (and therefore tie order after sorting by
/// distance) is identical for every backend.
pub type DistanceMap = BTreeMap<DocId, usize>;
