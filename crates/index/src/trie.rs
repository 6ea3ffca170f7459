//! Character trie index
//!
//! Each path from the root spells a word. End-of-word nodes carry the set of
//! docIds for that word. A docId -> words side map answers document-level
//! queries and counts without walking the tree.
//!
//! # Ownership
//!
//! Every node is owned by its parent's child map and the root by the index.
//! There are no parent pointers: removal recurses down the word's path and
//! prunes on the way back up.
//!
//! # Invariants
//!
//! - `is_end_of_word` iff `doc_ids` is non-empty
//! - every non-root node either ends a word or has children
//! - a (word, docId) pair is in the tree iff it is in `doc_id_to_words`

use searchable_core::{
    record_min_distance, validate_posting, DistanceMap, DocId, Dump, Index, Result, Word,
};
use searchable_text::{levenshtein, DistanceRow};
use std::collections::{BTreeMap, BTreeSet, HashMap};

// ============================================================================
// TrieNode
// ============================================================================

/// One character position in the trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Next character -> child
    children: BTreeMap<char, TrieNode>,
    /// A word ends here
    is_end_of_word: bool,
    /// DocIds for the word ending here (empty unless `is_end_of_word`)
    doc_ids: BTreeSet<DocId>,
}

impl TrieNode {
    /// True if a word ends at this node
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    fn is_prunable(&self) -> bool {
        self.children.is_empty() && !self.is_end_of_word
    }

    /// Visit every end-of-word node below (and including) this one
    ///
    /// `path` holds the word spelled so far. Children are visited in char
    /// order, so words come out sorted.
    fn walk_words<F>(&self, path: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &BTreeSet<DocId>),
    {
        if self.is_end_of_word {
            visit(path, &self.doc_ids);
        }
        for (&ch, child) in &self.children {
            path.push(ch);
            child.walk_words(path, visit);
            path.pop();
        }
    }
}

/// Outcome of removing one docId from one word's path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// Word or docId not present
    Missing,
    /// DocId removed, word still has other docIds
    Removed,
    /// DocId removed and it was the word's last one
    WordDropped,
}

impl Removal {
    fn removed(self) -> bool {
        self != Removal::Missing
    }
}

/// Remove `doc_id` from the word spelled by `rest` below `node`
///
/// Children left with no children and no word are pruned as the recursion
/// unwinds.
fn remove_path(node: &mut TrieNode, rest: &[char], doc_id: &str) -> Removal {
    let Some((first, tail)) = rest.split_first() else {
        if !node.is_end_of_word || !node.doc_ids.remove(doc_id) {
            return Removal::Missing;
        }
        if node.doc_ids.is_empty() {
            node.is_end_of_word = false;
            return Removal::WordDropped;
        }
        return Removal::Removed;
    };

    let Some(child) = node.children.get_mut(first) else {
        return Removal::Missing;
    };
    let outcome = remove_path(child, tail, doc_id);
    if child.is_prunable() {
        node.children.remove(first);
    }
    outcome
}

// ============================================================================
// TrieIndex
// ============================================================================

/// Trie-backed index
///
/// Exact and prefix lookups walk one edge per query character. Fuzzy lookups
/// carry one edit-distance row per trie level and skip subtrees whose best
/// possible distance already exceeds the limit; results match a full
/// vocabulary scan.
///
/// # Example
///
/// ```
/// use searchable_core::Index;
/// use searchable_index::TrieIndex;
///
/// let mut index = TrieIndex::new();
/// index.add_word("james", "007").unwrap();
/// index.add_word("jameson", "whiskey").unwrap();
///
/// assert_eq!(index.search_by_prefix("jam"), vec!["007", "whiskey"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieIndex {
    root: TrieNode,

    /// Helper index for fast lookup by docId
    doc_id_to_words: HashMap<DocId, BTreeSet<Word>>,

    /// Number of end-of-word nodes
    word_count: usize,
}

impl TrieIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in the trie, root included
    ///
    /// An empty index has exactly one node.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Root node, for inspection
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect_fuzzy(
        node: &TrieNode,
        row: &DistanceRow,
        query: &[char],
        max_distance: usize,
        out: &mut DistanceMap,
    ) {
        for (&ch, child) in &node.children {
            let next = row.step(query, ch);
            if child.is_end_of_word && next.distance() <= max_distance {
                for doc_id in &child.doc_ids {
                    record_min_distance(out, doc_id, next.distance());
                }
            }
            if next.min() <= max_distance {
                Self::collect_fuzzy(child, &next, query, max_distance, out);
            }
        }
    }
}

impl Index for TrieIndex {
    fn word_count(&self) -> usize {
        self.word_count
    }

    fn doc_id_count(&self) -> usize {
        self.doc_id_to_words.len()
    }

    fn all_words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root
            .walk_words(&mut String::new(), &mut |word, _| words.push(word.to_string()));
        words
    }

    fn all_doc_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.doc_id_to_words.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn add_word(&mut self, word: &str, doc_id: &str) -> Result<bool> {
        validate_posting(word, doc_id)?;

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.word_count += 1;
        }
        let is_new = node.doc_ids.insert(doc_id.to_string());

        self.doc_id_to_words
            .entry(doc_id.to_string())
            .or_default()
            .insert(word.to_string());

        Ok(is_new)
    }

    fn remove_word(&mut self, word: &str, doc_id: &str) -> Result<bool> {
        validate_posting(word, doc_id)?;

        let chars: Vec<char> = word.chars().collect();
        let outcome = remove_path(&mut self.root, &chars, doc_id);
        if outcome == Removal::WordDropped {
            self.word_count -= 1;
        }

        if outcome.removed() {
            if let Some(words) = self.doc_id_to_words.get_mut(doc_id) {
                words.remove(word);
                if words.is_empty() {
                    self.doc_id_to_words.remove(doc_id);
                }
            }
        }

        Ok(outcome.removed())
    }

    fn remove_doc_id(&mut self, doc_id: &str) -> usize {
        let Some(words) = self.doc_id_to_words.remove(doc_id) else {
            return 0;
        };

        let mut removed = 0;
        for word in &words {
            let chars: Vec<char> = word.chars().collect();
            match remove_path(&mut self.root, &chars, doc_id) {
                Removal::Missing => {}
                Removal::Removed => removed += 1,
                Removal::WordDropped => {
                    removed += 1;
                    self.word_count -= 1;
                }
            }
        }

        tracing::debug!(
            target: "searchable::index",
            doc_id = doc_id,
            removed = removed,
            nodes = self.node_count(),
            "Removed docId from trie index"
        );
        removed
    }

    fn search_exact(&self, word: &str) -> Vec<DocId> {
        match self.find(word) {
            Some(node) if node.is_end_of_word => node.doc_ids.iter().cloned().collect(),
            _ => vec![],
        }
    }

    fn search_by_prefix_with_distance(&self, prefix: &str) -> DistanceMap {
        let mut out = DistanceMap::new();
        let Some(start) = self.find(prefix) else {
            return out;
        };

        let mut path = prefix.to_string();
        start.walk_words(&mut path, &mut |word, doc_ids| {
            let distance = levenshtein(prefix, word);
            for doc_id in doc_ids {
                record_min_distance(&mut out, doc_id, distance);
            }
        });
        out
    }

    fn search_fuzzy_with_distance(&self, word: &str, max_distance: usize) -> DistanceMap {
        let query: Vec<char> = word.chars().collect();
        let row = DistanceRow::new(query.len());
        let mut out = DistanceMap::new();

        if self.root.is_end_of_word && row.distance() <= max_distance {
            for doc_id in &self.root.doc_ids {
                record_min_distance(&mut out, doc_id, row.distance());
            }
        }
        Self::collect_fuzzy(&self.root, &row, &query, max_distance, &mut out);
        out
    }

    fn search_by_doc_id(&self, doc_id: &str) -> Vec<Word> {
        self.doc_id_to_words
            .get(doc_id)
            .map(|words| words.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        self.root = TrieNode::default();
        self.doc_id_to_words.clear();
        self.word_count = 0;
    }

    fn dump(&self) -> Dump {
        let mut words: BTreeMap<Word, Vec<DocId>> = BTreeMap::new();
        self.root.walk_words(&mut String::new(), &mut |word, doc_ids| {
            words.insert(word.to_string(), doc_ids.iter().cloned().collect());
        });
        Dump::new(words)
    }
}
