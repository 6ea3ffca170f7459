//! Levenshtein edit distance
//!
//! Minimum number of single-character insertions, deletions and
//! substitutions turning one string into another. Characters are Unicode
//! scalar values, not bytes.

/// One row of the edit-distance table
///
/// Cell `j` holds the distance between the first `j` characters of the
/// source and the target characters consumed so far. Stepping a row by one
/// target character yields the next row, which lets a trie walk share rows
/// between words with a common prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRow {
    cells: Vec<usize>,
}

impl DistanceRow {
    /// Row for an empty target
    pub fn new(source_len: usize) -> Self {
        DistanceRow {
            cells: (0..=source_len).collect(),
        }
    }

    /// Row after appending `ch` to the target
    pub fn step(&self, source: &[char], ch: char) -> DistanceRow {
        let mut cells = Vec::with_capacity(self.cells.len());
        cells.push(self.cells[0] + 1);

        for (j, &source_ch) in source.iter().enumerate() {
            let cost = usize::from(source_ch != ch);
            let deletion = self.cells[j + 1] + 1;
            let insertion = cells[j] + 1;
            let substitution = self.cells[j] + cost;
            cells.push(deletion.min(insertion).min(substitution));
        }

        DistanceRow { cells }
    }

    /// Distance between the whole source and the target so far
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Lower bound for the distance of any extension of the target
    pub fn min(&self) -> usize {
        self.cells.iter().copied().min().unwrap_or(0)
    }
}

/// Levenshtein distance between `source` and `target`
///
/// # Example
///
/// ```
/// use searchable_text::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let mut row = DistanceRow::new(source.len());
    for ch in target.chars() {
        row = row.step(&source, ch);
    }
    row.distance()
}
