//! Character n-grams
//!
//! Overlapping fixed-size windows over a normalized string. Padding both
//! ends with `size - 1` copies of a pad character captures word-boundary
//! context.

/// Pad character used by callers that want boundary windows
pub const DEFAULT_PAD_CHAR: char = ' ';

/// Slice `text` into windows of `size` characters
///
/// With `pad = Some(c)` the text is first padded with `size - 1` copies of
/// `c` on both ends. Returns nothing when `text` is empty, when `size` is 0,
/// or when the (padded) text is shorter than `size`.
///
/// # Example
///
/// ```
/// use searchable_text::{ngrams, DEFAULT_PAD_CHAR};
///
/// assert_eq!(ngrams("foo", 3, None), vec!["foo"]);
/// assert_eq!(
///     ngrams("foo", 3, Some(DEFAULT_PAD_CHAR)),
///     vec!["  f", " fo", "foo", "oo ", "o  "]
/// );
/// ```
pub fn ngrams(text: &str, size: usize, pad: Option<char>) -> Vec<String> {
    if text.is_empty() || size == 0 {
        return vec![];
    }

    let mut chars: Vec<char> = Vec::with_capacity(text.len() + 2 * size);
    if let Some(pad) = pad {
        chars.extend(std::iter::repeat(pad).take(size - 1));
        chars.extend(text.chars());
        chars.extend(std::iter::repeat(pad).take(size - 1));
    } else {
        chars.extend(text.chars());
    }

    if chars.len() < size {
        return vec![];
    }

    chars
        .windows(size)
        .map(|window| window.iter().collect())
        .collect()
}
