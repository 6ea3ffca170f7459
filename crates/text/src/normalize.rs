//! Text normalization
//!
//! Applied to raw input before it becomes a Word:
//! 1. Lowercase (unless case sensitive)
//! 2. NFD-decompose and strip combining diacritics U+0300..=U+036F (unless
//!    accent sensitive)
//! 3. Trim surrounding whitespace

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Case and accent sensitivity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keep letter case (default: false)
    pub case_sensitive: bool,
    /// Keep diacritics (default: false)
    pub accent_sensitive: bool,
}

impl NormalizeOptions {
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
}

/// Remove diacritical marks
///
/// # Example
///
/// ```
/// use searchable_text::unaccent;
///
/// assert_eq!(unaccent("crème brûlée"), "creme brulee");
/// ```
pub fn unaccent(input: &str) -> String {
    input.nfd().filter(|c| !COMBINING_MARKS.contains(c)).collect()
}

/// Normalize `input` according to `options`
///
/// Idempotent: normalizing twice gives the same result as once.
///
/// # Example
///
/// ```
/// use searchable_text::{normalize, NormalizeOptions};
///
/// assert_eq!(normalize("  Kôň ", NormalizeOptions::default()), "kon");
/// let accents = NormalizeOptions::default().with_accent_sensitive(true);
/// assert_eq!(normalize("Kôň", accents), "kôň");
/// ```
pub fn normalize(input: &str, options: NormalizeOptions) -> String {
    let mut out = if options.case_sensitive {
        input.to_string()
    } else {
        input.to_lowercase()
    };

    if !options.accent_sensitive {
        out = unaccent(&out);
    }

    // stripping a leading mark can expose whitespace, so trim last
    out.trim().to_string()
}
