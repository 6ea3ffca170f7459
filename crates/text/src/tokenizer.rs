//! Word tokenizer
//!
//! A token is a maximal run of Unicode letters (`\p{L}`), numbers (`\p{N}`),
//! connector punctuation (`\p{Pc}`, e.g. underscore) or any character from a
//! caller-supplied whitelist. Everything else is a boundary and is dropped.

use regex::Regex;
use searchable_core::{Error, Result};

/// Compiled tokenizer for one whitelist
///
/// Build once and reuse; the orchestrator keeps one per instance.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    boundary: Regex,
    whitelist: String,
}

impl Tokenizer {
    /// Create a tokenizer treating every char of `whitelist` as in-word
    ///
    /// Whitelist characters are literals; `-` is never a range operator.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the boundary pattern cannot be compiled.
    pub fn new(whitelist: &str) -> Result<Self> {
        let escaped: String = whitelist
            .chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
            .collect();
        let pattern = format!(r"[^\p{{L}}\p{{N}}\p{{Pc}}{}]+", escaped);
        let boundary = Regex::new(&pattern).map_err(|e| {
            Error::invalid_config(format!(
                "cannot build tokenizer for whitelist {:?}: {}",
                whitelist, e
            ))
        })?;

        Ok(Tokenizer {
            boundary,
            whitelist: whitelist.to_string(),
        })
    }

    /// Characters treated as part of a word
    pub fn whitelist(&self) -> &str {
        &self.whitelist
    }

    /// Split `input` into tokens, left to right, duplicates kept
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        self.boundary
            .split(input)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }
}

/// One-shot tokenization with a whitelist
///
/// # Example
///
/// ```
/// use searchable_text::tokenize;
///
/// let tokens = tokenize("well-known foo bar!", "").unwrap();
/// assert_eq!(tokens, vec!["well", "known", "foo", "bar"]);
///
/// let tokens = tokenize("well-known foo", "-").unwrap();
/// assert_eq!(tokens, vec!["well-known", "foo"]);
/// ```
pub fn tokenize(input: &str, whitelist: &str) -> Result<Vec<String>> {
    Ok(Tokenizer::new(whitelist)?.tokenize(input))
}
