//! Text utilities for Searchable
//!
//! Pure functions that turn raw input into index keys and measure how far
//! apart two keys are:
//! - `normalize` / `unaccent`: case folding and diacritic stripping
//! - `tokenize` / `Tokenizer`: Unicode word splitting with an in-word whitelist
//! - `ngrams`: fixed-size character windows
//! - `levenshtein`: edit distance

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod levenshtein;
pub mod ngram;
pub mod normalize;
pub mod tokenizer;

pub use levenshtein::{levenshtein, DistanceRow};
pub use ngram::{ngrams, DEFAULT_PAD_CHAR};
pub use normalize::{normalize, unaccent, NormalizeOptions};
pub use tokenizer::{tokenize, Tokenizer};
