//! Shared fixtures for the end-to-end suite

#![allow(dead_code)]

use searchable::{IndexKind, Searchable, SearchableConfig};
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Route library logs to the test writer (shown with `--nocapture`)
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Both backends, inverted first
pub const BACKENDS: [IndexKind; 2] = [IndexKind::Inverted, IndexKind::Trie];

/// Small movie catalogue keyed by id
pub const MOVIES: [(&str, &str); 8] = [
    ("dr-no", "Dr. No (1962): James Bond vs. Julius No"),
    ("goldfinger", "Goldfinger (1964): James Bond and the gold heist"),
    ("casino", "Casino Royale (2006): Bond's first mission, poker"),
    ("jaws", "Jaws (1975): a great white shark terrorizes Amity"),
    ("amelie", "Le Fabuleux Destin d'Amélie Poulain (2001)"),
    ("kolja", "Kolja (1996): Příliš žluťoučký kůň"),
    ("heat", "Heat (1995): De Niro and Pacino, bank heist"),
    ("up", "Up (2009): a house, balloons and Carl"),
];

/// A fresh instance on `kind` with otherwise default settings
pub fn searchable(kind: IndexKind) -> Searchable {
    init_tracing();
    Searchable::new(SearchableConfig::default().with_index(kind)).unwrap()
}

/// The movie catalogue indexed on `kind`
pub fn movies(kind: IndexKind) -> Searchable {
    let mut s = searchable(kind);
    let result = s.add_batch(MOVIES, true).unwrap();
    assert!(result.is_ok());
    s
}
