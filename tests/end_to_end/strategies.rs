//! Search strategies over the movie catalogue

use crate::common::*;
use searchable::{Error, IndexKind, SearchStrategy, Searchable, SearchableConfig};

// ============================================================================
// Prefix (default)
// ============================================================================

#[test]
fn test_prefix_multi_word() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(
            s.search("bond", None, None),
            vec!["casino", "dr-no", "goldfinger"],
            "{kind}"
        );
        assert_eq!(s.search("james bond", None, None), vec!["dr-no", "goldfinger"], "{kind}");
        assert_eq!(s.search("gold heist", None, None), vec!["goldfinger"], "{kind}");
        assert!(s.search("bond shark", None, None).is_empty(), "{kind}");
    }
}

#[test]
fn test_prefix_ranking_prefers_closer_words() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(s.search("gold", None, None), vec!["goldfinger"], "{kind}");
        // "heat" is 2 edits from "he", "heist" is 3
        assert_eq!(s.search("he", None, None), vec!["heat", "goldfinger"], "{kind}");
    }
}

#[test]
fn test_accents_fold_both_ways() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(s.search("amélie", None, None), vec!["amelie"], "{kind}");
        assert_eq!(s.search("AMELIE", None, None), vec!["amelie"], "{kind}");
        assert_eq!(s.search("žluť kůň", None, None), vec!["kolja"], "{kind}");
    }
}

// ============================================================================
// Exact / fuzzy
// ============================================================================

#[test]
fn test_exact_needs_whole_words() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(
            s.search("heist", Some(SearchStrategy::Exact), None),
            vec!["goldfinger", "heat"],
            "{kind}"
        );
        assert!(s.search("heis", Some(SearchStrategy::Exact), None).is_empty(), "{kind}");
    }
}

#[test]
fn test_fuzzy_tolerates_typos() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(s.search_fuzzy("jmaes bnod", 2), vec!["dr-no", "goldfinger"], "{kind}");
        assert_eq!(s.search_fuzzy("pacnio", 2), vec!["heat"], "{kind}");
        assert!(s.search_fuzzy("pacnio", 1).is_empty(), "{kind}");
        // no vocabulary word is within 1 edit of "qqqq"
        assert!(s.search_fuzzy("qqqq", 1).is_empty(), "{kind}");
    }
}

#[test]
fn test_named_strategies() {
    let s = movies(IndexKind::Inverted);
    for (name, expected) in [
        ("exact", vec![]),
        ("prefix", vec!["jaws"]),
        ("fuzzy", vec!["jaws"]),
    ] {
        assert_eq!(s.search_named("shar", name, Some(1)).unwrap(), expected, "{name}");
    }
    assert!(matches!(
        s.search_named("shark", "bm25", None),
        Err(Error::UnknownStrategy(name)) if name == "bm25"
    ));
}

// ============================================================================
// Query guards and bookkeeping
// ============================================================================

#[test]
fn test_short_query_guard() {
    let mut s =
        Searchable::new(SearchableConfig::default().with_query_min_word_length(3)).unwrap();
    s.add_batch(MOVIES, true).unwrap();

    assert!(s.search("up", None, None).is_empty());
    assert!(s.search("a no", None, None).is_empty());
    // one long word lets the short ones run too
    assert_eq!(s.search("up carl", None, None), vec!["up"]);
}

#[test]
fn test_last_query_history() {
    let s = movies(IndexKind::Trie);
    for q in ["bond", "Bond!", "shark", "?!", "heist"] {
        s.search(q, None, None);
    }
    let last = s.last_query();
    assert_eq!(last.raw, "heist");
    assert_eq!(last.used, "heist");
    // "Bond!" repeats "bond", "?!" ran nothing
    assert_eq!(last.history, vec!["bond", "shark", "heist"]);
}

#[test]
fn test_merge_catalogues() {
    let films = movies(IndexKind::Inverted);
    let mut books = searchable(IndexKind::Trie);
    books.add("Casino Royale, the first Bond novel", "book-casino").unwrap();
    books.add("Jaws by Peter Benchley", "book-jaws").unwrap();

    let merged = Searchable::merge([&films, &books]);
    assert_eq!(
        merged.search("casino royale"),
        vec!["casino", "book-casino"]
    );
    assert_eq!(merged.search("jaws"), vec!["jaws", "book-jaws"]);
}
