//! Document pipeline: what ends up in the index

use crate::common::*;
use searchable::{
    ngrams, normalize, tokenize, IndexKind, NormalizeOptions, NormalizedWord, Searchable,
    SearchableConfig,
};

// ============================================================================
// Building blocks
// ============================================================================

#[test]
fn test_tokenize_examples() {
    assert_eq!(
        tokenize("well-known foo bar!", "").unwrap(),
        vec!["well", "known", "foo", "bar"]
    );
    assert_eq!(tokenize("well-known foo", "-").unwrap(), vec!["well-known", "foo"]);
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("Kôň", NormalizeOptions::default()), "kon");
    assert_eq!(
        normalize("Kôň", NormalizeOptions::default().with_accent_sensitive(true)),
        "kôň"
    );
}

#[test]
fn test_ngram_examples() {
    assert_eq!(
        ngrams("foo", 3, Some(' ')),
        vec!["  f", " fo", "foo", "oo ", "o  "]
    );
    assert_eq!(ngrams("foo", 3, None), vec!["foo"]);
}

// ============================================================================
// Insert pipeline
// ============================================================================

#[test]
fn test_catalogue_words() {
    for kind in BACKENDS {
        let s = movies(kind);
        assert_eq!(s.doc_id_count(), MOVIES.len(), "{kind}");
        assert_eq!(
            s.index().search_by_doc_id("casino"),
            vec!["2006", "bond", "casino", "first", "mission", "poker", "royale", "s"],
            "{kind}"
        );
        assert_eq!(
            s.index().search_by_doc_id("kolja"),
            vec!["1996", "kolja", "kun", "prilis", "zlutoucky"],
            "{kind}"
        );
    }
}

#[test]
fn test_whitelist_keeps_emails_and_hyphens() {
    for kind in BACKENDS {
        let mut s = searchable(kind);
        s.add("Contact: Jane.Doe@Example.com, co-founder", "jane").unwrap();
        assert_eq!(
            s.index().search_by_doc_id("jane"),
            vec!["co-founder", "com", "contact", "doe@example", "jane"],
            "{kind}"
        );
        assert_eq!(s.search_exact("co-founder"), vec!["jane"], "{kind}");
    }
}

#[test]
fn test_custom_whitelist() {
    let mut s = Searchable::new(
        SearchableConfig::default().with_non_word_char_whitelist("@.+"),
    )
    .unwrap();
    s.add("mail jane.doe@example.com about c++", "1").unwrap();
    assert_eq!(s.search_exact("jane.doe@example.com"), vec!["1"]);
    assert_eq!(s.search_exact("c++"), vec!["1"]);
    // '-' is no longer an in-word char
    s.add("well-known", "2").unwrap();
    assert_eq!(s.search_exact("known"), vec!["2"]);
}

#[test]
fn test_stemming_hook() {
    let config = SearchableConfig::default()
        .with_stopwords(|w| matches!(w, "a" | "and" | "the"))
        .with_normalize_word(|w| match w.strip_suffix('s') {
            Some(stem) if stem.len() > 2 => NormalizedWord::from(stem),
            _ => NormalizedWord::from(w),
        });
    for kind in BACKENDS {
        let mut s = Searchable::new(config.clone().with_index(kind)).unwrap();
        s.add("Up: a house, balloons and Carl", "up").unwrap();
        assert_eq!(
            s.index().search_by_doc_id("up"),
            vec!["balloon", "carl", "house", "up"],
            "{kind}"
        );
        assert_eq!(s.search_exact("balloon"), vec!["up"], "{kind}");
        // queries are not stemmed
        assert!(s.search_exact("balloons").is_empty(), "{kind}");
    }
}

#[test]
fn test_ngram_index_grows_vocabulary() {
    let mut plain = searchable(IndexKind::Inverted);
    plain.add("shark", "jaws").unwrap();

    let mut grams = Searchable::new(SearchableConfig::default().with_ngram_sizes([3])).unwrap();
    grams.add("shark", "jaws").unwrap();

    assert_eq!(plain.word_count(), 1);
    // shark, sha, har, ark
    assert_eq!(grams.word_count(), 4);
    assert_eq!(grams.search_exact("ark"), vec!["jaws"]);
    assert!(plain.search_exact("ark").is_empty());
}
