//! Config loaded from TOML drives the whole instance

use searchable::{Error, IndexKind, SearchStrategy, Searchable, SearchableConfig};

const CONFIG: &str = r#"
index = "trie"
accent_sensitive = true
non_word_char_whitelist = "@"
ngram_sizes = [0]
query_min_word_length = 2
default_strategy = "fuzzy"
default_max_distance = 1
query_history_len = 2
"#;

#[test]
fn test_toml_config_end_to_end() {
    let config = SearchableConfig::from_toml_str(CONFIG).unwrap();
    assert_eq!(config.index, IndexKind::Trie);
    assert_eq!(config.default_strategy, SearchStrategy::Fuzzy);

    let mut s = Searchable::new(config).unwrap();
    s.add("Kůň well-known", "1").unwrap();

    // accent sensitive: "kun" is 2 edits away, default max distance is 1
    assert!(s.search("kun", None, None).is_empty());
    assert_eq!(s.search("kůn", None, None), vec!["1"]);
    // '-' is a boundary with this whitelist
    assert_eq!(s.search("known", None, None), vec!["1"]);
    // single-char queries never run
    assert!(s.search("k", None, None).is_empty());

    s.search("well", None, None);
    let history = s.last_query().history;
    assert_eq!(history, vec!["known", "well"]);
}

#[test]
fn test_toml_hooks_attach_after_loading() {
    let config = SearchableConfig::from_toml_str("case_sensitive = true")
        .unwrap()
        .with_stopwords(|w| w == "The");
    let mut s = Searchable::new(config).unwrap();
    s.add("The Matrix", "m").unwrap();
    assert_eq!(s.index().all_words(), vec!["Matrix"]);
}

#[test]
fn test_toml_errors() {
    for bad in [
        r#"index = "btree""#,
        r#"default_strategy = 3"#,
        "ngram_sizes = [1]",
        "case_sensitive = ",
    ] {
        assert!(
            matches!(SearchableConfig::from_toml_str(bad), Err(Error::InvalidConfig(_))),
            "{bad}"
        );
    }
}
