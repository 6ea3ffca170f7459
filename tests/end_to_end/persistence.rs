//! Snapshots across instances and backends

use crate::common::*;
use searchable::{DumpOutput, Error, RestoreInput, Searchable, SearchableConfig};

#[test]
fn test_snapshot_round_trip_every_backend_pair() {
    for from in BACKENDS {
        let source = movies(from);
        let json = source.dump_json().unwrap();
        for to in BACKENDS {
            let mut target = searchable(to);
            assert!(target.restore(json.as_str()).unwrap(), "{from} -> {to}");
            assert_eq!(target.dump_json().unwrap(), json, "{from} -> {to}");
            for (doc_id, _) in MOVIES {
                assert_eq!(
                    target.index().search_by_doc_id(doc_id),
                    source.index().search_by_doc_id(doc_id),
                    "{from} -> {to}"
                );
            }
            assert_eq!(
                target.search("james bond", None, None),
                source.search("james bond", None, None)
            );
        }
    }
}

#[test]
fn test_snapshot_is_plain_json() {
    let s = movies(searchable::IndexKind::Inverted);
    let DumpOutput::Json(json) = s.dump(true).unwrap() else {
        panic!("expected JSON");
    };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["words"]["bond"], serde_json::json!(["casino", "dr-no", "goldfinger"]));
    assert_eq!(value["words"]["kun"], serde_json::json!(["kolja"]));
}

#[test]
fn test_restore_replaces_not_merges() {
    for kind in BACKENDS {
        let mut s = movies(kind);
        let mut other = searchable(kind);
        other.add("completely different", "x").unwrap();

        let DumpOutput::Structured(dump) = other.dump(false).unwrap() else {
            panic!("expected structure");
        };
        assert!(s.restore(RestoreInput::Dump(dump)).unwrap(), "{kind}");
        assert_eq!(s.doc_id_count(), 1, "{kind}");
        assert!(s.search("bond", None, None).is_empty(), "{kind}");
    }
}

#[test]
fn test_restore_failures_leave_index_alone() {
    for kind in BACKENDS {
        let mut s = movies(kind);
        let before = s.dump_json().unwrap();

        assert!(!s.restore(r#"{"version":"2.0"}"#).unwrap(), "{kind}");
        assert!(matches!(s.restore("not json"), Err(Error::Serialization(_))), "{kind}");
        assert!(matches!(
            s.restore(r#"{"words":{"":["1"]}}"#),
            Err(Error::InvalidArgument(_))
        ));

        assert_eq!(s.dump_json().unwrap(), before, "{kind}");
    }
}

#[test]
fn test_ngram_snapshot_keeps_ngram_keys() {
    let mut source =
        Searchable::new(SearchableConfig::default().with_ngram_sizes([3])).unwrap();
    source.add("shark", "jaws").unwrap();

    // a plain instance serves n-gram keys it did not build itself
    let mut target = searchable(searchable::IndexKind::Trie);
    target.restore(source.dump_json().unwrap()).unwrap();
    assert_eq!(target.search_exact("ark"), vec!["jaws"]);
}
