//! Shared access from several threads

use crate::common::*;
use searchable::{SearchableConfig, SharedSearchable};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_readers_see_consistent_results_during_writes() {
    init_tracing();
    let shared = SharedSearchable::new(SearchableConfig::default()).unwrap();
    shared.add_batch(MOVIES, true).unwrap();

    let barrier = Arc::new(Barrier::new(5));
    let writer = {
        let shared = shared.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..100 {
                shared.add(&format!("sequel number {}", i), &format!("sequel-{}", i)).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    assert_eq!(
                        shared.search("james bond", None, None),
                        vec!["dr-no", "goldfinger"]
                    );
                    let sequels = shared.search("sequel", None, None).len();
                    assert!(sequels <= 100);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(shared.search("sequel", None, None).len(), 100);
    assert_eq!(shared.read().doc_id_count(), MOVIES.len() + 100);
}

#[test]
fn test_restore_while_reading() {
    let shared = SharedSearchable::new(SearchableConfig::default()).unwrap();
    shared.add("old content", "old").unwrap();

    let mut replacement = searchable(searchable::IndexKind::Inverted);
    replacement.add("new content", "new").unwrap();
    let json = replacement.dump_json().unwrap();

    let reader = {
        let shared = shared.clone();
        thread::spawn(move || {
            for _ in 0..200 {
                let found = shared.search("content", None, None);
                // either the old or the new snapshot, never a mix or nothing
                assert!(found == vec!["old"] || found == vec!["new"], "{found:?}");
            }
        })
    };
    assert!(shared.restore(json).unwrap());
    reader.join().unwrap();

    assert_eq!(shared.search("content", None, None), vec!["new"]);
}
