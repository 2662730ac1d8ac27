//! Encoders share one immutable rule set across threads

use libbmpm::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

const NAMES: &[&str] = &[
    "Niall",
    "Neil",
    "Schwarzenegger",
    "Renault",
    "Müller",
    "van Helsing",
    "d'Angelo",
    "Jean Paul",
    "Rodriguez",
    "Иванов",
];

#[test]
fn test_parallel_encoding_matches_sequential() {
    let encoder = Arc::new(BeiderMorse::new());
    let expected: Vec<String> = NAMES.iter().map(|name| encoder.encode(name)).collect();
    let expected = Arc::new(expected);

    const NUM_THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let encoder = Arc::clone(&encoder);
            let expected = Arc::clone(&expected);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                // All threads start encoding at the same time
                barrier.wait();
                for round in 0..50 {
                    let index = (i + round) % NAMES.len();
                    assert_eq!(encoder.encode(NAMES[index]), expected[index]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_encoders_in_different_modes_share_rules() {
    let rules = RuleSet::bundled();
    let handles: Vec<_> = Mode::ALL
        .into_iter()
        .map(|mode| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let encoder = BeiderMorse::builder().rules(rules).mode(mode).build().unwrap();
                (mode, encoder.encode("Kowalski"))
            })
        })
        .collect();

    for handle in handles {
        let (mode, encoded) = handle.join().unwrap();
        assert_eq!(encoded, libbmpm::encode("Kowalski", "", mode));
    }
}

#[test]
fn test_bundled_rules_are_loaded_once() {
    let handles: Vec<_> = (0..4).map(|_| thread::spawn(RuleSet::bundled)).collect();
    let loaded: Vec<Arc<RuleSet>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for rules in &loaded[1..] {
        assert!(Arc::ptr_eq(&loaded[0], rules));
    }
}

#[cfg(feature = "rayon")]
#[test]
fn test_encode_batch_preserves_order() {
    let encoder = BeiderMorse::new();
    let names: Vec<String> = NAMES.iter().cycle().take(200).map(|s| s.to_string()).collect();

    let batch = encoder.encode_batch(&names);

    assert_eq!(batch.len(), names.len());
    for (name, encoded) in names.iter().zip(&batch) {
        assert_eq!(encoded, &encoder.encode(name));
    }
}
