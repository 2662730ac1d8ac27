//! Property-based tests for the encoder using proptest
//!
//! These cover the invariants that hold for any input: determinism,
//! termination, the alternative cap, the generic particle fork and
//! whole-name language detection.

use libbmpm::prelude::*;
use proptest::prelude::*;

// Strategy for generating lowercase Latin words
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,10}"
}

// Strategy for generating names of one to three words
fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Zäöüéñç]{1,8}", 1..=3).prop_map(|words| words.join(" "))
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn generic_particles() -> Vec<String> {
    RuleSet::bundled().mode(Mode::Generic).discards().to_vec()
}

// Every particle of the bundled generic rules, "d'" and "de la " included
fn particle_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(generic_particles())
}

fn starts_with_particle(term: &str) -> bool {
    generic_particles()
        .iter()
        .any(|particle| term.len() > particle.len() && term.starts_with(particle.as_str()))
}

fn longest_particle(name: &str) -> String {
    generic_particles()
        .into_iter()
        .filter(|particle| name.starts_with(particle.as_str()))
        .max_by_key(|particle| particle.chars().count())
        .unwrap_or_default()
}

// Words that are never a particle on their own, so they cannot start a fork
fn plain_word_strategy() -> impl Strategy<Value = String> {
    word_strategy().prop_filter("particle word", |word| {
        !generic_particles()
            .iter()
            .chain(RuleSet::bundled().mode(Mode::Ashkenazic).discards())
            .chain(RuleSet::bundled().mode(Mode::Sephardic).discards())
            .any(|particle| particle.trim_end_matches([' ', '\'']) == word)
    })
}

// A fork half is one top-level group: a single alternation or a bracketed encoding
fn bracketed(encoded: String) -> String {
    let inner = encoded.strip_prefix('(').and_then(|rest| rest.strip_suffix(')'));
    match inner {
        Some(inner) if !inner.contains(['(', ')', '-']) => encoded,
        _ => format!("({encoded})"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Encoding is a pure function of its input
    #[test]
    fn prop_encode_is_deterministic(name in name_strategy(), mode in mode_strategy()) {
        let encoder = BeiderMorse::builder().mode(mode).build().unwrap();
        let first = encoder.encode(&name);
        prop_assert_eq!(&first, &encoder.encode(&name));
        prop_assert_eq!(&first, &encoder.clone().encode(&name));
        prop_assert_eq!(first, libbmpm::encode(&name, "", mode));
    }

    /// Arbitrary text terminates and never panics
    #[test]
    fn prop_arbitrary_input_terminates(name in "\\PC{0,24}", mode in mode_strategy()) {
        let encoder = BeiderMorse::builder().mode(mode).build().unwrap();
        let encoded = encoder.encode(&name);
        let groups = libbmpm::phonetic::tokens(&encoded);
        prop_assert!(groups.iter().all(|group| !group.is_empty()));
    }

    /// A word detected as "no language" encodes like explicit "any"
    #[test]
    fn prop_empty_detection_matches_explicit_any(word in word_strategy(), mode in mode_strategy()) {
        let encoder = BeiderMorse::builder().mode(mode).build().unwrap();
        if encoder.classify(&word) == LanguageSet::ANY {
            prop_assert_eq!(encoder.encode(&word), encoder.encode_with(&word, "any", mode));
        }
    }

    /// An empty language list means detection
    #[test]
    fn prop_empty_language_list_is_auto(name in name_strategy()) {
        let encoder = BeiderMorse::new();
        prop_assert_eq!(encoder.encode(&name), encoder.encode_with(&name, "", Mode::Generic));
    }

    /// Every generic particle forks the name into exactly two bracketed
    /// groups, each encoded with the languages of the whole name
    #[test]
    fn prop_generic_particle_forks_once(
        particle in particle_strategy(),
        words in prop::collection::vec(plain_word_strategy(), 1..=3),
        concat in any::<bool>(),
    ) {
        let encoder = BeiderMorse::builder().concat(concat).build().unwrap();
        let name = format!("{particle}{}", words.join(" "));
        let encoded = encoder.encode(&name);

        let halves = libbmpm::phonetic::groups(&encoded);
        prop_assert_eq!(halves.len(), 2, "{} -> {}", name, encoded);

        // a shorter particle may be shadowed by a longer one, as in "de la "
        let used = longest_particle(&name);
        let remainder = name[used.len()..].trim();
        let glued = format!("{}{}", &used[..used.len() - 1], &name[used.len()..]);
        let languages = encoder.classify(&name);

        prop_assert_eq!(
            halves[0],
            bracketed(encoder.encode_with(remainder, languages, Mode::Generic))
        );
        if !starts_with_particle(&glued) {
            prop_assert_eq!(
                halves[1],
                bracketed(encoder.encode_with(glued.trim(), languages, Mode::Generic))
            );
        }
    }

    /// Every word of a name is encoded with the languages of the whole name
    #[test]
    fn prop_words_share_whole_name_languages(
        words in prop::collection::vec(plain_word_strategy(), 2..=3),
        mode in mode_strategy(),
    ) {
        let encoder = BeiderMorse::builder().mode(mode).concat(false).build().unwrap();
        let name = words.join(" ");

        let languages = encoder.classify(&name);
        let expected: Vec<String> = words
            .iter()
            .map(|word| encoder.encode_with(word, languages, mode))
            .collect();
        prop_assert_eq!(encoder.encode(&name), expected.join("-"));
    }

    /// No word group holds more alternatives than the configured cap
    #[test]
    fn prop_alternatives_respect_cap(word in "[a-zäöüéñç]{1,12}", cap in 1usize..6) {
        let encoder = BeiderMorse::builder().max_phonemes(cap).build().unwrap();
        for group in encoder.encode_tokens(&word) {
            prop_assert!(group.len() <= cap, "{} alternatives over cap {}", group.len(), cap);
        }
    }
}
