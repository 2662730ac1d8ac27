//! Language detection is a chain of intersections, so reordering the
//! detection rules never changes the detected set or the encodings.

use libbmpm::language::{LanguageClassifier, LanguageRule};
use libbmpm::prelude::*;
use libbmpm::rules::{ModeData, ModeRules};

const CORPUS: &[&str] = &[
    "niall",
    "neil",
    "renault",
    "czault",
    "schwarzenegger",
    "müller",
    "szach",
    "kowalski",
    "rodriguez",
    "иванов",
    "cohen",
    "o'brien",
    "mcdonald",
    "françois",
    "weber",
];

fn generic_source() -> ModeData {
    RuleSet::bundled().mode(Mode::Generic).source().clone()
}

fn classify_all(rules: &ModeRules) -> Vec<LanguageSet> {
    CORPUS.iter().map(|word| rules.classify(word)).collect()
}

#[test]
fn test_swapping_disjoint_accept_rules() {
    let original = ModeRules::compile(generic_source()).unwrap();

    let mut data = generic_source();
    // arabic and hebrew script rules never match the same word
    assert!(data.language_rules[0].0.contains('ء'));
    assert!(data.language_rules[3].0.contains('א'));
    data.language_rules.swap(0, 3);
    let swapped = ModeRules::compile(data).unwrap();

    assert_eq!(classify_all(&original), classify_all(&swapped));
}

#[test]
fn test_reversing_every_rule() {
    let original = ModeRules::compile(generic_source()).unwrap();

    let mut data = generic_source();
    data.language_rules.reverse();
    let reversed = ModeRules::compile(data).unwrap();

    assert_eq!(classify_all(&original), classify_all(&reversed));
}

#[test]
fn test_reordered_rules_encode_identically() {
    let bundled = RuleSet::bundled();
    let mut data = bundled.to_data();
    for mode in &mut data.modes {
        mode.language_rules.reverse();
    }
    let reordered = std::sync::Arc::new(RuleSet::from_data(data).unwrap());

    let original = BeiderMorse::new();
    let shuffled = BeiderMorse::builder().rules(reordered).build().unwrap();
    for name in CORPUS {
        assert_eq!(original.encode(name), shuffled.encode(name), "encoding {name}");
    }
}

#[test]
fn test_overlapping_rules_narrow_in_either_order() {
    let universe: LanguageSet = "french+german+polish+hungarian".parse().unwrap();
    let polish_or_hungarian: LanguageSet = "polish+hungarian".parse().unwrap();
    let french: LanguageSet = "french".parse().unwrap();

    let cz = LanguageRule::new("cz", polish_or_hungarian, true).unwrap();
    let ault = LanguageRule::new("ault$", french, true).unwrap();
    let not_polish = LanguageRule::new("sz", "polish".parse().unwrap(), false).unwrap();

    let forward = LanguageClassifier::new(vec![cz.clone(), ault.clone(), not_polish.clone()], universe);
    let backward = LanguageClassifier::new(vec![not_polish, ault, cz], universe);

    // disjoint acceptances empty the set, which reads as "any"
    assert_eq!(forward.classify("czault"), LanguageSet::ANY);
    assert_eq!(backward.classify("czault"), LanguageSet::ANY);

    // an acceptance followed by a rejection leaves the difference
    let expected: LanguageSet = "hungarian".parse().unwrap();
    assert_eq!(forward.classify("czasz"), expected);
    assert_eq!(backward.classify("czasz"), expected);

    // nothing fires: the whole universe
    assert_eq!(forward.classify("smith"), universe);
    assert_eq!(backward.classify("smith"), universe);
}

#[test]
fn test_empty_detection_encodes_like_explicit_any() {
    let encoder = BeiderMorse::new();
    assert_eq!(encoder.classify("Czault"), LanguageSet::ANY);
    assert_eq!(
        encoder.encode("Czault"),
        encoder.encode_with("Czault", "any", Mode::Generic)
    );
}
