//! Phonemes and phonetic strings.
//!
//! A [`PhoneticString`] is the value threaded through every rewrite pass: an
//! ordered list of alternative spellings in the phonetic alphabet, each
//! tagged with the languages for which it is a legal reading.
//!
//! # Invariants
//!
//! - No two phonemes share the same text. Appending a duplicate merges its
//!   languages into the existing entry, which keeps its position.
//! - No phoneme has an empty language set.
//! - The number of phonemes never exceeds the cap given to the operation
//!   that produced the string.

use smallvec::SmallVec;
use std::fmt;

use crate::language::LanguageSet;
use crate::rules::ReplacementExpr;

/// One alternative reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phoneme {
    /// Text in the phonetic alphabet
    pub text: String,
    /// Languages for which the reading is legal
    pub languages: LanguageSet,
}

impl Phoneme {
    /// Create a phoneme.
    pub fn new(text: impl Into<String>, languages: LanguageSet) -> Self {
        Phoneme {
            text: text.into(),
            languages,
        }
    }
}

/// Ordered, de-duplicated phoneme alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneticString {
    phonemes: SmallVec<[Phoneme; 4]>,
}

impl PhoneticString {
    /// The string every pass starts from: one empty phoneme tagged with
    /// the inferred languages.
    pub fn start(languages: LanguageSet) -> Self {
        let mut phonemes = SmallVec::new();
        phonemes.push(Phoneme::new(String::new(), languages));
        PhoneticString { phonemes }
    }

    /// A string with no alternatives.
    pub fn empty() -> Self {
        PhoneticString::default()
    }

    /// The alternatives, in generation order.
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// True when no alternative is left.
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Add an alternative, merging it into an existing one with the same
    /// text.
    ///
    /// Returns `false` when the text is new but the string already holds
    /// `max_phonemes` alternatives; the alternative is then discarded.
    pub fn insert(&mut self, text: String, languages: LanguageSet, max_phonemes: usize) -> bool {
        if let Some(existing) = self.phonemes.iter_mut().find(|p| p.text == text) {
            existing.languages = existing.languages.merge(languages);
            return true;
        }
        if self.phonemes.len() >= max_phonemes {
            return false;
        }
        self.phonemes.push(Phoneme { text, languages });
        true
    }

    /// Extend every alternative with every variant of `replacement`.
    ///
    /// Each product's languages are the alternative's languages restricted
    /// to the variant's; products with no language left are dropped.
    /// Generation stops once `max_phonemes` distinct products exist.
    pub fn apply(&self, replacement: &ReplacementExpr, max_phonemes: usize) -> PhoneticString {
        let mut result = PhoneticString::empty();
        for phoneme in &self.phonemes {
            for (text, restriction) in replacement.variants() {
                let languages = phoneme.languages.restrict_to(restriction);
                if languages.is_empty() {
                    continue;
                }
                let mut joined = String::with_capacity(phoneme.text.len() + text.len());
                joined.push_str(&phoneme.text);
                joined.push_str(text);
                if !result.insert(joined, languages, max_phonemes) {
                    return result;
                }
            }
        }
        result
    }

    /// Append `text` to every alternative.
    pub fn append(&mut self, text: &str) {
        for phoneme in &mut self.phonemes {
            phoneme.text.push_str(text);
        }
    }
}

impl<'a> IntoIterator for &'a PhoneticString {
    type Item = &'a Phoneme;
    type IntoIter = std::slice::Iter<'a, Phoneme>;

    fn into_iter(self) -> Self::IntoIter {
        self.phonemes.iter()
    }
}

impl FromIterator<Phoneme> for PhoneticString {
    /// Collects without a cap, merging duplicate texts.
    fn from_iter<I: IntoIterator<Item = Phoneme>>(iter: I) -> Self {
        let mut result = PhoneticString::empty();
        for phoneme in iter {
            result.insert(phoneme.text, phoneme.languages, usize::MAX);
        }
        result
    }
}

/// Renders `""` for no alternative or a single empty one, `text` for one,
/// and `(a|b|c)` for several. An empty alternative among several stays
/// visible as an empty slot: `(|nil)`.
impl fmt::Display for PhoneticString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phonemes.as_slice() {
            [] => Ok(()),
            [only] => f.write_str(&only.text),
            several => {
                f.write_str("(")?;
                for (i, phoneme) in several.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    f.write_str(&phoneme.text)?;
                }
                f.write_str(")")
            }
        }
    }
}
