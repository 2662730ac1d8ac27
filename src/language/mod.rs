//! Languages known to the Beider-Morse rule data.
//!
//! Every language owns one bit of a [`LanguageSet`]. The bit values are part
//! of the rule-data format: numeric language masks in replacement expressions
//! (`"(in[131072]|ina)"`) use them directly, so the order of [`Language`]
//! variants must never change.
//!
//! The first bit is reserved for [`Language::Any`], the universal language.
//! A set holding only that bit ([`LanguageSet::ANY`]) means "no language
//! restriction" and is what classification falls back to when every
//! candidate language has been rejected.

mod classifier;
mod set;

pub use classifier::{LanguageClassifier, LanguageRule};
pub use set::{LanguageSet, Languages};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rules::RuleError;

/// A language (or script) distinguished by the rule data.
///
/// `Cyrillic`, `Greek`, `Hebrew` and `Arabic` name scripts; `Russian` and
/// `GreekLatin` name the Latin transliterations of those languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The universal language: no restriction.
    Any,
    /// Arabic script.
    Arabic,
    /// Cyrillic script.
    Cyrillic,
    /// Czech.
    Czech,
    /// Dutch.
    Dutch,
    /// English.
    English,
    /// French.
    French,
    /// German.
    German,
    /// Greek script.
    Greek,
    /// Greek transliterated into Latin script.
    GreekLatin,
    /// Hebrew script.
    Hebrew,
    /// Hungarian.
    Hungarian,
    /// Italian.
    Italian,
    /// Latvian.
    Latvian,
    /// Polish.
    Polish,
    /// Portuguese.
    Portuguese,
    /// Romanian.
    Romanian,
    /// Russian transliterated into Latin script.
    Russian,
    /// Spanish.
    Spanish,
    /// Turkish.
    Turkish,
}

impl Language {
    /// Every language, in bit order.
    pub const ALL: [Language; 20] = [
        Language::Any,
        Language::Arabic,
        Language::Cyrillic,
        Language::Czech,
        Language::Dutch,
        Language::English,
        Language::French,
        Language::German,
        Language::Greek,
        Language::GreekLatin,
        Language::Hebrew,
        Language::Hungarian,
        Language::Italian,
        Language::Latvian,
        Language::Polish,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Turkish,
    ];

    /// The bit this language occupies in a [`LanguageSet`].
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    /// The lowercase name used in rule data and language arguments.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Any => "any",
            Language::Arabic => "arabic",
            Language::Cyrillic => "cyrillic",
            Language::Czech => "czech",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Greek => "greek",
            Language::GreekLatin => "greeklatin",
            Language::Hebrew => "hebrew",
            Language::Hungarian => "hungarian",
            Language::Italian => "italian",
            Language::Latvian => "latvian",
            Language::Polish => "polish",
            Language::Portuguese => "portuguese",
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Turkish => "turkish",
        }
    }

    /// Look a language up by name, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Option<Language> {
        let name = name.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(name))
    }

    /// The language owning exactly `bit`, if any.
    pub(crate) fn from_bit(bit: u32) -> Option<Language> {
        if bit.count_ones() != 1 {
            return None;
        }
        Language::ALL.get(bit.trailing_zeros() as usize).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s).ok_or_else(|| RuleError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_declaration_order() {
        assert_eq!(Language::Any.bit(), 1);
        assert_eq!(Language::Arabic.bit(), 2);
        assert_eq!(Language::German.bit(), 128);
        assert_eq!(Language::Russian.bit(), 131_072);
        assert_eq!(Language::Turkish.bit(), 524_288);
    }

    #[test]
    fn test_name_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.name()), Some(language));
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Language::from_name(" German "), Some(Language::German));
        assert_eq!(Language::from_name("GREEKLATIN"), Some(Language::GreekLatin));
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(Language::from_bit(64), Some(Language::French));
        assert_eq!(Language::from_bit(0), None);
        assert_eq!(Language::from_bit(3), None);
        assert_eq!(Language::from_bit(1 << 25), None);
    }

    #[test]
    fn test_unknown_language_error() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, RuleError::UnknownLanguage(ref name) if name == "klingon"));
    }
}
