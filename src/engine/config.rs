//! Encoder options.

use serde::{Deserialize, Serialize};

use crate::language::{Language, LanguageSet};
use crate::mode::{MatchType, Mode};
use crate::phonetic::DEFAULT_MAX_PHONEMES;
use crate::rules::ModeRules;

/// Options of a [`BeiderMorse`](super::BeiderMorse) encoder.
///
/// Deserializes from partial documents; absent fields take their defaults:
///
/// ```json
/// { "mode": "ash", "match_type": "exact" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Name mode
    pub mode: Mode,
    /// Final-rule family
    pub match_type: MatchType,
    /// Encode multi-word names as one string (`true`) or word by word
    pub concat: bool,
    /// Comma-separated language names; empty for automatic detection
    pub languages: String,
    /// Cap on alternatives per phonetic string
    pub max_phonemes: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            mode: Mode::Generic,
            match_type: MatchType::Approx,
            concat: true,
            languages: String::new(),
            max_phonemes: DEFAULT_MAX_PHONEMES,
        }
    }
}

/// The language(s) to encode a name as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    /// Infer languages from the spelling of each term.
    #[default]
    Auto,
    /// Use these languages. [`LanguageSet::ANY`] disables every language
    /// restriction.
    Explicit(LanguageSet),
}

impl LanguageChoice {
    /// Parse comma-separated language names.
    ///
    /// `any` anywhere in the list selects [`LanguageSet::ANY`]. Unknown
    /// names are ignored; a list with no known name means
    /// [`LanguageChoice::Auto`].
    pub fn parse(names: &str) -> LanguageChoice {
        let mut languages = LanguageSet::EMPTY;
        for name in names.split(',') {
            match Language::from_name(name) {
                Some(Language::Any) => return LanguageChoice::Explicit(LanguageSet::ANY),
                Some(language) => languages = languages.union(language.into()),
                None => {}
            }
        }
        if languages.is_empty() {
            LanguageChoice::Auto
        } else {
            LanguageChoice::Explicit(languages)
        }
    }

    /// The fixed languages to use under `rules`' mode, or `None` to
    /// classify each term.
    ///
    /// Explicit languages are narrowed to the mode's; a choice with none of
    /// them falls back to classification.
    pub fn resolve(self, rules: &ModeRules) -> Option<LanguageSet> {
        match self {
            LanguageChoice::Auto => None,
            LanguageChoice::Explicit(languages) if languages.is_any() => Some(LanguageSet::ANY),
            LanguageChoice::Explicit(languages) => {
                let supported = languages.intersection(rules.languages());
                (!supported.is_empty()).then_some(supported)
            }
        }
    }
}

impl From<&str> for LanguageChoice {
    fn from(names: &str) -> Self {
        LanguageChoice::parse(names)
    }
}

impl From<&String> for LanguageChoice {
    fn from(names: &String) -> Self {
        LanguageChoice::parse(names)
    }
}

impl From<LanguageSet> for LanguageChoice {
    fn from(languages: LanguageSet) -> Self {
        if languages.is_empty() {
            LanguageChoice::Auto
        } else {
            LanguageChoice::Explicit(languages)
        }
    }
}

impl From<Language> for LanguageChoice {
    fn from(language: Language) -> Self {
        LanguageChoice::Explicit(language.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_parse_choice() {
        assert_eq!(LanguageChoice::parse(""), LanguageChoice::Auto);
        assert_eq!(LanguageChoice::parse("klingon"), LanguageChoice::Auto);
        assert_eq!(
            LanguageChoice::parse("german, Polish,klingon"),
            LanguageChoice::Explicit(LanguageSet::parse("german+polish").unwrap())
        );
        assert_eq!(
            LanguageChoice::parse("german,any"),
            LanguageChoice::Explicit(LanguageSet::ANY)
        );
    }

    #[test]
    fn test_resolve_narrows_to_mode() {
        let rules = RuleSet::bundled();
        let sep = rules.mode(Mode::Sephardic);

        assert_eq!(LanguageChoice::Auto.resolve(sep), None);
        assert_eq!(LanguageChoice::parse("any").resolve(sep), Some(LanguageSet::ANY));
        assert_eq!(
            LanguageChoice::parse("french,german").resolve(sep),
            Some(LanguageSet::from(Language::French))
        );
        // german is not a Sephardic language
        assert_eq!(LanguageChoice::parse("german").resolve(sep), None);
    }

    #[test]
    fn test_config_defaults_and_partial_json() {
        let config: EncoderConfig = serde_json::from_str(r#"{"mode": "ash"}"#).unwrap();
        assert_eq!(config.mode, Mode::Ashkenazic);
        assert_eq!(config.match_type, MatchType::Approx);
        assert!(config.concat);
        assert_eq!(config.max_phonemes, DEFAULT_MAX_PHONEMES);
        assert_eq!(config.languages, "");
    }
}
