//! Language inference from the spelling of a name.

use regex::Regex;
use tracing::trace;

use super::LanguageSet;
use crate::rules::RuleError;

/// One accept/reject rule of a [`LanguageClassifier`].
///
/// When `pattern` is found anywhere in a word, an accepting rule keeps only
/// `languages`; a rejecting rule removes them.
#[derive(Debug, Clone)]
pub struct LanguageRule {
    pattern: Regex,
    languages: LanguageSet,
    accept: bool,
}

impl LanguageRule {
    /// Compile a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str, languages: LanguageSet, accept: bool) -> Result<Self, RuleError> {
        let compiled = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            table: "language_rules".to_string(),
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        Ok(LanguageRule {
            pattern: compiled,
            languages,
            accept,
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Languages this rule accepts or rejects.
    pub fn languages(&self) -> LanguageSet {
        self.languages
    }

    /// Whether the rule accepts (`true`) or rejects its languages.
    pub fn accepts(&self) -> bool {
        self.accept
    }

    fn narrow(&self, current: LanguageSet, universe: LanguageSet) -> LanguageSet {
        if self.accept {
            current.intersection(self.languages)
        } else {
            current.intersection(self.languages.complement_within(universe))
        }
    }
}

/// Ordered language rules of one mode.
///
/// Every matching rule narrows the current set by intersection, so the
/// result does not depend on rule order.
#[derive(Debug, Clone)]
pub struct LanguageClassifier {
    rules: Vec<LanguageRule>,
    universe: LanguageSet,
}

impl LanguageClassifier {
    /// Create a classifier over the mode's full language set.
    pub fn new(rules: Vec<LanguageRule>, universe: LanguageSet) -> Self {
        LanguageClassifier { rules, universe }
    }

    /// The language set classification starts from.
    pub fn universe(&self) -> LanguageSet {
        self.universe
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[LanguageRule] {
        &self.rules
    }

    /// Infer the possible languages of `word`.
    ///
    /// Returns [`LanguageSet::ANY`] when the rules eliminate every language.
    pub fn classify(&self, word: &str) -> LanguageSet {
        let languages = self
            .rules
            .iter()
            .filter(|rule| rule.pattern.is_match(word))
            .fold(self.universe, |current, rule| rule.narrow(current, self.universe))
            .or_any();
        trace!(word, languages = %languages, "classified");
        languages
    }
}
