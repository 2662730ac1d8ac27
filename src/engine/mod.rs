//! The Beider-Morse encoder.
//!
//! [`BeiderMorse`] ties the pipeline together:
//!
//! ```text
//! name -> normalize -> classify -> word plan -> (per word) select tables
//!      -> main pass -> common final pass -> language final pass -> render
//! ```
//!
//! Languages are detected once on the whole normalized name and shared by
//! every word. Per-word encodings are joined with `-`. A generic particle
//! fork renders as exactly two bracketed halves, `(remainder)-(combined)`.
//!
//! Encoding never fails: unknown languages fall back to detection, empty
//! input gives an empty string and uncovered characters are dropped.

mod builder;
mod config;

pub use builder::{BeiderMorseBuilder, BuilderError};
pub use config::{EncoderConfig, LanguageChoice};

use std::sync::Arc;
use tracing::trace;

use crate::language::LanguageSet;
use crate::mode::{MatchType, Mode};
use crate::phonetic::{finalize, flat_tokens, tokens, Transducer};
use crate::preprocess::{normalize, Preprocessor, WordPlan};
use crate::rules::{ModeRules, RuleSet};

/// A configured Beider-Morse encoder.
///
/// Cheap to clone and safe to share between threads; the rule set is held
/// behind an [`Arc`].
///
/// # Example
///
/// ```rust,ignore
/// use libbmpm::prelude::*;
///
/// let encoder = BeiderMorse::new();
/// assert_eq!(encoder.encode("Reno"), "(rino|rYno)");
/// assert!(encoder.is_match("Renault", "Reno"));
/// ```
#[derive(Debug, Clone)]
pub struct BeiderMorse {
    rules: Arc<RuleSet>,
    config: EncoderConfig,
    choice: LanguageChoice,
}

impl Default for BeiderMorse {
    fn default() -> Self {
        BeiderMorse::new()
    }
}

impl BeiderMorse {
    /// An encoder with default options over the bundled rules.
    pub fn new() -> Self {
        BeiderMorse::from_parts(RuleSet::bundled(), EncoderConfig::default())
    }

    /// Start building a customized encoder.
    pub fn builder() -> BeiderMorseBuilder {
        BeiderMorseBuilder::new()
    }

    pub(crate) fn from_parts(rules: Arc<RuleSet>, config: EncoderConfig) -> Self {
        let choice = LanguageChoice::parse(&config.languages);
        BeiderMorse {
            rules,
            config,
            choice,
        }
    }

    /// The encoder's options.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The rule set in use.
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Encode `name` with the configured options.
    pub fn encode(&self, name: &str) -> String {
        self.run(self.config.mode, self.choice).encode(name)
    }

    /// Encode `name` as `language` under `mode`, keeping the configured
    /// match type, concat flag and alternative cap.
    ///
    /// `language` accepts comma-separated names (`""` for detection,
    /// `"any"` to disable language restrictions), a [`Language`] or a
    /// [`LanguageSet`].
    ///
    /// [`Language`]: crate::language::Language
    pub fn encode_with(
        &self,
        name: &str,
        language: impl Into<LanguageChoice>,
        mode: impl Into<Mode>,
    ) -> String {
        self.run(mode.into(), language.into()).encode(name)
    }

    /// Encode `name` and expand it into alternative codes per word group.
    pub fn encode_tokens(&self, name: &str) -> Vec<Vec<String>> {
        tokens(&self.encode(name))
    }

    /// True when the encodings of `a` and `b` share at least one code.
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        let left = flat_tokens(&self.encode(a));
        if left.is_empty() {
            return false;
        }
        flat_tokens(&self.encode(b))
            .iter()
            .any(|code| left.contains(code))
    }

    /// The languages detected for `name` under the configured mode.
    ///
    /// Detection runs on the whole normalized name; [`BeiderMorse::encode`]
    /// encodes every word with this set.
    pub fn classify(&self, name: &str) -> LanguageSet {
        self.rules.mode(self.config.mode).classify(&normalize(name))
    }

    /// Encode many names in parallel, preserving order.
    #[cfg(feature = "rayon")]
    pub fn encode_batch<S>(&self, names: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        names
            .par_iter()
            .map(|name| self.encode(name.as_ref()))
            .collect()
    }

    fn run(&self, mode: Mode, choice: LanguageChoice) -> EncodeRun<'_> {
        let rules = self.rules.mode(mode);
        EncodeRun {
            rules,
            preprocessor: Preprocessor::new(rules, self.config.concat),
            languages: choice.resolve(rules),
            match_type: self.config.match_type,
            max_phonemes: self.config.max_phonemes.max(1),
        }
    }
}

/// State of one `encode` call.
struct EncodeRun<'a> {
    rules: &'a ModeRules,
    preprocessor: Preprocessor<'a>,
    languages: Option<LanguageSet>,
    match_type: MatchType,
    max_phonemes: usize,
}

impl EncodeRun<'_> {
    fn encode(&self, name: &str) -> String {
        let term = normalize(name);
        let languages = self
            .languages
            .unwrap_or_else(|| self.rules.classify(&term));
        self.encode_plan(self.preprocessor.plan(&term), languages)
    }

    fn encode_plan(&self, plan: WordPlan, languages: LanguageSet) -> String {
        match plan {
            WordPlan::Empty => String::new(),
            WordPlan::Single(word) => self.encode_word(&word, languages),
            WordPlan::Separate(words) => words
                .iter()
                .map(|word| self.encode_word(word, languages))
                .collect::<Vec<_>>()
                .join("-"),
            WordPlan::Fork {
                remainder,
                combined,
            } => format!(
                "{}-{}",
                self.encode_half(&remainder, languages),
                self.encode_half(&combined, languages)
            ),
        }
    }

    fn encode_half(&self, term: &str, languages: LanguageSet) -> String {
        bracket(self.encode_plan(self.preprocessor.plan_words(term), languages))
    }

    fn encode_word(&self, word: &str, languages: LanguageSet) -> String {
        let tables = self.rules.select(self.match_type, languages);
        let raw = Transducer::new(tables.main, languages)
            .with_max_phonemes(self.max_phonemes)
            .transduce(word);
        let merged = finalize(
            &raw,
            tables.common,
            tables.language,
            languages,
            self.max_phonemes,
        );
        let encoded = merged.to_string();
        trace!(word, languages = %languages, encoded = %encoded, "encoded word");
        encoded
    }
}

/// Wrap a fork half so it forms exactly one top-level group.
///
/// A half that already is a single `(a|b)` alternation is kept as is.
fn bracket(encoded: String) -> String {
    let single_alternation = encoded.len() >= 2
        && encoded.starts_with('(')
        && encoded.ends_with(')')
        && !encoded[1..encoded.len() - 1].contains(['(', ')', '-']);
    if single_alternation {
        encoded
    } else {
        format!("({encoded})")
    }
}

/// Encode `name` with the bundled rules and default options.
///
/// `mode` accepts a [`Mode`] or a tag (`"gen"`, `"ash"`, `"sep"`; anything
/// else is generic). `language` is as for [`BeiderMorse::encode_with`].
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(libbmpm::encode("Niall", "", "gen"), "(nial|niol)");
/// ```
pub fn encode(name: &str, language: impl Into<LanguageChoice>, mode: impl Into<Mode>) -> String {
    BeiderMorse::new().encode_with(name, language, mode)
}
