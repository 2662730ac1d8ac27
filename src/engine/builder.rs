//! Builder pattern for creating BeiderMorse encoders.

use std::sync::Arc;

use super::config::EncoderConfig;
use super::BeiderMorse;
use crate::mode::{MatchType, Mode};
use crate::rules::RuleSet;

/// Builder for constructing a [`BeiderMorse`] encoder with a fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use libbmpm::prelude::*;
///
/// let encoder = BeiderMorseBuilder::new()
///     .mode(Mode::Sephardic)
///     .match_type(MatchType::Exact)
///     .concat(false)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BeiderMorseBuilder {
    rules: Option<Arc<RuleSet>>,
    config: EncoderConfig,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// The alternative cap is zero
    #[error("max_phonemes must be at least 1. Use .max_phonemes() to set it.")]
    ZeroMaxPhonemes,
}

impl BeiderMorseBuilder {
    /// Create a builder with default options and the bundled rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `rules` instead of the bundled rule set.
    pub fn rules(mut self, rules: Arc<RuleSet>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Replace every option at once.
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the name mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the final-rule family.
    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.config.match_type = match_type;
        self
    }

    /// Encode multi-word names as one string (`true`) or word by word.
    pub fn concat(mut self, concat: bool) -> Self {
        self.config.concat = concat;
        self
    }

    /// Fix the languages (comma-separated names); empty for detection.
    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.config.languages = languages.into();
        self
    }

    /// Cap the number of alternatives per phonetic string.
    pub fn max_phonemes(mut self, max_phonemes: usize) -> Self {
        self.config.max_phonemes = max_phonemes;
        self
    }

    /// Build the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ZeroMaxPhonemes`] if the alternative cap is
    /// zero.
    pub fn build(self) -> Result<BeiderMorse, BuilderError> {
        if self.config.max_phonemes == 0 {
            return Err(BuilderError::ZeroMaxPhonemes);
        }
        let rules = self.rules.unwrap_or_else(RuleSet::bundled);
        Ok(BeiderMorse::from_parts(rules, self.config))
    }
}
