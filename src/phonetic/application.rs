//! The main rewrite pass.
//!
//! [`Transducer`] walks a word left to right. At each position it tries the
//! rules of its table in order; the first rule that matches and leaves at
//! least one legal alternative wins. Rules whose replacement would leave no
//! alternative are vetoed and the scan moves on to the next rule.

use tracing::trace;

use super::matching::{can_apply_at, char_len_at};
use super::types::PhoneticString;
use crate::language::LanguageSet;
use crate::rules::{Rule, RuleTable};

/// Default cap on the number of alternatives kept per phonetic string.
pub const DEFAULT_MAX_PHONEMES: usize = 20;

/// Result of trying one rule at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule matched and produced the new phonetic string.
    Applied {
        /// Output built so far, extended by the rule's replacement
        phonetic: PhoneticString,
        /// Bytes of input consumed (the pattern length)
        consumed: usize,
    },
    /// The rule matched but every alternative it produces is illegal for
    /// the languages built so far.
    Vetoed,
    /// The rule does not match here.
    NoMatch,
}

/// Applies one main rule table to words of a known language set.
#[derive(Debug, Clone, Copy)]
pub struct Transducer<'r> {
    rules: &'r RuleTable,
    languages: LanguageSet,
    max_phonemes: usize,
}

impl<'r> Transducer<'r> {
    /// Create a transducer with the default alternative cap.
    pub fn new(rules: &'r RuleTable, languages: LanguageSet) -> Self {
        Transducer {
            rules,
            languages,
            max_phonemes: DEFAULT_MAX_PHONEMES,
        }
    }

    /// Set the alternative cap.
    pub fn with_max_phonemes(mut self, max_phonemes: usize) -> Self {
        self.max_phonemes = max_phonemes.max(1);
        self
    }

    /// Try `rule` at `pos`.
    ///
    /// # Arguments
    ///
    /// - `rule` - The rule to try
    /// - `word` - The input word
    /// - `pos` - Byte offset of the cursor
    /// - `current` - Output built so far
    ///
    /// # Returns
    ///
    /// - [`RuleOutcome::NoMatch`] if pattern, contexts or restriction fail
    /// - [`RuleOutcome::Vetoed`] if the replacement leaves no legal alternative
    /// - [`RuleOutcome::Applied`] otherwise
    pub fn try_rule(
        &self,
        rule: &Rule,
        word: &str,
        pos: usize,
        current: &PhoneticString,
    ) -> RuleOutcome {
        if !can_apply_at(rule, word, pos, self.languages) {
            return RuleOutcome::NoMatch;
        }
        let phonetic = current.apply(rule.replacement(), self.max_phonemes);
        if phonetic.is_empty() {
            return RuleOutcome::Vetoed;
        }
        RuleOutcome::Applied {
            phonetic,
            consumed: rule.pattern().len(),
        }
    }

    /// Rewrite `word` into the phonetic alphabet.
    ///
    /// # Algorithm
    ///
    /// 1. Start from one empty alternative tagged with the inferred languages
    /// 2. At the cursor, try each rule in table order; skip vetoed rules
    /// 3. On a match, keep the rule's output and advance past its pattern
    /// 4. Without a match, advance one character and emit nothing
    ///
    /// Every step advances the cursor, so the loop always terminates.
    pub fn transduce(&self, word: &str) -> PhoneticString {
        let mut phonetic = PhoneticString::start(self.languages);
        let mut pos = 0;

        while pos < word.len() {
            let mut advance = None;
            for rule in self.rules {
                match self.try_rule(rule, word, pos, &phonetic) {
                    RuleOutcome::Applied {
                        phonetic: next,
                        consumed,
                    } => {
                        phonetic = next;
                        advance = Some(consumed);
                        break;
                    }
                    RuleOutcome::Vetoed => {
                        trace!(pattern = rule.pattern(), pos, "rule vetoed");
                    }
                    RuleOutcome::NoMatch => {}
                }
            }
            pos += advance.unwrap_or_else(|| char_len_at(word, pos));
        }

        phonetic
    }
}
