//! Name normalization and multi-word policy.
//!
//! Before any rule runs, a name is normalized (trimmed, lower-cased, NFC,
//! hyphens turned into spaces) and split into words. The mode then decides
//! what happens to the words:
//!
//! | Mode       | Policy                                                      |
//! |------------|-------------------------------------------------------------|
//! | Generic    | a leading particle forks the name (`van x` => `x`, `vanx`) |
//! | Ashkenazic | a particle as first of several words is dropped             |
//! | Sephardic  | text up to the last apostrophe goes, then every particle    |
//!
//! With several words left, the `concat` flag chooses between one encoding
//! of the space-joined words and one encoding per word.

use unicode_normalization::UnicodeNormalization;

use crate::mode::WordPolicy;
use crate::rules::ModeRules;

/// Normalize a raw name: trim, lower-case, NFC, hyphens to spaces, trim.
pub fn normalize(name: &str) -> String {
    let normalized: String = name.trim().to_lowercase().nfc().collect();
    normalized.replace('-', " ").trim().to_string()
}

/// What to encode for one normalized term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPlan {
    /// Nothing is left to encode.
    Empty,
    /// Encode one string as a whole.
    Single(String),
    /// Encode each word on its own and join the results with `-`.
    Separate(Vec<String>),
    /// Encode both halves as `(remainder)-(combined)`. Each half goes
    /// through [`Preprocessor::plan_words`], so it never forks again.
    Fork {
        /// The name without its leading particle
        remainder: String,
        /// The particle glued to the remainder
        combined: String,
    },
}

/// Plans terms for one mode.
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor<'r> {
    rules: &'r ModeRules,
    concat: bool,
}

impl<'r> Preprocessor<'r> {
    /// Create a preprocessor for `rules`' mode.
    pub fn new(rules: &'r ModeRules, concat: bool) -> Self {
        Preprocessor { rules, concat }
    }

    /// Normalize `raw` and plan it.
    pub fn prepare(&self, raw: &str) -> WordPlan {
        self.plan(&normalize(raw))
    }

    /// Plan an already normalized term.
    pub fn plan(&self, term: &str) -> WordPlan {
        if self.rules.mode().word_policy() == WordPolicy::ForkPrefixes {
            if let Some(fork) = self.fork(term) {
                return fork;
            }
        }
        self.plan_words(term)
    }

    /// Plan a normalized term by its words alone. Never returns
    /// [`WordPlan::Fork`].
    pub fn plan_words(&self, term: &str) -> WordPlan {
        let policy = self.rules.mode().word_policy();
        let mut words: Vec<&str> = term.split_whitespace().collect();
        match policy {
            WordPolicy::ForkPrefixes => {}
            WordPolicy::DropLeadingWord => {
                if words.len() > 1 && self.rules.is_discard(words[0]) {
                    words.remove(0);
                }
            }
            WordPolicy::StripApostrophes => {
                words = words
                    .into_iter()
                    .map(|word| word.rsplit('\'').next().unwrap_or(word))
                    .filter(|word| !word.is_empty() && !self.rules.is_discard(word))
                    .collect();
            }
        }

        match words.len() {
            0 => WordPlan::Empty,
            1 => WordPlan::Single(words[0].to_string()),
            _ if self.concat => WordPlan::Single(words.join(" ")),
            _ => WordPlan::Separate(words.into_iter().map(str::to_string).collect()),
        }
    }

    fn fork(&self, term: &str) -> Option<WordPlan> {
        self.rules.discards().iter().find_map(|prefix| {
            let remainder = term.strip_prefix(prefix.as_str())?;
            if remainder.trim().is_empty() {
                return None;
            }
            let mut glued = prefix.chars();
            glued.next_back();
            let combined = format!("{}{}", glued.as_str(), remainder);
            Some(WordPlan::Fork {
                remainder: remainder.trim().to_string(),
                combined: combined.trim().to_string(),
            })
        })
    }
}
