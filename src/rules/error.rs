//! Error types for loading and validating rule data.

use thiserror::Error;

use crate::mode::Mode;

/// Errors raised while loading, parsing or validating a rule set.
///
/// Every error is raised at load time. Once a [`RuleSet`](super::RuleSet)
/// exists, encoding never fails.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A table required by a mode is absent.
    ///
    /// Every mode needs a main table for `any` and each of its languages,
    /// `common` exact/approx final tables, and exact/approx final tables for
    /// `any` and each of its languages.
    #[error("Mode {mode}: missing {kind} table for '{key}'")]
    MissingTable {
        /// Mode being validated
        mode: Mode,
        /// Table family (`rules`, `approx` or `exact`)
        kind: &'static str,
        /// Language name or `common`
        key: String,
    },

    /// A context or language-detection pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}' in table '{table}': {source}")]
    InvalidPattern {
        /// Table the pattern belongs to
        table: String,
        /// Offending pattern
        pattern: String,
        /// Regex compilation error
        #[source]
        source: Box<regex::Error>,
    },

    /// A replacement expression does not follow the `text`, `text[langs]`
    /// or `(a|b[langs]|c)` syntax.
    #[error("Invalid replacement '{replacement}': {reason}")]
    InvalidReplacement {
        /// Offending replacement expression
        replacement: String,
        /// What is wrong with it
        reason: String,
    },

    /// A language name (or numeric mask) is not recognized.
    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    /// A table is keyed by a language its mode does not support.
    #[error("Mode {mode} does not support language '{language}'")]
    UnsupportedLanguage {
        /// Mode being validated
        mode: Mode,
        /// Language name
        language: String,
    },

    /// A rule restriction operator is neither `ALL` nor `ANY`.
    #[error("Invalid restriction operator '{0}' (expected ALL or ANY)")]
    InvalidOperator(String),

    /// A rule record has the wrong number of fields.
    #[error("Rule record has {0} fields (expected 4 or 6)")]
    InvalidArity(usize),

    /// A rule has an empty pattern and could never advance the cursor.
    #[error("Empty pattern in table '{0}'")]
    EmptyPattern(String),

    /// Two documents were supplied for the same mode.
    #[error("Duplicate rule data for mode {0}")]
    DuplicateMode(Mode),

    /// A rule set lacks one of the three modes.
    #[error("No rule data for mode {0}")]
    MissingMode(Mode),

    /// Rule data could not be read from disk.
    #[error("I/O error reading rule data: {0}")]
    Io(#[from] std::io::Error),

    /// Rule data is not valid JSON for the expected shape.
    #[error("Malformed rule data: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for rule loading.
pub type Result<T> = std::result::Result<T, RuleError>;
