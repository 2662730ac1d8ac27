//! Phonetic rewriting: the main pass, the final passes and token expansion.
//!
//! A word is encoded in three steps, all driven by rule tables chosen for
//! its inferred languages:
//!
//! 1. [`Transducer::transduce`] rewrites the word into the phonetic
//!    alphabet with the main table. Characters no rule covers are dropped.
//! 2. [`finalize`] runs the common final table, then the language final
//!    table. Characters no rule covers are copied through.
//! 3. The resulting [`PhoneticString`] renders as `code` or `(a|b|c)`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use libbmpm::phonetic::{finalize, Transducer};
//! use libbmpm::prelude::*;
//!
//! let rules = RuleSet::bundled();
//! let mode = rules.mode(Mode::Generic);
//! let languages = mode.classify("neil");
//! let tables = mode.select(MatchType::Approx, languages);
//!
//! let raw = Transducer::new(tables.main, languages).transduce("neil");
//! let merged = finalize(&raw, tables.common, tables.language, languages, 20);
//! assert_eq!(merged.to_string(), "(nDl|niil)");
//! ```

pub mod application;
pub mod finalize;
pub mod matching;
pub mod tokens;
pub mod types;

pub use application::{RuleOutcome, Transducer, DEFAULT_MAX_PHONEMES};
pub use finalize::{apply_final_pass, finalize, finalize_default};
pub use matching::{
    can_apply_at, left_context_matches, pattern_matches_at, restriction_admits,
    right_context_matches,
};
pub use tokens::{flat_tokens, groups, tokens};
pub use types::{Phoneme, PhoneticString};
