//! # libbmpm
//!
//! Beider-Morse phonetic matching of personal names.
//!
//! A name is rewritten into one or more codes of an intermediate phonetic
//! alphabet. Names that sound alike share codes, across spellings,
//! languages and alphabets (Latin, Cyrillic, Greek, Hebrew, Arabic). The
//! encoder is driven entirely by rule data, following:
//!
//! > Beider, Alexander, and Stephen P. Morse. "Phonetic Matching: A Better
//! > Soundex." Association of Professional Genealogists Quarterly (2010).
//!
//! ## Pipeline
//!
//! 1. Normalize the name and apply the mode's multi-word policy
//!    ([`preprocess`])
//! 2. Guess the possible languages of the whole name ([`language`])
//! 3. Pick the rule tables for those languages ([`rules`])
//! 4. Rewrite with the main table, then the two final tables ([`phonetic`])
//! 5. Render and join the per-term codes ([`engine`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use libbmpm::prelude::*;
//!
//! let encoder = BeiderMorse::new();
//! assert_eq!(encoder.encode("Niall"), "(nial|niol)");
//! assert_eq!(encoder.encode("Reno"), "(rino|rYno)");
//! assert!(encoder.is_match("Renault", "Reno"));
//!
//! // One-off calls use the bundled rules
//! assert_eq!(libbmpm::encode("ben Gurion", "", "ash"), libbmpm::encode("Gurion", "", "ash"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod language;
pub mod mode;
pub mod phonetic;
pub mod preprocess;
pub mod rules;

#[cfg(feature = "serialization")]
pub mod serialization;

pub use engine::encode;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::engine::{
        BeiderMorse, BeiderMorseBuilder, BuilderError, EncoderConfig, LanguageChoice,
    };
    pub use crate::language::{Language, LanguageSet};
    pub use crate::mode::{MatchType, Mode};
    pub use crate::phonetic::{tokens, PhoneticString};
    pub use crate::rules::{RuleError, RuleSet};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, JsonSerializer, RuleSetSerializer, SerializationError,
    };

    #[cfg(feature = "compression")]
    pub use crate::serialization::GzipSerializer;
}
