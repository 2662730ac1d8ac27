//! Bit-set of [`Language`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

use super::Language;
use crate::rules::RuleError;

/// A set of languages, stored as a bit mask.
///
/// Two sets have special meaning:
///
/// - [`LanguageSet::EMPTY`]: no language is possible. Phonemes whose set
///   becomes empty are dropped.
/// - [`LanguageSet::ANY`]: the universal sentinel, "any language". It is
///   absorbing for [`merge`](Self::merge) and neutral for
///   [`restrict_to`](Self::restrict_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageSet(u32);

impl LanguageSet {
    /// The empty set.
    pub const EMPTY: LanguageSet = LanguageSet(0);

    /// The universal sentinel.
    pub const ANY: LanguageSet = LanguageSet(Language::Any.bit());

    /// Builds a set from a raw mask. Bits above the known languages are
    /// discarded.
    pub const fn from_bits(bits: u32) -> Self {
        LanguageSet(bits & Self::KNOWN_BITS)
    }

    const KNOWN_BITS: u32 = (1u32 << Language::ALL.len()) - 1;

    /// The raw mask.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no language is present.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for the universal sentinel.
    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }

    /// True when exactly one concrete language is present.
    pub const fn is_singleton(self) -> bool {
        self.0.count_ones() == 1 && !self.is_any()
    }

    /// The single concrete language of a singleton set.
    pub fn single(self) -> Option<Language> {
        if self.is_singleton() {
            Language::from_bit(self.0)
        } else {
            None
        }
    }

    /// Membership test.
    #[inline]
    pub const fn contains(self, language: Language) -> bool {
        self.0 & language.bit() != 0
    }

    /// Narrow `self` by `other`, treating [`ANY`](Self::ANY) on either side
    /// as "all languages".
    pub const fn restrict_to(self, other: LanguageSet) -> LanguageSet {
        if self.is_any() {
            other
        } else if other.is_any() {
            self
        } else {
            LanguageSet(self.0 & other.0)
        }
    }

    /// Combine the languages of two merged phonemes. [`ANY`](Self::ANY) absorbs.
    pub const fn merge(self, other: LanguageSet) -> LanguageSet {
        if self.is_any() || other.is_any() {
            Self::ANY
        } else {
            LanguageSet(self.0 | other.0)
        }
    }

    /// Plain bitwise union.
    #[inline]
    pub const fn union(self, other: LanguageSet) -> LanguageSet {
        LanguageSet(self.0 | other.0)
    }

    /// Plain bitwise intersection.
    #[inline]
    pub const fn intersection(self, other: LanguageSet) -> LanguageSet {
        LanguageSet(self.0 & other.0)
    }

    /// Languages of `universe` not in `self`.
    #[inline]
    pub const fn complement_within(self, universe: LanguageSet) -> LanguageSet {
        LanguageSet(!self.0 & universe.0)
    }

    /// True when every language of `other` is also in `self`.
    #[inline]
    pub const fn is_superset_of(self, other: LanguageSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two sets share a language.
    #[inline]
    pub const fn intersects(self, other: LanguageSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Replace the empty set with [`ANY`](Self::ANY).
    #[inline]
    pub const fn or_any(self) -> LanguageSet {
        if self.is_empty() {
            Self::ANY
        } else {
            self
        }
    }

    /// Iterate the languages in bit order.
    pub fn iter(self) -> Languages {
        Languages { bits: self.0 }
    }

    /// Parse the rule-data notation: a decimal mask (`"131072"`) or a list
    /// of names joined by `+` (`"german+polish"`).
    pub fn parse(text: &str) -> Result<LanguageSet, RuleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RuleError::UnknownLanguage(String::new()));
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            let bits: u32 = text
                .parse()
                .map_err(|_| RuleError::UnknownLanguage(text.to_string()))?;
            if bits & !Self::KNOWN_BITS != 0 {
                return Err(RuleError::UnknownLanguage(text.to_string()));
            }
            return Ok(LanguageSet(bits));
        }
        text.split('+')
            .map(str::parse::<Language>)
            .collect::<Result<LanguageSet, _>>()
    }
}

/// Iterator over the languages of a [`LanguageSet`].
#[derive(Debug, Clone)]
pub struct Languages {
    bits: u32,
}

impl Iterator for Languages {
    type Item = Language;

    fn next(&mut self) -> Option<Language> {
        while self.bits != 0 {
            let low = self.bits & self.bits.wrapping_neg();
            self.bits &= !low;
            if let Some(language) = Language::from_bit(low) {
                return Some(language);
            }
        }
        None
    }
}

impl IntoIterator for LanguageSet {
    type Item = Language;
    type IntoIter = Languages;

    fn into_iter(self) -> Languages {
        self.iter()
    }
}

impl From<Language> for LanguageSet {
    fn from(language: Language) -> Self {
        LanguageSet(language.bit())
    }
}

impl FromIterator<Language> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        LanguageSet(iter.into_iter().fold(0, |bits, l| bits | l.bit()))
    }
}

impl BitAnd for LanguageSet {
    type Output = LanguageSet;

    fn bitand(self, rhs: LanguageSet) -> LanguageSet {
        self.intersection(rhs)
    }
}

impl BitOr for LanguageSet {
    type Output = LanguageSet;

    fn bitor(self, rhs: LanguageSet) -> LanguageSet {
        self.union(rhs)
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for language in self.iter() {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(language.name())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for LanguageSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageSet::parse(s)
    }
}
