//! The replacement mini-language.
//!
//! A replacement is one of:
//!
//! - `text`: a literal, always legal;
//! - `text[langs]`: a literal legal only for `langs`;
//! - `(a|b[langs]|c)`: an alternation of such variants. Empty variants
//!   (`(|a)`) are allowed.
//!
//! `langs` is a `+`-joined list of language names or a decimal mask. Nested
//! groups and text around a group (`a(b|c)`) are rejected.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::RuleError;
use crate::language::LanguageSet;

/// One alternative of a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Phonetic text appended when this variant is chosen.
    pub text: String,
    /// Languages for which the variant is legal; `None` means all.
    pub languages: Option<LanguageSet>,
}

impl Variant {
    /// Languages the variant restricts to, with [`LanguageSet::ANY`] for
    /// unrestricted variants.
    #[inline]
    pub fn restriction(&self) -> LanguageSet {
        self.languages.unwrap_or(LanguageSet::ANY)
    }
}

/// A parsed replacement expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplacementExpr {
    /// Unrestricted literal text.
    Literal(String),
    /// Ordered alternatives.
    Alternation(SmallVec<[Variant; 4]>),
}

impl ReplacementExpr {
    /// Parse a replacement expression.
    ///
    /// # Errors
    ///
    /// [`RuleError::InvalidReplacement`] for malformed syntax and
    /// [`RuleError::UnknownLanguage`] for unknown language names.
    pub fn parse(source: &str) -> Result<Self, RuleError> {
        let invalid = |reason: &str| RuleError::InvalidReplacement {
            replacement: source.to_string(),
            reason: reason.to_string(),
        };

        if let Some(rest) = source.strip_prefix('(') {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| invalid("unclosed alternation"))?;
            if inner.contains(['(', ')']) {
                return Err(invalid("nested alternation"));
            }
            let variants = inner
                .split('|')
                .map(|part| {
                    parse_variant(part).map_err(|e| e.unwrap_or_else(|reason| invalid(reason)))
                })
                .collect::<Result<SmallVec<[Variant; 4]>, _>>()?;
            return Ok(ReplacementExpr::Alternation(variants));
        }

        if source.contains(['(', ')', '|']) {
            return Err(invalid("alternation must span the whole replacement"));
        }
        let variant =
            parse_variant(source).map_err(|e| e.unwrap_or_else(|reason| invalid(reason)))?;
        Ok(match variant.languages {
            None => ReplacementExpr::Literal(variant.text),
            Some(_) => ReplacementExpr::Alternation(SmallVec::from_elem(variant, 1)),
        })
    }

    /// Iterate the variants in order.
    pub fn variants(&self) -> Variants<'_> {
        match self {
            ReplacementExpr::Literal(text) => Variants::Literal(Some(text.as_str())),
            ReplacementExpr::Alternation(variants) => Variants::Alternation(variants.iter()),
        }
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        match self {
            ReplacementExpr::Literal(_) => 1,
            ReplacementExpr::Alternation(variants) => variants.len(),
        }
    }

    /// True for an alternation with no variants (never produced by
    /// [`parse`](Self::parse)).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors from a single variant: either a ready-made error (unknown
/// language) or a reason to wrap in [`RuleError::InvalidReplacement`].
type VariantError = Result<RuleError, &'static str>;

fn parse_variant(part: &str) -> Result<Variant, VariantError> {
    match part.find('[') {
        None if part.contains(']') => Err(Err("unbalanced ']'")),
        None => Ok(Variant {
            text: part.to_string(),
            languages: None,
        }),
        Some(open) => {
            let (text, languages) = part.split_at(open);
            let Some(languages) = languages[1..].strip_suffix(']') else {
                return Err(Err("language list must close the variant"));
            };
            if text.contains(']') || languages.contains(['[', ']']) {
                return Err(Err("unbalanced language brackets"));
            }
            let languages = LanguageSet::parse(languages).map_err(VariantError::Ok)?;
            Ok(Variant {
                text: text.to_string(),
                languages: Some(languages),
            })
        }
    }
}

/// Iterator over the variants of a [`ReplacementExpr`].
#[derive(Debug, Clone)]
pub enum Variants<'a> {
    /// Remaining literal text
    Literal(Option<&'a str>),
    /// Remaining alternatives
    Alternation(std::slice::Iter<'a, Variant>),
}

impl<'a> Iterator for Variants<'a> {
    type Item = (&'a str, LanguageSet);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Variants::Literal(text) => text.take().map(|text| (text, LanguageSet::ANY)),
            Variants::Alternation(iter) => iter
                .next()
                .map(|variant| (variant.text.as_str(), variant.restriction())),
        }
    }
}

impl fmt::Display for ReplacementExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementExpr::Literal(text) => f.write_str(text),
            ReplacementExpr::Alternation(variants) if variants.len() == 1 => {
                write_variant(f, &variants[0])
            }
            ReplacementExpr::Alternation(variants) => {
                f.write_str("(")?;
                for (i, variant) in variants.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write_variant(f, variant)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_variant(f: &mut fmt::Formatter<'_>, variant: &Variant) -> fmt::Result {
    f.write_str(&variant.text)?;
    if let Some(languages) = variant.languages {
        write!(f, "[{}]", languages)?;
    }
    Ok(())
}

impl FromStr for ReplacementExpr {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReplacementExpr::parse(s)
    }
}
