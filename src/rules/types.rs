//! Rule records (the persisted form) and compiled rules.
//!
//! Records are what rule-data files contain. A rule record is an array of
//! 4 or 6 strings:
//!
//! ```text
//! [pattern, left_context, right_context, replacement]
//! [pattern, left_context, right_context, replacement, languages, "ALL" | "ANY"]
//! ```
//!
//! A language-detection record is `[pattern, languages, accept]`.
//!
//! Compiling a record anchors its contexts (`(?:left)$` and `^(?:right)`)
//! and parses its replacement once, so nothing is re-parsed while encoding.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RuleError;
use super::replacement::ReplacementExpr;
use crate::language::LanguageSet;

// ============================================================================
// Persisted records
// ============================================================================

/// A rewrite rule as stored in rule data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RuleRecord {
    /// Literal text matched at the cursor
    pub pattern: String,
    /// Regex that must match the text ending at the cursor (empty: none)
    pub left_context: String,
    /// Regex that must match the text after the pattern (empty: none)
    pub right_context: String,
    /// Replacement expression
    pub replacement: String,
    /// Optional `(languages, operator)` restriction
    pub restriction: Option<(String, String)>,
}

impl RuleRecord {
    /// Create an unrestricted record.
    pub fn new(pattern: &str, left_context: &str, right_context: &str, replacement: &str) -> Self {
        RuleRecord {
            pattern: pattern.to_string(),
            left_context: left_context.to_string(),
            right_context: right_context.to_string(),
            replacement: replacement.to_string(),
            restriction: None,
        }
    }

    /// Attach a language restriction.
    pub fn restricted(mut self, languages: &str, operator: Operator) -> Self {
        self.restriction = Some((languages.to_string(), operator.to_string()));
        self
    }
}

impl TryFrom<Vec<String>> for RuleRecord {
    type Error = RuleError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        let arity = fields.len();
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        match arity {
            4 | 6 => {
                let pattern = next();
                let left_context = next();
                let right_context = next();
                let replacement = next();
                let restriction = (arity == 6).then(|| (next(), next()));
                Ok(RuleRecord {
                    pattern,
                    left_context,
                    right_context,
                    replacement,
                    restriction,
                })
            }
            other => Err(RuleError::InvalidArity(other)),
        }
    }
}

impl From<RuleRecord> for Vec<String> {
    fn from(record: RuleRecord) -> Self {
        let mut fields = vec![
            record.pattern,
            record.left_context,
            record.right_context,
            record.replacement,
        ];
        if let Some((languages, operator)) = record.restriction {
            fields.push(languages);
            fields.push(operator);
        }
        fields
    }
}

/// A language-detection rule as stored in rule data:
/// `[pattern, languages, accept]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRuleRecord(pub String, pub String, pub bool);

// ============================================================================
// Compiled rules
// ============================================================================

/// How a rule restriction is compared with the inferred languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Every restriction language must be inferred.
    #[serde(rename = "ALL")]
    All,
    /// At least one restriction language must be inferred.
    #[serde(rename = "ANY")]
    Any,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::All => "ALL",
            Operator::Any => "ANY",
        })
    }
}

impl FromStr for Operator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ALL" => Ok(Operator::All),
            "ANY" => Ok(Operator::Any),
            other => Err(RuleError::InvalidOperator(other.to_string())),
        }
    }
}

/// A language restriction attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restriction {
    /// Languages the rule is tied to
    pub languages: LanguageSet,
    /// Comparison operator
    pub operator: Operator,
}

impl Restriction {
    /// Whether a rule with this restriction may fire for `inferred`.
    ///
    /// The [`LanguageSet::ANY`] sentinel admits every rule.
    pub fn admits(&self, inferred: LanguageSet) -> bool {
        if inferred.is_any() {
            return true;
        }
        match self.operator {
            Operator::All => inferred.is_superset_of(self.languages),
            Operator::Any => inferred.intersects(self.languages),
        }
    }
}

/// A compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    left_context: Option<Regex>,
    right_context: Option<Regex>,
    replacement: ReplacementExpr,
    restriction: Option<Restriction>,
}

impl Rule {
    /// Compile a record. `table` names the table for error messages.
    ///
    /// # Errors
    ///
    /// Fails on an empty pattern, an invalid context regex, a malformed
    /// replacement or a malformed restriction.
    pub fn compile(record: &RuleRecord, table: &str) -> Result<Rule, RuleError> {
        if record.pattern.is_empty() {
            return Err(RuleError::EmptyPattern(table.to_string()));
        }
        let left_context = compile_context(&record.left_context, table, |c| format!("(?:{c})$"))?;
        let right_context = compile_context(&record.right_context, table, |c| format!("^(?:{c})"))?;
        let replacement = ReplacementExpr::parse(&record.replacement)?;
        let restriction = record
            .restriction
            .as_ref()
            .map(|(languages, operator)| -> Result<Restriction, RuleError> {
                Ok(Restriction {
                    languages: LanguageSet::parse(languages)?,
                    operator: operator.parse()?,
                })
            })
            .transpose()?;

        Ok(Rule {
            pattern: record.pattern.clone(),
            left_context,
            right_context,
            replacement,
            restriction,
        })
    }

    /// Literal text matched at the cursor.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Anchored left context, if any.
    #[inline]
    pub fn left_context(&self) -> Option<&Regex> {
        self.left_context.as_ref()
    }

    /// Anchored right context, if any.
    #[inline]
    pub fn right_context(&self) -> Option<&Regex> {
        self.right_context.as_ref()
    }

    /// Parsed replacement.
    #[inline]
    pub fn replacement(&self) -> &ReplacementExpr {
        &self.replacement
    }

    /// Language restriction, if any.
    #[inline]
    pub fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }
}

fn compile_context(
    context: &str,
    table: &str,
    anchor: impl Fn(&str) -> String,
) -> Result<Option<Regex>, RuleError> {
    if context.is_empty() {
        return Ok(None);
    }
    Regex::new(&anchor(context))
        .map(Some)
        .map_err(|source| RuleError::InvalidPattern {
            table: table.to_string(),
            pattern: context.to_string(),
            source: Box::new(source),
        })
}
