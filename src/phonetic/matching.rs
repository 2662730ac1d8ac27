//! Rule matching at a cursor position.
//!
//! # Functions
//!
//! - [`pattern_matches_at`] - literal pattern check
//! - [`left_context_matches`] / [`right_context_matches`] - context checks
//! - [`restriction_admits`] - language restriction check
//! - [`can_apply_at`] - all of the above
//!
//! Positions are byte offsets and must lie on a character boundary; any
//! other position never matches.

use crate::language::LanguageSet;
use crate::rules::Rule;

/// Check whether `text` continues with the rule's pattern at `pos`.
#[inline]
pub fn pattern_matches_at(rule: &Rule, text: &str, pos: usize) -> bool {
    text.get(pos..)
        .is_some_and(|rest| rest.starts_with(rule.pattern()))
}

/// Check the left context against the text before `pos`.
///
/// A rule without left context always passes.
#[inline]
pub fn left_context_matches(rule: &Rule, text: &str, pos: usize) -> bool {
    match rule.left_context() {
        None => true,
        Some(context) => text.get(..pos).is_some_and(|before| context.is_match(before)),
    }
}

/// Check the right context against the text after the pattern at `pos`.
///
/// A rule without right context always passes.
#[inline]
pub fn right_context_matches(rule: &Rule, text: &str, pos: usize) -> bool {
    match rule.right_context() {
        None => true,
        Some(context) => text
            .get(pos + rule.pattern().len()..)
            .is_some_and(|after| context.is_match(after)),
    }
}

/// Check the rule's language restriction against the inferred languages.
///
/// Unrestricted rules, and every rule under the [`LanguageSet::ANY`]
/// sentinel, pass.
#[inline]
pub fn restriction_admits(rule: &Rule, languages: LanguageSet) -> bool {
    rule.restriction()
        .map_or(true, |restriction| restriction.admits(languages))
}

/// Check whether `rule` is a candidate at `pos`.
///
/// The cheap literal check runs first, then the right context, the left
/// context and the language restriction.
///
/// # Examples
///
/// ```rust,ignore
/// use libbmpm::rules::{Rule, RuleRecord};
/// use libbmpm::phonetic::can_apply_at;
///
/// let rule = Rule::compile(&RuleRecord::new("e", "", "$", "i"), "example")?;
/// assert!(can_apply_at(&rule, "rose", 3, LanguageSet::ANY));
/// assert!(!can_apply_at(&rule, "rosen", 3, LanguageSet::ANY));
/// ```
pub fn can_apply_at(rule: &Rule, text: &str, pos: usize, languages: LanguageSet) -> bool {
    pattern_matches_at(rule, text, pos)
        && right_context_matches(rule, text, pos)
        && left_context_matches(rule, text, pos)
        && restriction_admits(rule, languages)
}

/// Length in bytes of the character starting at `pos`, or 1 past the end.
#[inline]
pub(crate) fn char_len_at(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}
