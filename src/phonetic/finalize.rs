//! Final rule passes over the phonetic alphabet.
//!
//! The main pass leaves near-equivalent sounds distinct. Two final passes
//! merge them: first the language-independent `common` table, then the
//! table of the inferred language. Pass order matters, since the second
//! table is written against the output of the first.
//!
//! Final passes match like the main pass but never veto, and characters no
//! rule covers are copied through unchanged.

use super::application::DEFAULT_MAX_PHONEMES;
use super::matching::{can_apply_at, char_len_at};
use super::types::PhoneticString;
use crate::language::LanguageSet;
use crate::rules::RuleTable;

/// Run one final table over every alternative of `phonetic`.
///
/// Each alternative is rewritten from a fresh start tagged with `languages`;
/// the results are then restricted to the alternative's own languages, so
/// a rewrite can never widen a reading. Results with no language left are
/// dropped and duplicate texts merged. An empty table returns the input.
pub fn apply_final_pass(
    phonetic: &PhoneticString,
    rules: &RuleTable,
    languages: LanguageSet,
    max_phonemes: usize,
) -> PhoneticString {
    if rules.is_empty() {
        return phonetic.clone();
    }

    let mut result = PhoneticString::empty();
    for phoneme in phonetic {
        let text = phoneme.text.as_str();
        let mut rewritten = PhoneticString::start(languages);
        let mut pos = 0;

        while pos < text.len() {
            match rules
                .rules()
                .iter()
                .find(|rule| can_apply_at(rule, text, pos, languages))
            {
                Some(rule) => {
                    rewritten = rewritten.apply(rule.replacement(), max_phonemes);
                    pos += rule.pattern().len();
                }
                None => {
                    let len = char_len_at(text, pos);
                    rewritten.append(&text[pos..pos + len]);
                    pos += len;
                }
            }
        }

        for candidate in &rewritten {
            let narrowed = candidate.languages.restrict_to(phoneme.languages);
            if !narrowed.is_empty() {
                result.insert(candidate.text.clone(), narrowed, max_phonemes);
            }
        }
    }
    result
}

/// Run the common pass, then the language pass.
pub fn finalize(
    phonetic: &PhoneticString,
    common: &RuleTable,
    language: &RuleTable,
    languages: LanguageSet,
    max_phonemes: usize,
) -> PhoneticString {
    let merged = apply_final_pass(phonetic, common, languages, max_phonemes);
    apply_final_pass(&merged, language, languages, max_phonemes)
}

/// [`finalize`] with the default alternative cap.
pub fn finalize_default(
    phonetic: &PhoneticString,
    common: &RuleTable,
    language: &RuleTable,
    languages: LanguageSet,
) -> PhoneticString {
    finalize(phonetic, common, language, languages, DEFAULT_MAX_PHONEMES)
}
