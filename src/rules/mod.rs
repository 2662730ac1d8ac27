//! Rule data: loading, validation and table selection.
//!
//! Rule data is one document per [`Mode`]. Each document lists the mode's
//! languages, its discardable name particles, the ordered language-detection
//! rules, and three families of rewrite tables:
//!
//! - `rules`: main tables keyed by `any` and by each language;
//! - `approx` / `exact`: final tables keyed by `common`, `any` and each
//!   language.
//!
//! ```json
//! {
//!   "mode": "sep",
//!   "languages": ["french", "hebrew", "italian", "portuguese", "spanish"],
//!   "discards": ["de", "van"],
//!   "language_rules": [["ou", "french", true]],
//!   "rules": { "any": [["ch", "", "", "(tS|S)"]], "french": [] },
//!   "approx": { "common": [], "any": [] },
//!   "exact": { "common": [], "any": [] }
//! }
//! ```
//!
//! Loading compiles every pattern and replacement and checks that every
//! table [`ModeRules::select`] may return exists, so selection and encoding
//! cannot fail afterwards.

mod bundled;
mod error;
mod replacement;
mod table;
mod types;

pub use bundled::{ASHKENAZIC_JSON, GENERIC_JSON, SEPHARDIC_JSON};
pub use error::{Result, RuleError};
pub use replacement::{ReplacementExpr, Variant, Variants};
pub use table::{RuleTable, TableKind};
pub use types::{LanguageRuleRecord, Operator, Restriction, Rule, RuleRecord};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};

use crate::language::{Language, LanguageClassifier, LanguageRule, LanguageSet};
use crate::mode::{MatchType, Mode};

/// Table key for language-independent final rules.
pub const COMMON_KEY: &str = "common";

// ============================================================================
// Persisted form
// ============================================================================

/// Rule data of one mode, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeData {
    /// Mode this document describes
    pub mode: Mode,
    /// Free-form version tag of the data
    #[serde(default)]
    pub version: String,
    /// Languages the mode distinguishes
    pub languages: Vec<String>,
    /// Discardable name particles
    #[serde(default)]
    pub discards: Vec<String>,
    /// Ordered language-detection rules
    #[serde(default)]
    pub language_rules: Vec<LanguageRuleRecord>,
    /// Main tables
    pub rules: BTreeMap<String, Vec<RuleRecord>>,
    /// Approximate final tables
    pub approx: BTreeMap<String, Vec<RuleRecord>>,
    /// Exact final tables
    pub exact: BTreeMap<String, Vec<RuleRecord>>,
}

/// Rule data of every mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetData {
    /// One entry per mode
    pub modes: Vec<ModeData>,
}

// ============================================================================
// Compiled form
// ============================================================================

/// Tables of one family keyed by language, with the `any` fallback.
#[derive(Debug, Clone)]
pub struct LanguageTables {
    any: RuleTable,
    by_language: FxHashMap<Language, RuleTable>,
}

impl LanguageTables {
    /// The table for `languages`: the language's own table for a singleton
    /// set of the mode, the `any` table otherwise.
    pub fn get(&self, languages: LanguageSet) -> &RuleTable {
        languages
            .single()
            .and_then(|language| self.by_language.get(&language))
            .unwrap_or(&self.any)
    }

    /// The `any` table.
    pub fn any(&self) -> &RuleTable {
        &self.any
    }

    fn rule_count(&self) -> usize {
        self.any.len() + self.by_language.values().map(RuleTable::len).sum::<usize>()
    }
}

/// A family of final rules.
#[derive(Debug, Clone)]
pub struct FinalTables {
    common: RuleTable,
    languages: LanguageTables,
}

impl FinalTables {
    /// Language-independent final rules.
    pub fn common(&self) -> &RuleTable {
        &self.common
    }

    /// Language-specific final rules.
    pub fn languages(&self) -> &LanguageTables {
        &self.languages
    }
}

/// The three tables one encoding uses.
#[derive(Debug, Clone, Copy)]
pub struct SelectedRules<'a> {
    /// Main rules
    pub main: &'a RuleTable,
    /// Common final rules (first final pass)
    pub common: &'a RuleTable,
    /// Language final rules (second final pass)
    pub language: &'a RuleTable,
}

/// Compiled, validated rules of one mode.
#[derive(Debug, Clone)]
pub struct ModeRules {
    mode: Mode,
    version: String,
    languages: LanguageSet,
    discards: Vec<String>,
    classifier: LanguageClassifier,
    main: LanguageTables,
    approx: FinalTables,
    exact: FinalTables,
    source: ModeData,
}

impl ModeRules {
    /// Compile and validate one mode.
    ///
    /// # Errors
    ///
    /// Any [`RuleError`] describing the first problem found.
    pub fn compile(data: ModeData) -> Result<ModeRules> {
        let mode = data.mode;
        let mut languages = LanguageSet::EMPTY;
        for name in &data.languages {
            let language: Language = name.parse()?;
            if language != Language::Any {
                languages = languages.union(language.into());
            }
        }

        let classifier = LanguageClassifier::new(
            data.language_rules
                .iter()
                .map(|LanguageRuleRecord(pattern, names, accept)| {
                    LanguageRule::new(pattern, LanguageSet::parse(names)?, *accept)
                })
                .collect::<Result<Vec<_>>>()?,
            languages,
        );

        let main = compile_language_tables(mode, languages, TableKind::Main, &data.rules, false)?;
        let approx = compile_final_tables(mode, languages, TableKind::Approx, &data.approx)?;
        let exact = compile_final_tables(mode, languages, TableKind::Exact, &data.exact)?;

        let mut discards = data.discards.clone();
        discards.sort_by_key(|discard| std::cmp::Reverse(discard.chars().count()));

        let compiled = ModeRules {
            mode,
            version: data.version.clone(),
            languages,
            discards,
            classifier,
            main,
            approx,
            exact,
            source: data,
        };
        debug!(
            mode = %mode,
            languages = compiled.languages.iter().count(),
            language_rules = compiled.classifier.rules().len(),
            main_rules = compiled.main.rule_count(),
            approx_rules = compiled.approx.common.len() + compiled.approx.languages.rule_count(),
            exact_rules = compiled.exact.common.len() + compiled.exact.languages.rule_count(),
            "compiled mode rules"
        );
        Ok(compiled)
    }

    /// The mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Version tag of the source data.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every language of the mode; classification starts here.
    pub fn languages(&self) -> LanguageSet {
        self.languages
    }

    /// Discardable particles, longest first.
    pub fn discards(&self) -> &[String] {
        &self.discards
    }

    /// True when `word` is one of the discardable particles.
    pub fn is_discard(&self, word: &str) -> bool {
        self.discards.iter().any(|discard| discard == word)
    }

    /// The language classifier.
    pub fn classifier(&self) -> &LanguageClassifier {
        &self.classifier
    }

    /// Infer the languages of `word`.
    pub fn classify(&self, word: &str) -> LanguageSet {
        self.classifier.classify(word)
    }

    /// Final tables of `match_type`.
    pub fn final_tables(&self, match_type: MatchType) -> &FinalTables {
        match match_type {
            MatchType::Approx => &self.approx,
            MatchType::Exact => &self.exact,
        }
    }

    /// Pick the tables used to encode a word of `languages`.
    pub fn select(&self, match_type: MatchType, languages: LanguageSet) -> SelectedRules<'_> {
        let finals = self.final_tables(match_type);
        let selected = SelectedRules {
            main: self.main.get(languages),
            common: finals.common(),
            language: finals.languages().get(languages),
        };
        trace!(
            mode = %self.mode,
            languages = %languages,
            main = selected.main.name(),
            language = selected.language.name(),
            "selected rule tables"
        );
        selected
    }

    /// The data this mode was compiled from.
    pub fn source(&self) -> &ModeData {
        &self.source
    }
}

fn table_name(mode: Mode, kind: TableKind, key: &str) -> String {
    format!("{}/{}/{}", mode.tag(), kind.key(), key)
}

fn compile_language_tables(
    mode: Mode,
    languages: LanguageSet,
    kind: TableKind,
    tables: &BTreeMap<String, Vec<RuleRecord>>,
    allow_common: bool,
) -> Result<LanguageTables> {
    let mut any = None;
    let mut by_language = FxHashMap::default();

    for (key, records) in tables {
        if allow_common && key == COMMON_KEY {
            continue;
        }
        let language: Language = key.parse()?;
        let table = RuleTable::compile(table_name(mode, kind, key), records)?;
        if language == Language::Any {
            any = Some(table);
        } else if languages.contains(language) {
            by_language.insert(language, table);
        } else {
            return Err(RuleError::UnsupportedLanguage {
                mode,
                language: key.clone(),
            });
        }
    }

    let missing = |key: &str| RuleError::MissingTable {
        mode,
        kind: kind.key(),
        key: key.to_string(),
    };
    if let Some(language) = languages.iter().find(|l| !by_language.contains_key(l)) {
        return Err(missing(language.name()));
    }
    let any = any.ok_or_else(|| missing(Language::Any.name()))?;

    Ok(LanguageTables { any, by_language })
}

fn compile_final_tables(
    mode: Mode,
    languages: LanguageSet,
    kind: TableKind,
    tables: &BTreeMap<String, Vec<RuleRecord>>,
) -> Result<FinalTables> {
    let common = tables.get(COMMON_KEY).ok_or_else(|| RuleError::MissingTable {
        mode,
        kind: kind.key(),
        key: COMMON_KEY.to_string(),
    })?;
    Ok(FinalTables {
        common: RuleTable::compile(table_name(mode, kind, COMMON_KEY), common)?,
        languages: compile_language_tables(mode, languages, kind, tables, true)?,
    })
}

/// Compiled rules for every mode. Immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct RuleSet {
    generic: ModeRules,
    ashkenazic: ModeRules,
    sephardic: ModeRules,
}

impl RuleSet {
    /// Compile and validate a complete rule set.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateMode`] or [`RuleError::MissingMode`] when the
    /// data does not hold exactly one document per mode, or the first error
    /// from compiling a mode.
    pub fn from_data(data: RuleSetData) -> Result<RuleSet> {
        let mut generic = None;
        let mut ashkenazic = None;
        let mut sephardic = None;

        for mode_data in data.modes {
            let mode = mode_data.mode;
            let slot = match mode {
                Mode::Generic => &mut generic,
                Mode::Ashkenazic => &mut ashkenazic,
                Mode::Sephardic => &mut sephardic,
            };
            if slot.is_some() {
                return Err(RuleError::DuplicateMode(mode));
            }
            *slot = Some(ModeRules::compile(mode_data)?);
        }

        let rules = RuleSet {
            generic: generic.ok_or(RuleError::MissingMode(Mode::Generic))?,
            ashkenazic: ashkenazic.ok_or(RuleError::MissingMode(Mode::Ashkenazic))?,
            sephardic: sephardic.ok_or(RuleError::MissingMode(Mode::Sephardic))?,
        };
        debug!("rule set loaded");
        Ok(rules)
    }

    /// Parse a complete rule set from a single JSON document
    /// (`{"modes": [...]}`).
    pub fn from_json_str(json: &str) -> Result<RuleSet> {
        RuleSet::from_data(serde_json::from_str(json)?)
    }

    /// Parse one JSON document per mode.
    pub fn from_mode_documents<'a, I>(documents: I) -> Result<RuleSet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let modes = documents
            .into_iter()
            .map(serde_json::from_str::<ModeData>)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        RuleSet::from_data(RuleSetData { modes })
    }

    /// Load `gen.json`, `ash.json` and `sep.json` from `dir`.
    ///
    /// # Errors
    ///
    /// [`RuleError::Io`] if a file cannot be read, otherwise as
    /// [`RuleSet::from_data`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<RuleSet> {
        let dir = dir.as_ref();
        let documents = Mode::ALL
            .iter()
            .map(|mode| std::fs::read_to_string(dir.join(format!("{}.json", mode.tag()))))
            .collect::<std::io::Result<Vec<_>>>()?;
        debug!(dir = %dir.display(), "loading rule data");
        RuleSet::from_mode_documents(documents.iter().map(String::as_str))
    }

    /// Rules of `mode`.
    pub fn mode(&self, mode: Mode) -> &ModeRules {
        match mode {
            Mode::Generic => &self.generic,
            Mode::Ashkenazic => &self.ashkenazic,
            Mode::Sephardic => &self.sephardic,
        }
    }

    /// Shorthand for `self.mode(mode).select(match_type, languages)`.
    pub fn select(&self, mode: Mode, match_type: MatchType, languages: LanguageSet) -> SelectedRules<'_> {
        self.mode(mode).select(match_type, languages)
    }

    /// The source data of every mode, for persisting.
    pub fn to_data(&self) -> RuleSetData {
        RuleSetData {
            modes: Mode::ALL
                .iter()
                .map(|&mode| self.mode(mode).source().clone())
                .collect(),
        }
    }
}
