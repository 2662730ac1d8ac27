//! Rule data compiled into the crate.

use std::sync::{Arc, OnceLock};

use super::{RuleSet, Result};

/// Generic-mode rule document.
pub const GENERIC_JSON: &str = include_str!("data/gen.json");
/// Ashkenazic-mode rule document.
pub const ASHKENAZIC_JSON: &str = include_str!("data/ash.json");
/// Sephardic-mode rule document.
pub const SEPHARDIC_JSON: &str = include_str!("data/sep.json");

static BUNDLED: OnceLock<Arc<RuleSet>> = OnceLock::new();

impl RuleSet {
    /// Parse and validate the bundled rule data.
    ///
    /// Most callers want [`RuleSet::bundled`], which does this once per
    /// process.
    pub fn load_bundled() -> Result<RuleSet> {
        RuleSet::from_mode_documents([GENERIC_JSON, ASHKENAZIC_JSON, SEPHARDIC_JSON])
    }

    /// The bundled rule set, parsed on first use and shared afterwards.
    pub fn bundled() -> Arc<RuleSet> {
        BUNDLED
            .get_or_init(|| {
                Arc::new(RuleSet::load_bundled().expect("bundled rule data must validate"))
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageSet;
    use crate::mode::{MatchType, Mode};

    #[test]
    fn test_bundled_data_validates() {
        let rules = RuleSet::load_bundled().unwrap();
        for mode in Mode::ALL {
            assert_eq!(rules.mode(mode).mode(), mode);
            assert_eq!(rules.mode(mode).version(), "bmpm-3.15");
        }
    }

    #[test]
    fn test_every_language_selects_its_own_tables() {
        let rules = RuleSet::load_bundled().unwrap();
        for mode in Mode::ALL {
            let mode_rules = rules.mode(mode);
            let tag = mode.tag();
            for match_type in [MatchType::Approx, MatchType::Exact] {
                let kind = match_type.tag();
                for language in mode_rules.languages().iter() {
                    let selected = mode_rules.select(match_type, language.into());
                    let name = language.name();
                    assert_eq!(selected.main.name(), format!("{tag}/rules/{name}"));
                    assert_eq!(selected.common.name(), format!("{tag}/{kind}/common"));
                    assert_eq!(selected.language.name(), format!("{tag}/{kind}/{name}"));
                    assert!(!selected.main.is_empty(), "{tag}/rules/{name} is empty");
                }

                for fallback in [LanguageSet::ANY, mode_rules.languages()] {
                    let selected = mode_rules.select(match_type, fallback);
                    assert_eq!(selected.main.name(), format!("{tag}/rules/any"));
                    assert_eq!(selected.language.name(), format!("{tag}/{kind}/any"));
                }
            }
        }
    }

    #[test]
    fn test_bundled_is_shared() {
        assert!(Arc::ptr_eq(&RuleSet::bundled(), &RuleSet::bundled()));
    }
}
