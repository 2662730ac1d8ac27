//! Ordered rule tables.

use std::fmt;

use super::error::RuleError;
use super::types::{Rule, RuleRecord};

/// The three table families of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Main rules, applied to the raw name.
    Main,
    /// Approximate final rules.
    Approx,
    /// Exact final rules.
    Exact,
}

impl TableKind {
    /// Key of this family in rule data.
    pub const fn key(self) -> &'static str {
        match self {
            TableKind::Main => "rules",
            TableKind::Approx => "approx",
            TableKind::Exact => "exact",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An ordered list of compiled rules. The first applicable rule at a
/// position wins, so order is significant.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    name: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile `records` in order.
    ///
    /// # Errors
    ///
    /// Returns the first compilation error, tagged with `name`.
    pub fn compile(name: impl Into<String>, records: &[RuleRecord]) -> Result<Self, RuleError> {
        let name = name.into();
        let rules = records
            .iter()
            .map(|record| Rule::compile(record, &name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleTable { name, rules })
    }

    /// Diagnostic name, e.g. `gen/approx/german`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in evaluation order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table has no rules. An empty final table leaves its
    /// input unchanged.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_preserves_order() {
        let records = vec![
            RuleRecord::new("sch", "", "", "S"),
            RuleRecord::new("s", "", "", "s"),
        ];
        let table = RuleTable::compile("gen/rules/german", &records).unwrap();
        let patterns: Vec<_> = table.rules().iter().map(Rule::pattern).collect();
        assert_eq!(patterns, vec!["sch", "s"]);
        assert_eq!(table.name(), "gen/rules/german");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_error_names_table() {
        let records = vec![RuleRecord::new("a", "(", "", "a")];
        match RuleTable::compile("gen/rules/any", &records) {
            Err(RuleError::InvalidPattern { table, .. }) => assert_eq!(table, "gen/rules/any"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_table() {
        let table = RuleTable::compile("sep/exact/french", &[]).unwrap();
        assert!(table.is_empty());
    }
}
