//! Name modes and match types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The naming tradition a name is encoded under.
///
/// Each mode has its own rule data (languages, discardable particles and
/// rule tables) and its own policy for multi-word names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Generic names of any origin.
    #[default]
    #[serde(rename = "gen")]
    Generic,
    /// Ashkenazic Jewish names.
    #[serde(rename = "ash")]
    Ashkenazic,
    /// Sephardic Jewish names.
    #[serde(rename = "sep")]
    Sephardic,
}

/// How a mode treats the words of a multi-word name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPolicy {
    /// A leading discardable particle forks the name into "without particle"
    /// and "particle glued to the rest".
    ForkPrefixes,
    /// A discardable first word is dropped.
    DropLeadingWord,
    /// Text up to the last apostrophe of each word is dropped, then
    /// discardable words are removed.
    StripApostrophes,
}

impl Mode {
    /// Every mode.
    pub const ALL: [Mode; 3] = [Mode::Generic, Mode::Ashkenazic, Mode::Sephardic];

    /// Short tag used in rule-data file names and arguments.
    pub const fn tag(self) -> &'static str {
        match self {
            Mode::Generic => "gen",
            Mode::Ashkenazic => "ash",
            Mode::Sephardic => "sep",
        }
    }

    /// Parse a tag. Unrecognized tags select [`Mode::Generic`].
    pub fn from_tag(tag: &str) -> Mode {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ash" => Mode::Ashkenazic,
            "sep" => Mode::Sephardic,
            _ => Mode::Generic,
        }
    }

    /// The multi-word policy of this mode.
    pub const fn word_policy(self) -> WordPolicy {
        match self {
            Mode::Generic => WordPolicy::ForkPrefixes,
            Mode::Ashkenazic => WordPolicy::DropLeadingWord,
            Mode::Sephardic => WordPolicy::StripApostrophes,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for Mode {
    fn from(tag: &str) -> Self {
        Mode::from_tag(tag)
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from_tag(s))
    }
}

/// Which family of final rules to apply.
///
/// `Approx` merges more sounds and matches more loosely than `Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Exact final rules.
    Exact,
    /// Approximate final rules.
    #[default]
    Approx,
}

impl MatchType {
    /// Short tag.
    pub const fn tag(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Approx => "approx",
        }
    }

    /// Parse a tag. Anything other than `exact` selects [`MatchType::Approx`].
    pub fn from_tag(tag: &str) -> MatchType {
        if tag.trim().eq_ignore_ascii_case("exact") {
            MatchType::Exact
        } else {
            MatchType::Approx
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MatchType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MatchType::from_tag(s))
    }
}
