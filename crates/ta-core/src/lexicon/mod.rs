//! Dictionary entries and lexicon search.
//!
//! The engine never owns the dictionary: callers pass an immutable snapshot
//! (`&[LexiconEntry]`) into each operation and get fresh results back.

mod collation;
mod distance;
mod search;

pub use collation::{collation_key, compare, CollationKey};
pub use distance::levenshtein;
pub use search::{LexiconIndex, SearchMode, SearchResults};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

/// Which side of an entry an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Tamil,
    English,
}

impl Script {
    /// The opposite side of an entry.
    pub fn other(self) -> Script {
        match self {
            Script::Tamil => Script::English,
            Script::English => Script::Tamil,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Script::Tamil => "tamil",
            Script::English => "english",
        })
    }
}

impl FromStr for Script {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tamil" | "ta" => Ok(Script::Tamil),
            "english" | "en" => Ok(Script::English),
            _ => Err(LexiconError::UnknownScript(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    pub tamil: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectVariation {
    pub dialect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub example: UsageExample,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyStep {
    pub era: String,
    pub language: String,
    pub note: String,
}

/// One dictionary entry.
///
/// Headwords may pack several synonyms separated by `/` ("Love / Affection");
/// each segment is matched on its own. The Tamil headword is the identity key
/// within a snapshot. Deep-dive fields are carried for the caller and never
/// read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    pub tamil_word: String,
    pub english_word: String,
    #[serde(default)]
    pub tamil_meaning: String,
    #[serde(default)]
    pub english_meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<UsageExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<DialectVariation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etymology: Vec<EtymologyStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom_explanation: Option<String>,
}

impl LexiconEntry {
    pub fn new(
        tamil_word: impl Into<String>,
        english_word: impl Into<String>,
        tamil_meaning: impl Into<String>,
        english_meaning: impl Into<String>,
    ) -> Self {
        Self {
            tamil_word: tamil_word.into(),
            english_word: english_word.into(),
            tamil_meaning: tamil_meaning.into(),
            english_meaning: english_meaning.into(),
            example: None,
            origin: None,
            variations: Vec::new(),
            etymology: Vec::new(),
            idiom_explanation: None,
        }
    }

    pub fn headword(&self, script: Script) -> &str {
        match script {
            Script::Tamil => &self.tamil_word,
            Script::English => &self.english_word,
        }
    }

    /// Trimmed, non-empty `/`-separated segments of the headword.
    pub fn phrases(&self, script: Script) -> impl Iterator<Item = &str> {
        self.headword(script)
            .split('/')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("unknown script: {0} (expected tamil or english)")]
    UnknownScript(String),
}

#[derive(Deserialize)]
struct LexiconFile {
    entries: Vec<LexiconEntry>,
}

/// Parse a lexicon from TOML (`[[entries]]` tables, camelCase keys).
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Vec<LexiconEntry>, LexiconError> {
    let file: LexiconFile =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;
    Ok(file.entries)
}

/// A fresh copy of the seed lexicon embedded in the crate.
pub fn default_lexicon() -> Vec<LexiconEntry> {
    parse_lexicon_toml(DEFAULT_LEXICON_TOML).expect("lexicon TOML must be valid")
}
