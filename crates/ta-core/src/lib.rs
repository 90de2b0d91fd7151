//! Romanized-Tamil transliteration and lexical matching.
//!
//! - [`phoneme`]: romanization tables, loaded once from TOML
//! - [`translit`]: word and free-text transliteration
//! - [`lexicon`]: dictionary entries, exact/fuzzy search, collation
//! - [`highlight`]: longest-match phrase spotting inside free text

pub mod highlight;
pub mod lexicon;
pub mod phoneme;
pub mod settings;
pub mod translit;
pub(crate) mod trie;
pub mod unicode;

pub use highlight::{highlight, Highlighter, MatchSpan, SpanKind};
pub use lexicon::{LexiconEntry, LexiconIndex, Script, SearchMode, SearchResults};
pub use phoneme::PhonemeTable;
pub use translit::{transliterate, transliterate_word};
