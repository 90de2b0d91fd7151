use serde::Serialize;

use ta_core::{LexiconEntry, MatchSpan, SearchResults};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (owned value types for callers that serialize results)
// ---------------------------------------------------------------------------

/// One highlighted span with its text copied out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Tamil headword (the entry's identity key) when the span matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamil_word: Option<String>,
}

impl SpanRecord {
    pub fn from_span(source: &str, span: &MatchSpan<'_>) -> Self {
        Self {
            start: span.range.start,
            end: span.range.end,
            text: span.text(source).to_string(),
            tamil_word: span.entry().map(|e| e.tamil_word.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub is_fuzzy_search: bool,
    pub entries: Vec<LexiconEntry>,
}

impl From<SearchResults<'_>> for SearchRecord {
    fn from(results: SearchResults<'_>) -> Self {
        Self {
            is_fuzzy_search: results.is_fuzzy(),
            entries: results.entries.into_iter().cloned().collect(),
        }
    }
}
