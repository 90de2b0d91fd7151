use ta_core::highlight::Highlighter;
use ta_core::lexicon::LexiconIndex;
use ta_core::settings::{settings, SearchSettings};
use ta_core::translit;
use ta_core::{LexiconEntry, MatchSpan, PhonemeTable, Script, SearchResults};

use super::{SearchRecord, SpanRecord};

/// Entry point for the surrounding application.
///
/// Holds only immutable configuration; every call takes the lexicon snapshot
/// it should work on, so one engine can be shared across threads.
#[derive(Clone, Copy)]
pub struct TamilEngine {
    table: &'static PhonemeTable,
    search: SearchSettings,
}

impl Default for TamilEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TamilEngine {
    /// Engine over the global phoneme table and settings.
    pub fn new() -> Self {
        Self {
            table: PhonemeTable::global(),
            search: settings().search,
        }
    }

    pub fn with_parts(table: &'static PhonemeTable, search: SearchSettings) -> Self {
        Self { table, search }
    }

    pub fn transliterate(&self, text: &str) -> String {
        translit::transliterate(self.table, text)
    }

    pub fn transliterate_word(&self, word: &str) -> String {
        translit::transliterate_word(self.table, word)
    }

    /// One free-text word: case-folded, exceptions first.
    pub fn transliterate_segment(&self, word: &str) -> String {
        translit::transliterate_segment(self.table, word)
    }

    pub fn search<'a>(
        &self,
        entries: &'a [LexiconEntry],
        query: &str,
        script: Script,
    ) -> SearchResults<'a> {
        LexiconIndex::with_settings(entries, self.search).search(query, script)
    }

    pub fn highlight<'a>(
        &self,
        text: &str,
        entries: &'a [LexiconEntry],
        script: Script,
    ) -> Vec<MatchSpan<'a>> {
        ta_core::highlight(text, entries, script)
    }

    /// [`search`](Self::search) with owned results.
    pub fn search_record(&self, entries: &[LexiconEntry], query: &str, script: Script) -> SearchRecord {
        self.search(entries, query, script).into()
    }

    /// [`highlight`](Self::highlight) with owned, serializable spans.
    pub fn highlight_records(
        &self,
        text: &str,
        entries: &[LexiconEntry],
        script: Script,
    ) -> Vec<SpanRecord> {
        if text.is_empty() {
            return Vec::new();
        }
        Highlighter::new(entries, script)
            .highlight(text)
            .iter()
            .map(|span| SpanRecord::from_span(text, span))
            .collect()
    }
}
