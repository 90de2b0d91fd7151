//! Longest-match phrase spotting.
//!
//! Partitions a text into plain runs and spans that match a lexicon
//! headword, so a presentation layer can turn matches into clickable
//! annotations. Longer phrases win over shorter ones at the same position,
//! and a match must not touch a letter on either side.


use std::ops::Range;

use tracing::{debug, debug_span};

use crate::lexicon::{LexiconEntry, Script};
use crate::trie::KeyTrie;
use crate::unicode::{fold_char, is_word_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind<'a> {
    Plain,
    Matched(&'a LexiconEntry),
}

/// Half-open byte range over the highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan<'a> {
    pub range: Range<usize>,
    pub kind: SpanKind<'a>,
}

impl<'a> MatchSpan<'a> {
    fn plain(range: Range<usize>) -> Self {
        Self {
            range,
            kind: SpanKind::Plain,
        }
    }

    fn matched(range: Range<usize>, entry: &'a LexiconEntry) -> Self {
        Self {
            range,
            kind: SpanKind::Matched(entry),
        }
    }

    /// The slice of `source` this span covers. `source` must be the text the
    /// span was produced from.
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.range.clone()]
    }

    pub fn entry(&self) -> Option<&'a LexiconEntry> {
        match self.kind {
            SpanKind::Matched(entry) => Some(entry),
            SpanKind::Plain => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.kind, SpanKind::Matched(_))
    }
}

/// Candidate phrases of one lexicon snapshot, ready to scan many texts.
///
/// English phrases are stored case-folded and compared against folded text;
/// Tamil phrases are compared code point for code point.
pub struct Highlighter<'a> {
    phrases: KeyTrie<&'a LexiconEntry>,
    script: Script,
}

impl<'a> Highlighter<'a> {
    pub fn new(entries: &'a [LexiconEntry], script: Script) -> Self {
        let _span = debug_span!("build_highlighter", entries = entries.len(), %script).entered();
        let mut phrases = KeyTrie::new();
        for entry in entries {
            for phrase in entry.phrases(script) {
                // Identical phrases keep the earliest entry.
                phrases.insert(phrase.chars().map(|c| fold(c, script)), entry);
            }
        }
        debug!(phrases = phrases.len());
        Self { phrases, script }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Partition `text` into spans, left to right, with adjacent plain
    /// characters coalesced.
    pub fn highlight(&self, text: &str) -> Vec<MatchSpan<'a>> {
        let _span = debug_span!("highlight", len = text.len()).entered();
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let folded: Vec<char> = chars.iter().map(|&(_, c)| fold(c, self.script)).collect();

        let mut spans = Vec::new();
        let mut plain_start: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let start = chars[i].0;
            match self.match_at(&chars, &folded, i) {
                Some((len, entry)) => {
                    if let Some(from) = plain_start.take() {
                        spans.push(MatchSpan::plain(from..start));
                    }
                    let end = chars.get(i + len).map_or(text.len(), |&(b, _)| b);
                    spans.push(MatchSpan::matched(start..end, entry));
                    i += len;
                }
                None => {
                    plain_start.get_or_insert(start);
                    i += 1;
                }
            }
        }
        if let Some(from) = plain_start {
            spans.push(MatchSpan::plain(from..text.len()));
        }

        debug!(
            spans = spans.len(),
            matched = spans.iter().filter(|s| s.is_matched()).count()
        );
        spans
    }

    /// Longest phrase starting at char `i` whose both ends sit on a boundary.
    fn match_at(
        &self,
        chars: &[(usize, char)],
        folded: &[char],
        i: usize,
    ) -> Option<(usize, &'a LexiconEntry)> {
        if i > 0 && is_word_char(chars[i - 1].1) {
            return None;
        }
        self.phrases
            .prefixes(folded[i..].iter().copied())
            .into_iter()
            .find(|&(len, _)| {
                chars
                    .get(i + len)
                    .map_or(true, |&(_, next)| !is_word_char(next))
            })
            .map(|(len, &entry)| (len, entry))
    }
}

fn fold(c: char, script: Script) -> char {
    match script {
        Script::English => fold_char(c),
        Script::Tamil => c,
    }
}

/// One-shot form of [`Highlighter::highlight`].
pub fn highlight<'a>(text: &str, entries: &'a [LexiconEntry], script: Script) -> Vec<MatchSpan<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    Highlighter::new(entries, script).highlight(text)
}
