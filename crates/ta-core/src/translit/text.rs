use tracing::debug_span;

use super::word::transliterate_word;
use crate::phoneme::PhonemeTable;

/// Single punctuation marks that separate words.
fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"')
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(&'a str),
    /// A maximal whitespace run, or one punctuation mark.
    Delimiter(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Word(s) | Segment::Delimiter(s) => s,
        }
    }
}

/// Iterator over the words and delimiters of a text, in order.
/// Concatenating every segment reproduces the input.
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into [`Segment`]s, keeping the delimiters.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;

        let len = if first.is_whitespace() {
            rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
        } else if is_punctuation(first) {
            first.len_utf8()
        } else {
            rest.find(is_delimiter).unwrap_or(rest.len())
        };

        let piece = &rest[..len];
        self.pos += len;
        Some(if is_delimiter(first) {
            Segment::Delimiter(piece)
        } else {
            Segment::Word(piece)
        })
    }
}

/// Longest exception phrase starting at `segments[0]`: words joined by
/// single ASCII spaces. Returns the number of segments consumed.
fn exception_phrase<'t>(
    table: &'t PhonemeTable,
    segments: &[Segment<'_>],
) -> Option<(usize, &'t str)> {
    let mut phrase = String::new();
    let mut best = None;
    let mut idx = 0;

    for words in 1..=table.max_exception_words() {
        if words > 1 {
            match (segments.get(idx), segments.get(idx + 1)) {
                (Some(Segment::Delimiter(" ")), Some(Segment::Word(_))) => {
                    phrase.push(' ');
                    idx += 1;
                }
                _ => break,
            }
        }
        let Some(Segment::Word(word)) = segments.get(idx) else {
            break;
        };
        phrase.push_str(&word.to_lowercase());
        idx += 1;
        if let Some(tamil) = table.exception(&phrase) {
            best = Some((idx, tamil));
        }
    }

    best
}

/// One word as [`transliterate`] treats it outside a phrase: lowercased,
/// looked up in the exception table, otherwise run through
/// [`transliterate_word`].
pub fn transliterate_segment(table: &PhonemeTable, word: &str) -> String {
    let word = word.to_lowercase();
    match table.exception(&word) {
        Some(tamil) => tamil.to_string(),
        None => transliterate_word(table, &word),
    }
}

/// Transliterate free text, preserving whitespace and punctuation exactly.
///
/// Each word is lowercased, checked against the exception table (including
/// multi-word phrases separated by single spaces) and otherwise run through
/// [`transliterate_word`]. Delimiters are copied unchanged.
pub fn transliterate(table: &PhonemeTable, text: &str) -> String {
    let _span = debug_span!("transliterate", len = text.len()).entered();
    let segments: Vec<Segment<'_>> = segments(text).collect();
    let mut out = String::with_capacity(text.len() * 3);
    let mut i = 0;

    while i < segments.len() {
        match segments[i] {
            Segment::Delimiter(d) => {
                out.push_str(d);
                i += 1;
            }
            Segment::Word(word) => {
                if let Some((consumed, tamil)) = exception_phrase(table, &segments[i..]) {
                    out.push_str(tamil);
                    i += consumed;
                } else {
                    out.push_str(&transliterate_segment(table, word));
                    i += 1;
                }
            }
        }
    }

    out
}
