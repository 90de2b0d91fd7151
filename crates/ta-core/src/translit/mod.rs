//! Romanized Tamil to Tamil script.
//!
//! [`transliterate_word`] runs the phoneme state machine over one token;
//! [`transliterate`] splits free text on whitespace and punctuation, applies
//! whole-word exceptions and falls back to the state machine.

mod text;
mod word;

#[cfg(test)]
mod tests;

pub use text::{segments, transliterate, transliterate_segment, Segment, Segments};
pub use word::transliterate_word;

use crate::phoneme::PhonemeTable;

/// [`transliterate`] with the global phoneme table.
pub fn transliterate_default(text: &str) -> String {
    transliterate(PhonemeTable::global(), text)
}

/// [`transliterate_word`] with the global phoneme table.
pub fn transliterate_word_default(word: &str) -> String {
    transliterate_word(PhonemeTable::global(), word)
}
