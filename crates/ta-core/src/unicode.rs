//! Character-level Unicode classification for Tamil and mixed-script text.

use unic_ucd_category::GeneralCategory;

/// Implicit-vowel suppressor (pulli / virama), U+0BCD.
pub const PULLI: char = '\u{0BCD}';

/// Check the Tamil block (U+0B80..U+0BFF).
pub fn is_tamil(c: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whether `c` is part of a word for boundary purposes.
///
/// Wider than a plain letter test: combining marks count as well as letters.
/// Tamil vowel signs and the pulli are marks (Mc/Mn) and belong to the
/// consonant before them, so a phrase ending on a bare consonant never
/// matches the first half of a syllable.
pub fn is_word_char(c: char) -> bool {
    let category = GeneralCategory::of(c);
    category.is_letter() || category.is_mark()
}

/// Lowercase a single char, keeping it unchanged when its lowercase form
/// expands to several chars (e.g. U+0130). The result always has a
/// one-to-one char correspondence with the input.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tamil() {
        assert!(is_tamil('க'));
        assert!(is_tamil(PULLI));
        assert!(is_tamil('ௌ'));
        assert!(!is_tamil('a'));
        assert!(!is_tamil('あ'));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('க'));
        // vowel sign and pulli bind to the preceding consonant
        assert!(is_word_char('ா'));
        assert!(is_word_char(PULLI));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('7'));
        assert!(!is_word_char('\n'));
    }

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('a'), 'a');
        assert_eq!(fold_char('É'), 'é');
        assert_eq!(fold_char('க'), 'க');
        // İ lowercases to two chars; left alone
        assert_eq!(fold_char('\u{0130}'), '\u{0130}');
    }
}
