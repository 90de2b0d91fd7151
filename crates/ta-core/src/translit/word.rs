use tracing::trace;

use crate::phoneme::{PhonemeTable, VowelForms};
use crate::unicode::PULLI;

/// Convert one lowercase romanized token to Tamil script.
///
/// Single left-to-right scan. At each position the longest consonant key is
/// tried first, then the longest vowel key; anything else passes through
/// unchanged. Total over all input.
pub fn transliterate_word(table: &PhonemeTable, word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() * 3);
    // Vowel sound emitted last, if the previous phoneme was a vowel.
    let mut prev_vowel: Option<&VowelForms> = None;
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];

        if let Some((len, glyph)) = table.consonant_at(rest) {
            out.push_str(glyph);
            i += len;
            match table.vowel_at(&chars[i..]) {
                Some((vowel_len, vowel)) => {
                    out.push_str(&vowel.diacritic);
                    i += vowel_len;
                    prev_vowel = Some(vowel);
                }
                None => {
                    out.push(PULLI);
                    prev_vowel = None;
                }
            }
            continue;
        }

        if let Some((len, vowel)) = table.vowel_at(rest) {
            match prev_vowel {
                // Hiatus: no bare vowel letter mid-word, glide into the sign.
                Some(previous) => {
                    out.push_str(table.glide_after(previous));
                    out.push_str(&vowel.diacritic);
                }
                None => out.push_str(&vowel.standalone),
            }
            i += len;
            prev_vowel = Some(vowel);
            continue;
        }

        out.push(chars[i]);
        i += 1;
        prev_vowel = None;
    }

    trace!(word, output = out.as_str(), "transliterate_word");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tr(word: &str) -> String {
        transliterate_word(PhonemeTable::global(), word)
    }

    #[test]
    fn test_empty() {
        assert_eq!(tr(""), "");
    }

    #[test]
    fn test_consonant_vowel() {
        // k+a, d+ai
        assert_eq!(tr("kadai"), "கடை");
        assert_eq!(tr("ka"), "க");
        assert_eq!(tr("kaa"), "கா");
        assert_eq!(tr("koa"), "கோ");
    }

    #[test]
    fn test_dead_consonant_gets_pulli() {
        assert_eq!(tr("k"), "க்");
        assert_eq!(tr("avan"), "அவன்");
        assert_eq!(tr("amma"), "அம்ம");
    }

    #[test]
    fn test_vowel_at_start_is_standalone() {
        assert_eq!(tr("a"), "அ");
        assert_eq!(tr("aa"), "ஆ");
        assert_eq!(tr("ai"), "ஐ");
        assert_eq!(tr("oo"), "ஊ");
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(tr("thambi"), "தம்பி");
        assert_eq!(tr("pazham"), "பழம்");
        assert_eq!(tr("kalh"), "கள்");
        assert_eq!(tr("nja"), "ஞ");
    }

    #[test]
    fn test_dental_nasal_before_th() {
        assert_eq!(tr("panthu"), "பந்து");
        assert_eq!(tr("sandhai"), "சந்தை");
        // plain "n" elsewhere stays alveolar
        assert_eq!(tr("vanakkam"), "வனக்கம்");
    }

    #[test]
    fn test_hiatus_front_glide() {
        // i then a: palatal glide
        assert_eq!(tr("kia"), "கிய");
        assert_eq!(tr("eea"), "ஈய");
    }

    #[test]
    fn test_hiatus_back_glide() {
        // u then a: labial glide
        assert_eq!(tr("pua"), "புவ");
        assert_eq!(tr("auaa"), "ஔவா");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(tr("123"), "123");
        assert_eq!(tr("k-a"), "க்-அ");
        assert_eq!(tr("வணக்கம்"), "வணக்கம்");
    }

    #[test]
    fn test_passthrough_resets_vowel_state() {
        // "a" after "-" is a fresh syllable, not a hiatus
        assert_eq!(tr("ka-a"), "க-அ");
    }

    #[test]
    fn test_uppercase_is_passthrough() {
        // Callers lowercase first; the state machine itself is case-sensitive.
        assert_eq!(tr("K"), "K");
    }
}
