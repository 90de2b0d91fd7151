use proptest::prelude::*;

use super::*;
use crate::phoneme::PhonemeTable;
use crate::unicode::is_latin;

fn tr(text: &str) -> String {
    transliterate(PhonemeTable::global(), text)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[test]
fn test_exception_words() {
    assert_eq!(tr("vanakkam"), "வணக்கம்");
    assert_eq!(tr("amma"), "அம்மா");
    assert_eq!(tr("nanri"), "நன்றி");
    assert_eq!(tr("tamil"), "தமிழ்");
}

#[test]
fn test_exception_is_case_insensitive() {
    assert_eq!(tr("Vanakkam"), "வணக்கம்");
    assert_eq!(tr("AMMA"), "அம்மா");
}

#[test]
fn test_segment_matches_text_output() {
    let table = PhonemeTable::global();
    assert_eq!(transliterate_segment(table, "Vanakkam"), "வணக்கம்");
    assert_eq!(transliterate_segment(table, "amma"), "அம்மா");
    assert_eq!(transliterate_segment(table, "Kadai"), "கடை");
    let words: Vec<String> = segments("Vanakkam amma")
        .filter_map(|seg| match seg {
            Segment::Word(w) => Some(transliterate_segment(table, w)),
            Segment::Delimiter(_) => None,
        })
        .collect();
    assert_eq!(words.join(" "), tr("Vanakkam amma"));
}

#[test]
fn test_synthesized_word() {
    assert_eq!(tr("kadai"), "கடை");
    assert_eq!(tr("Kadai"), "கடை");
}

#[test]
fn test_sentence() {
    assert_eq!(tr("vanakkam, amma!"), "வணக்கம், அம்மா!");
    assert_eq!(tr("naan kadai"), "நான் கடை");
}

#[test]
fn test_phrase_exception() {
    assert_eq!(tr("romba nanri"), "ரொம்ப நன்றி");
    assert_eq!(tr("epadi irukinga?"), "எப்படி இருக்கீங்க?");
    assert_eq!(tr("Epdi Irukinga"), "எப்படி இருக்கீங்க");
}

#[test]
fn test_phrase_needs_single_space() {
    // Two spaces break the phrase; each word is handled on its own.
    assert_eq!(
        tr("epadi  irukinga"),
        format!("{}  {}", tr("epadi"), tr("irukinga"))
    );
    assert_ne!(tr("epadi  irukinga"), "எப்படி  இருக்கீங்க");
}

#[test]
fn test_phrase_prefers_longest() {
    // "nanri" alone is an exception too, but the two-word phrase wins
    // only when it starts at "romba"; on its own "nanri" still maps.
    assert_eq!(tr("nanri romba"), format!("நன்றி {}", tr("romba")));
}

#[test]
fn test_whitespace_preserved() {
    assert_eq!(tr("amma\n\nappa"), "அம்மா\n\nஅப்பா");
    assert_eq!(tr("  amma\t"), "  அம்மா\t");
}

#[test]
fn test_empty_and_delimiters_only() {
    assert_eq!(tr(""), "");
    assert_eq!(tr(" .,!?;:\" "), " .,!?;:\" ");
}

#[test]
fn test_tamil_input_unchanged() {
    assert_eq!(tr("வணக்கம் நண்பரே"), "வணக்கம் நண்பரே");
}

#[test]
fn test_segments() {
    let segs: Vec<Segment> = segments("hi,  there!").collect();
    assert_eq!(
        segs,
        vec![
            Segment::Word("hi"),
            Segment::Delimiter(","),
            Segment::Delimiter("  "),
            Segment::Word("there"),
            Segment::Delimiter("!"),
        ]
    );
}

#[test]
fn test_segments_punctuation_not_merged() {
    let segs: Vec<&str> = segments("..").map(|s| s.as_str()).collect();
    assert_eq!(segs, vec![".", "."]);
}

#[test]
fn test_default_wrappers() {
    assert_eq!(transliterate_default("amma"), "அம்மா");
    assert_eq!(transliterate_word_default("amma"), "அம்ம");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_phoneme_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "k", "g", "ng", "c", "s", "ch", "j", "nj", "t", "d", "th", "dh", "n", "nh", "l", "lh",
        "r", "rh", "p", "b", "f", "m", "y", "v", "w", "zh", "sh", "h", "a", "aa", "i", "ee",
        "u", "oo", "e", "ae", "ai", "o", "oa", "au",
    ])
}

fn arb_token() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_phoneme_key(), 0..12).prop_map(|keys| keys.concat())
}

fn delimiter_positions(s: &str) -> Vec<String> {
    segments(s)
        .filter_map(|seg| match seg {
            Segment::Delimiter(d) => Some(d.to_string()),
            Segment::Word(_) => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_no_latin_for_phoneme_tokens(token in arb_token()) {
        let out = transliterate_word(PhonemeTable::global(), &token);
        prop_assert!(!out.chars().any(is_latin), "{token} -> {out}");
    }

    #[test]
    fn prop_tamil_output_is_fixed_point(token in arb_token()) {
        let once = transliterate_word(PhonemeTable::global(), &token);
        let twice = transliterate_word(PhonemeTable::global(), &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_delimiters_preserved(
        words in prop::collection::vec(arb_token(), 1..6),
        delims in prop::collection::vec(
            prop::sample::select(vec![" ", "  ", "\n", ", ", ".", "!\t", "\"", ": "]),
            1..6,
        ),
    ) {
        let mut input = String::new();
        for (i, w) in words.iter().enumerate() {
            input.push_str(w);
            input.push_str(delims[i % delims.len()]);
        }
        let output = tr(&input);
        prop_assert_eq!(delimiter_positions(&input), delimiter_positions(&output));
    }

    #[test]
    fn prop_segments_reconstruct(text in "[a-z .,!?;:\"\\n\\t]{0,40}") {
        let joined: String = segments(&text).map(|s| s.as_str()).collect();
        prop_assert_eq!(joined, text);
    }
}
