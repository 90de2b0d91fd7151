//! Locale collation for sorting search results.
//!
//! English: case-insensitive, lowercase before uppercase on ties.
//! Tamil: traditional alphabetical order. Each consonant together with the
//! sign that follows it is one unit, ordered pulli < inherent "a" < ா ி ீ ு
//! ூ ெ ே ை ொ ோ ௌ. Consonants follow க ங ச ஞ ட ண த ந ப ம ய ர ல வ ழ ள ற ன,
//! then the grantha letters. Non-Tamil characters sort before Tamil ones.

use std::cmp::{Ordering, Reverse};

use super::Script;
use crate::unicode::{fold_char, is_tamil, PULLI};

/// Weights above every code point, so Tamil letters sort after other scripts.
const TAMIL_BASE: u32 = 0x11_0000;
const CONSONANT_BASE: u32 = TAMIL_BASE + 0x20;
const OTHER_TAMIL_BASE: u32 = TAMIL_BASE + 0x100;

const VOWELS: [char; 13] = [
    'அ', 'ஆ', 'இ', 'ஈ', 'உ', 'ஊ', 'எ', 'ஏ', 'ஐ', 'ஒ', 'ஓ', 'ஔ', 'ஃ',
];

const CONSONANTS: [char; 23] = [
    'க', 'ங', 'ச', 'ஞ', 'ட', 'ண', 'த', 'ந', 'ப', 'ம', 'ய', 'ர', 'ல', 'வ', 'ழ', 'ள', 'ற', 'ன',
    'ஜ', 'ஶ', 'ஷ', 'ஸ', 'ஹ',
];

/// Dependent vowel signs in order; the inherent vowel sits between the pulli
/// (weight 0) and the first sign.
const SIGNS: [char; 11] = ['ா', 'ி', 'ீ', 'ு', 'ூ', 'ெ', 'ே', 'ை', 'ொ', 'ோ', 'ௌ'];

const INHERENT: u8 = 1;

fn sign_weight(c: char) -> Option<u8> {
    if c == PULLI {
        return Some(0);
    }
    SIGNS
        .iter()
        .position(|&s| s == c)
        .map(|p| INHERENT + 1 + p as u8)
}

/// Sort key for one headword. Compare keys of the same script only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    units: Vec<(u32, u8)>,
    tie: Reverse<String>,
}

fn tamil_units(s: &str) -> Vec<(u32, u8)> {
    let mut units = Vec::with_capacity(s.len() / 3 + 1);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(rank) = CONSONANTS.iter().position(|&k| k == c) {
            let secondary = match chars.peek().and_then(|&n| sign_weight(n)) {
                Some(w) => {
                    chars.next();
                    w
                }
                None => INHERENT,
            };
            units.push((CONSONANT_BASE + rank as u32, secondary));
        } else if let Some(rank) = VOWELS.iter().position(|&v| v == c) {
            units.push((TAMIL_BASE + rank as u32, 0));
        } else if is_tamil(c) {
            units.push((OTHER_TAMIL_BASE + c as u32, 0));
        } else {
            units.push((fold_char(c) as u32, 0));
        }
    }
    units
}

pub fn collation_key(s: &str, script: Script) -> CollationKey {
    let units = match script {
        Script::Tamil => tamil_units(s),
        Script::English => s.chars().map(|c| (fold_char(c) as u32, 0)).collect(),
    };
    // Uppercase code points are lower, so reversing puts lowercase first.
    CollationKey {
        units,
        tie: Reverse(s.to_string()),
    }
}

pub fn compare(a: &str, b: &str, script: Script) -> Ordering {
    collation_key(a, script).cmp(&collation_key(b, script))
}
