use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_phoneme_toml, PhonemeConfig, PhonemeConfigError};
use super::DEFAULT_TOML;
use crate::trie::KeyTrie;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<PhonemeTable> = OnceLock::new();

/// Both written forms of one vowel sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelForms {
    pub key: String,
    /// Independent vowel letter, used at a syllable start.
    pub standalone: String,
    /// Combining sign attached to a consonant; empty for the inherent "a".
    pub diacritic: String,
}

#[derive(Debug, Clone)]
struct Consonant {
    key: String,
    glyph: String,
}

struct DentalNasal {
    key: String,
    glyph: String,
    before: Vec<Vec<char>>,
}

pub struct PhonemeTable {
    consonants: KeyTrie<Consonant>,
    vowels: KeyTrie<VowelForms>,
    exceptions: HashMap<String, String>,
    /// Word count of the longest exception phrase.
    max_exception_words: usize,
    front_vowels: HashSet<String>,
    front_glide: String,
    back_glide: String,
    dental_nasal: DentalNasal,
}

impl PhonemeTable {
    /// Set custom TOML before first `global()` call.
    ///
    /// Fails with `AlreadyInitialized` once the global table exists, since a
    /// late table would never be read.
    pub fn init_custom(toml_content: String) -> Result<(), PhonemeConfigError> {
        // Validate eagerly
        parse_phoneme_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(PhonemeConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PhonemeConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhonemeTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            PhonemeTable::from_toml(toml_str).expect("phoneme TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PhonemeConfigError> {
        parse_phoneme_toml(toml_str).map(Self::from_config)
    }

    /// Build from an already validated config.
    pub fn from_config(config: PhonemeConfig) -> Self {
        let mut consonants = KeyTrie::new();
        for (key, glyph) in &config.consonants {
            consonants.insert(
                key.chars(),
                Consonant {
                    key: key.clone(),
                    glyph: glyph.clone(),
                },
            );
        }

        let mut vowels = KeyTrie::new();
        for (key, standalone) in &config.standalone_vowels {
            let diacritic = config
                .vowel_diacritics
                .get(key)
                .cloned()
                .unwrap_or_default();
            vowels.insert(
                key.chars(),
                VowelForms {
                    key: key.clone(),
                    standalone: standalone.clone(),
                    diacritic,
                },
            );
        }

        let max_exception_words = config
            .exceptions
            .keys()
            .map(|phrase| phrase.split(' ').count())
            .max()
            .unwrap_or(0);

        debug!(
            consonants = consonants.len(),
            vowels = vowels.len(),
            exceptions = config.exceptions.len(),
            "phoneme table built"
        );

        Self {
            consonants,
            vowels,
            exceptions: config.exceptions.into_iter().collect(),
            max_exception_words,
            front_vowels: config.glide.front_vowels.into_iter().collect(),
            front_glide: config.glide.front,
            back_glide: config.glide.back,
            dental_nasal: DentalNasal {
                key: config.dental_nasal.key,
                glyph: config.dental_nasal.glyph,
                before: config
                    .dental_nasal
                    .before
                    .iter()
                    .map(|k| k.chars().collect())
                    .collect(),
            },
        }
    }

    /// Longest consonant key at the start of `input`, resolved to its glyph.
    ///
    /// `input` is the remaining token from the cursor on. The dental-nasal
    /// override looks at what follows the matched key.
    pub fn consonant_at(&self, input: &[char]) -> Option<(usize, &str)> {
        let (len, consonant) = self.consonants.longest(input.iter().copied())?;
        let rest = &input[len..];
        if consonant.key == self.dental_nasal.key
            && self.dental_nasal.before.iter().any(|k| rest.starts_with(k))
        {
            return Some((len, &self.dental_nasal.glyph));
        }
        Some((len, &consonant.glyph))
    }

    /// Longest vowel key at the start of `input`.
    pub fn vowel_at(&self, input: &[char]) -> Option<(usize, &VowelForms)> {
        self.vowels.longest(input.iter().copied())
    }

    /// Glide consonant inserted after `previous` when another vowel follows.
    pub fn glide_after(&self, previous: &VowelForms) -> &str {
        if self.front_vowels.contains(&previous.key) {
            &self.front_glide
        } else {
            &self.back_glide
        }
    }

    /// Literal replacement for a whole lowercase word or space-joined phrase.
    pub fn exception(&self, phrase: &str) -> Option<&str> {
        self.exceptions.get(phrase).map(String::as_str)
    }

    pub fn max_exception_words(&self) -> usize {
        self.max_exception_words
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn consonant_count(&self) -> usize {
        self.consonants.len()
    }

    pub fn vowel_count(&self) -> usize {
        self.vowels.len()
    }
}
