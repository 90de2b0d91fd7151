use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PhonemeConfig {
    pub consonants: BTreeMap<String, String>,
    pub standalone_vowels: BTreeMap<String, String>,
    pub vowel_diacritics: BTreeMap<String, String>,
    pub glide: GlideConfig,
    pub dental_nasal: DentalNasalConfig,
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

/// Consonant synthesized between two adjacent vowels.
#[derive(Debug, Clone, Deserialize)]
pub struct GlideConfig {
    /// Vowel keys after which the `front` glide is used.
    pub front_vowels: Vec<String>,
    pub front: String,
    pub back: String,
}

/// Contextual re-mapping of one consonant key when it precedes any of the
/// `before` keys ("n" before "th"/"dh" becomes the dental nasal).
#[derive(Debug, Clone, Deserialize)]
pub struct DentalNasalConfig {
    pub key: String,
    pub glyph: String,
    #[serde(default)]
    pub before: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhonemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid key in [{section}]: {key:?} (expected lowercase ASCII)")]
    InvalidKey { section: &'static str, key: String },
    #[error("empty value for key in [{section}]: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("vowel {0:?} needs both a standalone glyph and a diacritic")]
    MissingDiacritic(String),
    #[error("unknown vowel key in [glide]: {0}")]
    UnknownVowel(String),
    #[error("unknown consonant key in [dental_nasal]: {0}")]
    UnknownConsonant(String),
    #[error("phoneme table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate phoneme TOML.
pub fn parse_phoneme_toml(toml_str: &str) -> Result<PhonemeConfig, PhonemeConfigError> {
    let config: PhonemeConfig =
        toml::from_str(toml_str).map_err(|e| PhonemeConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn is_phoneme_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase())
}

fn check_table(
    section: &'static str,
    map: &BTreeMap<String, String>,
    allow_empty_values: bool,
) -> Result<(), PhonemeConfigError> {
    if map.is_empty() {
        return Err(PhonemeConfigError::Empty(section));
    }
    for (key, value) in map {
        if !is_phoneme_key(key) {
            return Err(PhonemeConfigError::InvalidKey {
                section,
                key: key.clone(),
            });
        }
        if !allow_empty_values && value.is_empty() {
            return Err(PhonemeConfigError::EmptyValue {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn validate(config: &PhonemeConfig) -> Result<(), PhonemeConfigError> {
    check_table("consonants", &config.consonants, false)?;
    check_table("standalone_vowels", &config.standalone_vowels, false)?;
    // The inherent vowel carries no mark, so empty diacritics are legal.
    check_table("vowel_diacritics", &config.vowel_diacritics, true)?;

    for key in config.standalone_vowels.keys() {
        if !config.vowel_diacritics.contains_key(key) {
            return Err(PhonemeConfigError::MissingDiacritic(key.clone()));
        }
    }
    for key in config.vowel_diacritics.keys() {
        if !config.standalone_vowels.contains_key(key) {
            return Err(PhonemeConfigError::MissingDiacritic(key.clone()));
        }
    }

    for vowel in &config.glide.front_vowels {
        if !config.standalone_vowels.contains_key(vowel) {
            return Err(PhonemeConfigError::UnknownVowel(vowel.clone()));
        }
    }
    for (field, glyph) in [("front", &config.glide.front), ("back", &config.glide.back)] {
        if glyph.is_empty() {
            return Err(PhonemeConfigError::EmptyValue {
                section: "glide",
                key: field.to_string(),
            });
        }
    }

    let nasal = &config.dental_nasal;
    if !config.consonants.contains_key(&nasal.key) {
        return Err(PhonemeConfigError::UnknownConsonant(nasal.key.clone()));
    }
    if nasal.glyph.is_empty() {
        return Err(PhonemeConfigError::EmptyValue {
            section: "dental_nasal",
            key: "glyph".to_string(),
        });
    }
    for follower in &nasal.before {
        if !is_phoneme_key(follower) {
            return Err(PhonemeConfigError::InvalidKey {
                section: "dental_nasal",
                key: follower.clone(),
            });
        }
    }

    for (phrase, tamil) in &config.exceptions {
        let valid = !phrase.trim().is_empty()
            && phrase.trim() == phrase
            && !phrase.contains("  ")
            && phrase.chars().all(|c| c == ' ' || c.is_ascii_lowercase());
        if !valid {
            return Err(PhonemeConfigError::InvalidKey {
                section: "exceptions",
                key: phrase.clone(),
            });
        }
        if tamil.is_empty() {
            return Err(PhonemeConfigError::EmptyValue {
                section: "exceptions",
                key: phrase.clone(),
            });
        }
    }

    Ok(())
}
