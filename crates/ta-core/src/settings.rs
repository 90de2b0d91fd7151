//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the phoneme table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call. Fails once the
/// singleton has been built.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
}

/// Fuzzy-search tolerance. An entry whose longer headword has fewer than
/// `short_word_len` chars accepts `short_tolerance` edits, fewer than
/// `medium_word_len` accepts `medium_tolerance`, anything longer
/// `long_tolerance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchSettings {
    pub short_word_len: usize,
    pub short_tolerance: usize,
    pub medium_word_len: usize,
    pub medium_tolerance: usize,
    pub long_tolerance: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            short_word_len: 5,
            short_tolerance: 1,
            medium_word_len: 10,
            medium_tolerance: 2,
            long_tolerance: 3,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let invalid = |field: &str, reason: &str| SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let search = &s.search;
    if search.short_word_len == 0 {
        return Err(invalid("search.short_word_len", "must be positive"));
    }
    if search.medium_word_len <= search.short_word_len {
        return Err(invalid(
            "search.medium_word_len",
            "must be greater than search.short_word_len",
        ));
    }
    if search.short_tolerance > search.medium_tolerance {
        return Err(invalid(
            "search.short_tolerance",
            "must not exceed search.medium_tolerance",
        ));
    }
    if search.medium_tolerance > search.long_tolerance {
        return Err(invalid(
            "search.medium_tolerance",
            "must not exceed search.long_tolerance",
        ));
    }

    Ok(())
}
