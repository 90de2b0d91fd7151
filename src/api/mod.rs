//! Application-facing API for the Tamil engine.

mod engine;
mod types;

pub use engine::TamilEngine;
pub use types::{EngineError, SearchRecord, SpanRecord};

use std::path::Path;

use ta_core::LexiconEntry;
use tracing::debug;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_config(path: &Path) -> Result<String, EngineError> {
    std::fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

/// Install a custom phoneme table. Must run before the first transliteration.
pub fn load_phoneme_config(path: impl AsRef<Path>) -> Result<(), EngineError> {
    let path = path.as_ref();
    let content = read_config(path)?;
    ta_core::PhonemeTable::init_custom(content)
        .map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path.display(), "custom phoneme table installed");
    Ok(())
}

/// Install custom settings. Must run before the first search.
pub fn load_settings_config(path: impl AsRef<Path>) -> Result<(), EngineError> {
    let path = path.as_ref();
    let content = read_config(path)?;
    ta_core::settings::init_custom(content)
        .map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path.display(), "custom settings installed");
    Ok(())
}

pub fn phoneme_default_config() -> String {
    ta_core::phoneme::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    ta_core::settings::default_toml().to_string()
}

/// Parse a lexicon snapshot: a JSON array of entries in camelCase form.
pub fn parse_lexicon_json(json: &str) -> Result<Vec<LexiconEntry>, EngineError> {
    serde_json::from_str(json).map_err(|e| EngineError::InvalidData {
        msg: format!("lexicon: {e}"),
    })
}

pub fn lexicon_to_json(entries: &[LexiconEntry]) -> Result<String, EngineError> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| EngineError::InvalidData { msg: e.to_string() })
}
