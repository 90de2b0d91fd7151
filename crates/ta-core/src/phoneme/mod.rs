//! Romanized-Tamil phoneme tables.
//!
//! The default table is embedded TOML (`default_phonemes.toml`). A custom
//! table can be installed once with [`PhonemeTable::init_custom`] before the
//! first call to [`PhonemeTable::global`].

mod config;
mod table;

pub use config::{
    parse_phoneme_toml, DentalNasalConfig, GlideConfig, PhonemeConfig, PhonemeConfigError,
};
pub use table::{PhonemeTable, VowelForms};

pub const DEFAULT_TOML: &str = include_str!("default_phonemes.toml");

/// Returns the embedded default phoneme TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
