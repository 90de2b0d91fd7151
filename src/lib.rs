//! Application-facing layer of the Tamil transliteration engine.
//!
//! The algorithms live in [`ta_core`]; this crate bundles them behind
//! [`TamilEngine`], turns configuration and snapshot I/O failures into
//! [`EngineError`], and owns optional trace output.

pub mod api;
mod trace_init;

pub use api::{
    engine_version, lexicon_to_json, load_phoneme_config, load_settings_config,
    parse_lexicon_json, phoneme_default_config, settings_default_config, EngineError,
    SearchRecord, SpanRecord, TamilEngine,
};
pub use ta_core;
pub use ta_core::{LexiconEntry, MatchSpan, Script, SearchMode, SearchResults, SpanKind};
pub use trace_init::init_tracing;
