use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use ta_cli::commands::{config_ops, lexicon_ops, translit_ops};
use ta_core::Script;
use tamil_engine::TamilEngine;

#[derive(Parser)]
#[command(name = "tamiltool", about = "Romanized Tamil transliteration and lexicon diagnostics")]
struct Cli {
    /// Custom phoneme table (TOML) to use instead of the bundled one
    #[arg(long, global = true)]
    phonemes: Option<String>,
    /// Custom settings (TOML) to use instead of the bundled ones
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSONL trace into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate romanized text into Tamil script
    Translit {
        /// Romanized text
        text: String,
        /// Output as JSON with a per-word breakdown
        #[arg(long)]
        json: bool,
    },
    /// Search a lexicon (exact substring match, fuzzy fallback)
    Search {
        /// Search query
        query: String,
        /// Lexicon snapshot as a JSON array (default: bundled seed lexicon)
        #[arg(long)]
        lexicon: Option<String>,
        /// Script used to order exact results
        #[arg(long, default_value = "tamil")]
        script: Script,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark lexicon headwords occurring in a text
    Highlight {
        /// Text to scan
        text: String,
        /// Lexicon snapshot as a JSON array (default: bundled seed lexicon)
        #[arg(long)]
        lexicon: Option<String>,
        /// Which headwords to look for
        #[arg(long, default_value = "tamil")]
        script: Script,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the bundled phoneme table
    PhonemeExport,
    /// Validate a phoneme table file
    PhonemeValidate {
        /// Phoneme TOML file
        file: String,
    },
    /// Print the bundled settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
    /// Print the bundled seed lexicon as JSON
    LexiconExport,
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        tamil_engine::init_tracing(Path::new(dir));
    }
    if let Some(path) = &cli.phonemes {
        if let Err(e) = tamil_engine::load_phoneme_config(path) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
    if let Some(path) = &cli.settings {
        if let Err(e) = tamil_engine::load_settings_config(path) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let engine = TamilEngine::new();

    match cli.command {
        Command::Translit { text, json } => translit_ops::translit(&engine, &text, json),
        Command::Search {
            query,
            lexicon,
            script,
            json,
        } => lexicon_ops::search(&engine, lexicon.as_deref(), &query, script, json),
        Command::Highlight {
            text,
            lexicon,
            script,
            json,
        } => lexicon_ops::highlight(&engine, lexicon.as_deref(), &text, script, json),
        Command::PhonemeExport => config_ops::phoneme_export(),
        Command::PhonemeValidate { file } => config_ops::phoneme_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::LexiconExport => lexicon_ops::lexicon_export(),
    }
}
