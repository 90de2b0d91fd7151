fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/phoneme/default_phonemes.toml",
        include_str!("src/phoneme/default_phonemes.toml"),
    );
    validate_toml(
        "src/lexicon/default_lexicon.toml",
        include_str!("src/lexicon/default_lexicon.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
