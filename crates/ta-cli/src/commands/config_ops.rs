use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn phoneme_export() {
    print!("{}", ta_core::phoneme::default_toml());
}

pub fn phoneme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(ta_core::PhonemeTable::from_toml(&content), "Error: {}");
    println!(
        "OK: {} consonants, {} vowels, {} exceptions",
        table.consonant_count(),
        table.vowel_count(),
        table.exception_count()
    );
}

pub fn settings_export() {
    print!("{}", ta_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        ta_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let search = s.search;
    println!(
        "OK: tolerance {} below {} chars, {} below {} chars, {} otherwise",
        search.short_tolerance,
        search.short_word_len,
        search.medium_tolerance,
        search.medium_word_len,
        search.long_tolerance
    );
}
