use std::fs;
use std::process;

use unicode_width::UnicodeWidthStr;

use ta_core::lexicon::default_lexicon;
use ta_core::{LexiconEntry, Script};
use tamil_engine::{lexicon_to_json, parse_lexicon_json, SpanRecord, TamilEngine};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Read a JSON snapshot, or fall back to the bundled seed lexicon.
fn load_lexicon(file: Option<&str>) -> Vec<LexiconEntry> {
    match file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_lexicon_json(&content), "Error: {}")
        }
        None => default_lexicon(),
    }
}

pub fn search(engine: &TamilEngine, lexicon: Option<&str>, query: &str, script: Script, json: bool) {
    let entries = load_lexicon(lexicon);
    let record = engine.search_record(&entries, query, script);

    if json {
        let s = die!(serde_json::to_string_pretty(&record), "Error: {}");
        println!("{s}");
        return;
    }

    if record.entries.is_empty() {
        println!("No matches for \"{query}\".");
        return;
    }
    if record.is_fuzzy_search {
        println!("No exact match; closest entries:");
    }
    for (i, entry) in record.entries.iter().enumerate() {
        println!(
            "#{:>2}: {}  ({})",
            i + 1,
            entry.headword(script),
            entry.headword(script.other())
        );
    }
}

pub fn highlight(engine: &TamilEngine, lexicon: Option<&str>, text: &str, script: Script, json: bool) {
    let entries = load_lexicon(lexicon);
    let records = engine.highlight_records(text, &entries, script);

    if json {
        let s = die!(serde_json::to_string_pretty(&records), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", format_spans(&records));
    }
}

pub fn lexicon_export() {
    let s = die!(lexicon_to_json(&default_lexicon()), "Error: {}");
    println!("{s}");
}

/// One line per span: byte range, padded text, matched headword.
pub fn format_spans(records: &[SpanRecord]) -> String {
    const PAD_WIDTH: usize = 24;
    let mut out = String::new();
    for r in records {
        let label = format!("\"{}\"", r.text);
        let width = UnicodeWidthStr::width(label.as_str());
        let padded = if width < PAD_WIDTH {
            format!("{label}{}", " ".repeat(PAD_WIDTH - width))
        } else {
            label
        };
        let range = format!("[{},{})", r.start, r.end);
        match &r.tamil_word {
            Some(word) => out.push_str(&format!("{range:<10} {padded} -> {word}\n")),
            None => out.push_str(&format!("{range:<10} {}\n", padded.trim_end())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_spans() {
        let records = vec![
            SpanRecord {
                start: 0,
                end: 9,
                text: "Thank You".to_string(),
                tamil_word: Some("நன்றி".to_string()),
            },
            SpanRecord {
                start: 9,
                end: 10,
                text: "!".to_string(),
                tamil_word: None,
            },
        ];
        let out = format_spans(&records);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[0,9)"));
        assert!(lines[0].ends_with("-> நன்றி"));
        assert_eq!(lines[1], "[9,10)     \"!\"");
    }

    #[test]
    fn test_format_spans_empty() {
        assert_eq!(format_spans(&[]), "");
    }

    #[test]
    fn test_default_lexicon_loads() {
        assert!(!load_lexicon(None).is_empty());
    }
}
