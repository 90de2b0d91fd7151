use std::process;

use serde::Serialize;

use ta_core::translit::{segments, Segment};
use tamil_engine::TamilEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Serialize)]
struct TranslitOutput<'a> {
    input: &'a str,
    output: String,
    words: Vec<WordOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct WordOutput<'a> {
    romanized: &'a str,
    tamil: String,
}

pub fn translit(engine: &TamilEngine, text: &str, json: bool) {
    let output = engine.transliterate(text);
    if !json {
        println!("{output}");
        return;
    }

    let words = segments(text)
        .filter_map(|seg| match seg {
            Segment::Word(w) => Some(WordOutput {
                romanized: w,
                tamil: engine.transliterate_segment(w),
            }),
            Segment::Delimiter(_) => None,
        })
        .collect();
    let report = TranslitOutput {
        input: text,
        output,
        words,
    };
    let s = die!(serde_json::to_string_pretty(&report), "Error: {}");
    println!("{s}");
}
