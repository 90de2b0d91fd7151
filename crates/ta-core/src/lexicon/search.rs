use tracing::{debug, debug_span};

use super::collation::collation_key;
use super::distance::levenshtein;
use super::{LexiconEntry, Script};
use crate::settings::{settings, SearchSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Substring hits (or the whole lexicon for an empty query).
    Exact,
    /// No substring hit; entries within edit-distance tolerance.
    Fuzzy,
}

#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub entries: Vec<&'a LexiconEntry>,
    pub mode: SearchMode,
}

impl SearchResults<'_> {
    pub fn is_fuzzy(&self) -> bool {
        self.mode == SearchMode::Fuzzy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Search view over one lexicon snapshot.
pub struct LexiconIndex<'a> {
    entries: &'a [LexiconEntry],
    settings: SearchSettings,
}

impl<'a> LexiconIndex<'a> {
    /// Index with the global search settings.
    pub fn new(entries: &'a [LexiconEntry]) -> Self {
        Self::with_settings(entries, settings().search)
    }

    pub fn with_settings(entries: &'a [LexiconEntry], settings: SearchSettings) -> Self {
        Self { entries, settings }
    }

    pub fn entries(&self) -> &'a [LexiconEntry] {
        self.entries
    }

    /// Ranked lookup.
    ///
    /// Substring matches on either headword or meaning come back sorted by
    /// the collation of `script`. Only when there are none does the fuzzy
    /// phase run, returning entries within tolerance, closest first.
    pub fn search(&self, query: &str, script: Script) -> SearchResults<'a> {
        let query = query.trim().to_lowercase();
        let _span = debug_span!("lexicon_search", query = query.as_str(), %script).entered();

        if query.is_empty() {
            return SearchResults {
                entries: self.sorted(self.entries.iter().collect(), script),
                mode: SearchMode::Exact,
            };
        }

        let exact = self.exact_matches(&query);
        if !exact.is_empty() {
            debug!(hits = exact.len(), "exact");
            return SearchResults {
                entries: self.sorted(exact, script),
                mode: SearchMode::Exact,
            };
        }

        let fuzzy = self.fuzzy_matches(&query);
        debug!(hits = fuzzy.len(), "fuzzy");
        SearchResults {
            entries: fuzzy,
            mode: SearchMode::Fuzzy,
        }
    }

    fn exact_matches(&self, query: &str) -> Vec<&'a LexiconEntry> {
        self.entries
            .iter()
            .filter(|e| {
                [
                    &e.tamil_word,
                    &e.english_word,
                    &e.english_meaning,
                    &e.tamil_meaning,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(query))
            })
            .collect()
    }

    fn fuzzy_matches(&self, query: &str) -> Vec<&'a LexiconEntry> {
        let mut scored: Vec<(usize, &'a LexiconEntry)> = self
            .entries
            .iter()
            .filter_map(|e| {
                let score = levenshtein(&e.tamil_word.to_lowercase(), query)
                    .min(levenshtein(&e.english_word.to_lowercase(), query));
                (score <= self.tolerance(e)).then_some((score, e))
            })
            .collect();
        // stable: equal scores keep snapshot order
        scored.sort_by_key(|&(score, _)| score);
        scored.into_iter().map(|(_, e)| e).collect()
    }

    /// Allowed edit distance, scaled by the longer headword.
    fn tolerance(&self, entry: &LexiconEntry) -> usize {
        let len = entry
            .tamil_word
            .chars()
            .count()
            .max(entry.english_word.chars().count());
        let s = &self.settings;
        if len < s.short_word_len {
            s.short_tolerance
        } else if len < s.medium_word_len {
            s.medium_tolerance
        } else {
            s.long_tolerance
        }
    }

    fn sorted(&self, mut entries: Vec<&'a LexiconEntry>, script: Script) -> Vec<&'a LexiconEntry> {
        entries.sort_by_cached_key(|e| collation_key(e.headword(script), script));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tamil: &str, english: &str, english_meaning: &str) -> LexiconEntry {
        LexiconEntry::new(tamil, english, "", english_meaning)
    }

    fn make_lexicon() -> Vec<LexiconEntry> {
        vec![
            entry("நன்றி", "Thank You", "A word to express gratitude."),
            entry("அன்பு", "Love / Affection", "Tender feelings."),
            entry("பூனை", "Cat", "A small domesticated feline."),
            entry("கடை", "Shop", "A place where goods are sold."),
        ]
    }

    fn words<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.entries.iter().map(|&e| e.english_word.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_sorted() {
        let lex = make_lexicon();
        let index = LexiconIndex::new(&lex);

        let results = index.search("", Script::English);
        assert!(!results.is_fuzzy());
        assert_eq!(
            words(&results),
            vec!["Cat", "Love / Affection", "Shop", "Thank You"]
        );

        let results = index.search("   ", Script::Tamil);
        let tamil: Vec<&str> = results.entries.iter().map(|e| e.tamil_word.as_str()).collect();
        assert_eq!(tamil, vec!["அன்பு", "கடை", "நன்றி", "பூனை"]);
    }

    #[test]
    fn test_exact_substring_headword() {
        let lex = make_lexicon();
        let results = LexiconIndex::new(&lex).search("THANK", Script::English);
        assert_eq!(results.mode, SearchMode::Exact);
        assert_eq!(words(&results), vec!["Thank You"]);
    }

    #[test]
    fn test_exact_substring_meaning() {
        let lex = make_lexicon();
        let results = LexiconIndex::new(&lex).search("feline", Script::English);
        assert_eq!(words(&results), vec!["Cat"]);
    }

    #[test]
    fn test_exact_tamil() {
        let lex = make_lexicon();
        let results = LexiconIndex::new(&lex).search("அன்", Script::Tamil);
        assert_eq!(words(&results), vec!["Love / Affection"]);
    }

    #[test]
    fn test_exact_results_sorted_by_collation() {
        let lex = make_lexicon();
        // "a" appears in every entry's English text
        let results = LexiconIndex::new(&lex).search("a", Script::English);
        assert!(!results.is_fuzzy());
        assert_eq!(
            words(&results),
            vec!["Cat", "Love / Affection", "Shop", "Thank You"]
        );
    }

    #[test]
    fn test_fuzzy_when_no_exact() {
        let lex = make_lexicon();
        // "shpo" is two edits from "shop"; "Shop" has length 4 -> tolerance 1
        let results = LexiconIndex::new(&lex).search("shpo", Script::English);
        assert!(results.is_fuzzy());
        assert!(results.is_empty());

        // one substitution
        let results = LexiconIndex::new(&lex).search("shap", Script::English);
        assert!(results.is_fuzzy());
        assert_eq!(words(&results), vec!["Shop"]);
    }

    #[test]
    fn test_fuzzy_ranked_by_score() {
        let lex = vec![
            entry("ஒன்று", "Kitten", ""),
            entry("இரண்டு", "Mitten", ""),
            entry("மூன்று", "Kitchen", ""),
        ];
        // kitten: 1, mitten: 2, kitchen: 3 (tolerances 2, 2, 2)
        let results = LexiconIndex::new(&lex).search("kittem", Script::English);
        assert!(results.is_fuzzy());
        assert_eq!(words(&results), vec!["Kitten", "Mitten"]);
    }

    #[test]
    fn test_fuzzy_ties_keep_snapshot_order() {
        let lex = vec![entry("x", "Bat", ""), entry("y", "Rat", "")];
        let results = LexiconIndex::new(&lex).search("mat", Script::English);
        assert_eq!(words(&results), vec!["Bat", "Rat"]);
    }

    #[test]
    fn test_fuzzy_tolerance_scales_with_length() {
        let s = SearchSettings::default();
        let lex = vec![
            entry("அ", "Cat", ""),
            entry("ஆ", "Elephant", ""),
            entry("இ", "Hippopotamus", ""),
        ];
        let index = LexiconIndex::with_settings(&lex, s);
        assert_eq!(index.tolerance(&lex[0]), 1);
        assert_eq!(index.tolerance(&lex[1]), 2);
        assert_eq!(index.tolerance(&lex[2]), 3);

        // 3 edits accepted only for the long word
        let results = index.search("hipopotamas x", Script::English);
        assert!(results.is_fuzzy());
        assert!(results.is_empty());
        let results = index.search("hipopotamos", Script::English);
        assert_eq!(words(&results), vec!["Hippopotamus"]);
    }

    #[test]
    fn test_fuzzy_never_when_exact_exists() {
        let lex = make_lexicon();
        // "cat" is an exact hit; "Bat"-like fuzzy neighbours must not appear
        let mut lex2 = lex.clone();
        lex2.push(entry("வௌவால்", "Bat", ""));
        let results = LexiconIndex::new(&lex2).search("cat", Script::English);
        assert_eq!(results.mode, SearchMode::Exact);
        assert_eq!(words(&results), vec!["Cat"]);
    }

    #[test]
    fn test_empty_lexicon() {
        let results = LexiconIndex::new(&[]).search("anything", Script::English);
        assert!(results.is_empty());
        assert!(results.is_fuzzy());
        let results = LexiconIndex::new(&[]).search("", Script::English);
        assert!(results.is_empty());
        assert!(!results.is_fuzzy());
    }
}
