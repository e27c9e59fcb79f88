//! Dictionary resolution and frequency weighting.
//!
//! The word list is resolved once, at engine construction, from the first
//! available source in a fixed priority order:
//!
//! 1. a custom wordlist file (one lowercase word per line),
//! 2. a frequency-source capability returning the top-N words,
//! 3. a system dictionary file,
//! 4. the built-in fallback list.
//!
//! Missing sources are logged and skipped; the fallback guarantees the
//! dictionary is never empty.

use crate::suggest::words::{BASE_WORD_FREQ, EXTRA_FALLBACK, FALLBACK_WORDS};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Hard cap on dictionary size, bounding per-tick suggestion cost.
pub const DICTIONARY_CAP: usize = 100_000;

/// System dictionary locations, first existing path wins.
const SYSTEM_DICT_PATHS: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/usr/dict/web2",
    "/usr/dict/web2a",
];

/// Capability that yields a frequency-ranked word list for a language,
/// most frequent first. Absence is a configuration state, not an error.
pub trait FrequencySource {
    fn top_words(&self, language: &str, count: usize) -> Option<Vec<String>>;
}

/// Immutable, deduplicated, lexicographically sorted set of lowercase
/// words. Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Normalizes a raw word list: lowercase, dedup keeping first
    /// occurrence, cap, then sort.
    fn from_raw(raw: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let mut words: Vec<String> = raw
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        words.truncate(DICTIONARY_CAP);
        words.sort();
        Self { words }
    }

    /// Resolves the word list through the source priority chain. The
    /// outcome is logged once and frozen for the engine's lifetime.
    pub fn resolve(
        wordlist_path: Option<&Path>,
        frequency_source: Option<&dyn FrequencySource>,
        language: &str,
    ) -> Self {
        let raw = load_custom_wordlist(wordlist_path)
            .or_else(|| load_from_frequency_source(frequency_source, language))
            .or_else(load_system_dictionary)
            .unwrap_or_else(|| {
                info!("using built-in fallback wordlist");
                FALLBACK_WORDS
                    .iter()
                    .chain(EXTRA_FALLBACK.iter())
                    .map(|w| w.to_string())
                    .collect()
            });
        let dict = Self::from_raw(raw);
        info!(size = dict.len(), "dictionary ready");
        dict
    }

    /// The built-in fallback dictionary, the floor of the chain.
    pub fn fallback() -> Self {
        Self::from_raw(
            FALLBACK_WORDS
                .iter()
                .chain(EXTRA_FALLBACK.iter())
                .map(|w| w.to_string())
                .collect(),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn load_custom_wordlist(path: Option<&Path>) -> Option<Vec<String>> {
    let path = path?;
    if !path.exists() {
        // A plain absent file is the normal case, not a problem.
        debug!(path = %path.display(), "no custom wordlist");
        return None;
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            let words: Vec<String> = text
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect();
            if words.is_empty() {
                warn!(path = %path.display(), "custom wordlist is empty, skipping");
                None
            } else {
                info!(path = %path.display(), count = words.len(), "loaded custom wordlist");
                Some(words)
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read custom wordlist, skipping");
            None
        }
    }
}

fn load_from_frequency_source(
    source: Option<&dyn FrequencySource>,
    language: &str,
) -> Option<Vec<String>> {
    let source = source?;
    let words = source.top_words(language, DICTIONARY_CAP)?;
    if words.is_empty() {
        return None;
    }
    info!(count = words.len(), "built wordlist from frequency source");
    Some(words)
}

fn load_system_dictionary() -> Option<Vec<String>> {
    for p in SYSTEM_DICT_PATHS {
        let path = Path::new(p);
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(text) => {
                let words: Vec<String> = text
                    .lines()
                    .map(|l| l.trim().to_lowercase())
                    .filter(|l| !l.is_empty() && l.chars().all(|c| c.is_alphabetic()))
                    .collect();
                info!(path = p, count = words.len(), "loaded system dictionary");
                return Some(words);
            }
            Err(e) => {
                warn!(path = p, error = %e, "could not read system dictionary");
            }
        }
    }
    None
}

/// Word-to-weight map biasing the ranking toward common words. Words not
/// present weigh 1.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    weights: HashMap<String, u64>,
}

impl FrequencyTable {
    /// The built-in table: the fixed base pairs, plus every core fallback
    /// word defaulted to weight 50 where not already present.
    pub fn base() -> Self {
        let mut weights: HashMap<String, u64> = BASE_WORD_FREQ
            .iter()
            .map(|&(w, f)| (w.to_string(), f))
            .collect();
        for w in FALLBACK_WORDS {
            weights.entry(w.to_lowercase()).or_insert(50);
        }
        Self { weights }
    }

    pub fn weight(&self, word: &str) -> u64 {
        self.weights.get(word).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct StubSource(Vec<String>);

    impl FrequencySource for StubSource {
        fn top_words(&self, _language: &str, count: usize) -> Option<Vec<String>> {
            Some(self.0.iter().take(count).cloned().collect())
        }
    }

    #[test]
    fn resolution_without_backends_is_never_empty() {
        // With no wordlist file and no frequency source the chain still
        // bottoms out in a usable dictionary.
        let dict = Dictionary::resolve(None, None, "en");
        assert!(!dict.is_empty());
    }

    #[test]
    fn fallback_contains_regression_words() {
        let dict = Dictionary::fallback();
        for w in ["hello", "world", "help", "friend", "beautiful"] {
            assert!(dict.words().iter().any(|d| d == w), "missing {}", w);
        }
    }

    #[test]
    fn dictionary_is_sorted_deduped_lowercase() {
        let dict = Dictionary::fallback();
        let words = dict.words();
        assert!(words.windows(2).all(|w| w[0] < w[1]));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn custom_wordlist_wins_over_frequency_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\n\nBanana\ncherry").unwrap();
        let stub = StubSource(vec!["zebra".into()]);
        let dict = Dictionary::resolve(Some(file.path()), Some(&stub), "en");
        assert_eq!(dict.words(), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn unreadable_wordlist_falls_through_to_frequency_source() {
        // The path exists but is a directory, so reading it fails.
        let dir = tempfile::tempdir().unwrap();
        let stub = StubSource(vec!["zebra".into()]);
        let dict = Dictionary::resolve(Some(dir.path()), Some(&stub), "en");
        assert_eq!(dict.words(), ["zebra"]);
    }

    #[test]
    fn missing_wordlist_falls_through_to_frequency_source() {
        let stub = StubSource(vec!["zebra".into(), "yak".into()]);
        let dict = Dictionary::resolve(
            Some(Path::new("/nonexistent/wordlist.txt")),
            Some(&stub),
            "en",
        );
        assert_eq!(dict.words(), ["yak", "zebra"]);
    }

    #[test]
    fn cap_is_enforced() {
        let raw: Vec<String> = (0..DICTIONARY_CAP + 500).map(|i| format!("w{:06}", i)).collect();
        let stub = StubSource(raw);
        let dict = Dictionary::resolve(None, Some(&stub), "en");
        assert_eq!(dict.len(), DICTIONARY_CAP);
    }

    #[test]
    fn frequency_table_defaults() {
        let table = FrequencyTable::base();
        assert_eq!(table.weight("the"), 10_000);
        // Fallback words absent from the base pairs get the default 50.
        assert_eq!(table.weight("people"), 50);
        // Unknown words weigh 1.
        assert_eq!(table.weight("zzzzzz"), 1);
    }
}
