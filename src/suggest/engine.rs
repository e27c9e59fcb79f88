//! Candidate generation and ranking for word completion.

use crate::fuzzy::matcher;
use crate::suggest::dictionary::{Dictionary, FrequencyTable};
use std::collections::HashSet;
use tracing::info;

/// Maximum number of suggestions returned per query.
pub const SUGGESTION_COUNT: usize = 8;

/// Cap on the supplementary fuzzy candidate pool.
const FUZZY_POOL: usize = 50;

/// Similarity cutoff for fuzzy candidates.
const FUZZY_CUTOFF: f64 = 0.6;

/// Optional external dictionary lookup ("enchant-like"). Its absence is a
/// feature-availability flag, not an error.
pub trait ExternalLookup {
    fn suggest(&self, prefix: &str) -> Vec<String>;
}

/// Multi-source completion engine. All backends are resolved once at
/// construction and frozen; every query runs synchronously from scratch.
pub struct SuggestionEngine {
    dictionary: Dictionary,
    frequency: FrequencyTable,
    external: Option<Box<dyn ExternalLookup>>,
}

impl SuggestionEngine {
    pub fn new(
        dictionary: Dictionary,
        frequency: FrequencyTable,
        external: Option<Box<dyn ExternalLookup>>,
    ) -> Self {
        if external.is_some() {
            info!("external lookup backend available");
        } else {
            info!("no external lookup backend, dictionary sources only");
        }
        Self {
            dictionary,
            frequency,
            external,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Up to [`SUGGESTION_COUNT`] ranked completions for the current word.
    ///
    /// Candidates are gathered in a fixed precedence order, first
    /// occurrence keeping its position: literal prefix matches, external
    /// lookup results, then fuzzy matches as a supplementary source. If
    /// the pool is still small the net widens to substring matches, and
    /// for one- or two-character prefixes to words sharing the first
    /// character. Ranking alone trims the widened pool.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();

        fn add(w: String, pool: &mut Vec<String>, seen: &mut HashSet<String>) {
            if seen.insert(w.clone()) {
                pool.push(w);
            }
        }

        let mut pool: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for w in self.dictionary.words() {
            if w.starts_with(&prefix) {
                add(w.clone(), &mut pool, &mut seen);
            }
        }

        if let Some(external) = &self.external {
            for w in external.suggest(&prefix) {
                if !w.is_empty() {
                    add(w.to_lowercase(), &mut pool, &mut seen);
                }
            }
        }

        for w in matcher::close_matches(&prefix, self.dictionary.words(), FUZZY_POOL, FUZZY_CUTOFF)
        {
            add(w, &mut pool, &mut seen);
        }

        if pool.len() < SUGGESTION_COUNT {
            for w in self.dictionary.words() {
                if w.contains(&prefix) {
                    add(w.clone(), &mut pool, &mut seen);
                }
            }
        }

        if pool.len() < SUGGESTION_COUNT && prefix.chars().count() <= 2 {
            if let Some(first) = prefix.chars().next() {
                for w in self.dictionary.words() {
                    if w.starts_with(first) {
                        add(w.clone(), &mut pool, &mut seen);
                    }
                }
            }
        }

        self.rank(&prefix, pool)
    }

    /// Scores the pool and returns the top distinct words, descending by
    /// score, ties stable in first-seen order.
    fn rank(&self, prefix: &str, pool: Vec<String>) -> Vec<String> {
        let mut scored: Vec<(f64, String)> = pool
            .into_iter()
            .map(|w| (self.score(prefix, &w), w))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|(_, w)| w)
            .collect()
    }

    /// Additive four-signal score for one candidate.
    pub fn score(&self, prefix: &str, word: &str) -> f64 {
        prefix_bonus(prefix, word)
            + substring_bonus(prefix, word)
            + similarity_bonus(prefix, word)
            + frequency_bonus(&self.frequency, word)
    }
}

/// Dominant signal: exact prefix match, weighted by prefix length so
/// longer confirmed prefixes pull harder.
pub fn prefix_bonus(prefix: &str, word: &str) -> f64 {
    if word.starts_with(prefix) {
        100.0 + prefix.chars().count() as f64
    } else {
        0.0
    }
}

/// Small boost for containing the prefix anywhere.
pub fn substring_bonus(prefix: &str, word: &str) -> f64 {
    if word.contains(prefix) {
        10.0
    } else {
        0.0
    }
}

/// Similarity ratio scaled to 0..20.
pub fn similarity_bonus(prefix: &str, word: &str) -> f64 {
    matcher::ratio(prefix, word) * 20.0
}

/// Corpus-frequency bonus, sqrt-damped and capped at 50.
pub fn frequency_bonus(table: &FrequencyTable, word: &str) -> f64 {
    ((table.weight(word) as f64).sqrt() / 2.0).min(50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(Dictionary::fallback(), FrequencyTable::base(), None)
    }

    struct StubLookup(Vec<&'static str>);

    impl ExternalLookup for StubLookup {
        fn suggest(&self, _prefix: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn empty_prefix_yields_nothing() {
        assert!(engine().suggest("").is_empty());
    }

    #[test]
    fn result_is_capped_and_distinct() {
        let got = engine().suggest("he");
        assert!(got.len() <= SUGGESTION_COUNT);
        let unique: std::collections::HashSet<_> = got.iter().collect();
        assert_eq!(unique.len(), got.len());
    }

    #[test]
    fn prefix_is_lowercased() {
        // The word buffer holds uppercase confirmed characters.
        assert_eq!(engine().suggest("HE"), engine().suggest("he"));
    }

    #[test]
    fn he_surfaces_hello_family() {
        let got = engine().suggest("he");
        assert!(got.iter().any(|w| w == "hello"), "got {:?}", got);
        assert!(got.iter().all(|w| w.starts_with("he")), "got {:?}", got);
    }

    #[test]
    fn exact_prefix_outranks_fuzzy_at_equal_weight() {
        let e = engine();
        // Neither word is in the base frequency pairs, so weights match.
        let prefix_match = e.score("hea", "health");
        let fuzzy_only = e.score("hea", "area");
        assert!(prefix_match > fuzzy_only);
    }

    #[test]
    fn external_candidates_are_merged_after_prefix_matches() {
        let dict = Dictionary::fallback();
        let e = SuggestionEngine::new(
            dict,
            FrequencyTable::base(),
            Some(Box::new(StubLookup(vec!["Hello", "heliotrope"]))),
        );
        let got = e.suggest("helio");
        // No dictionary prefix match for "helio"; the external word wins.
        assert!(got.contains(&"heliotrope".to_string()), "got {:?}", got);
    }

    #[test]
    fn scoring_components_in_isolation() {
        assert_eq!(prefix_bonus("he", "hello"), 102.0);
        assert_eq!(prefix_bonus("he", "the"), 0.0);
        assert_eq!(substring_bonus("he", "the"), 10.0);
        assert_eq!(substring_bonus("he", "ah"), 0.0);
        assert!((similarity_bonus("ab", "ab") - 20.0).abs() < 1e-9);
        assert_eq!(similarity_bonus("ab", "xy"), 0.0);

        let table = FrequencyTable::base();
        // weight("the") = 10000 -> sqrt/2 = 50, exactly at the cap.
        assert_eq!(frequency_bonus(&table, "the"), 50.0);
        // weight 1 -> 0.5.
        assert_eq!(frequency_bonus(&table, "zzzzzz"), 0.5);
    }

    #[test]
    fn short_prefix_still_fills_from_first_character() {
        // "q" has few prefix matches in the fallback dictionary; the
        // first-character expansion may only re-add the same words, but
        // the query must not panic and must stay within the cap.
        let got = engine().suggest("q");
        assert!(got.len() <= SUGGESTION_COUNT);
        assert!(got.iter().any(|w| w.starts_with('q')), "got {:?}", got);
    }
}
