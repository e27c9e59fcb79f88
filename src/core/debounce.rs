//! Temporal debouncing of the raw classification stream.
//!
//! The classifier is jittery from frame to frame; a character only counts
//! once the same letter has been observed for a sustained run. A blank
//! observation (no sign shown) discards any partial run and re-arms
//! detection.

use crate::core::types::{Classification, Symbol, ALPHABET_LEN};
use tracing::debug;

/// A letter is confirmed once its run counter exceeds this many ticks
/// since the last blank.
pub const CONFIRM_THRESHOLD: u32 = 15;

/// Counters and flags owned by one [`Debouncer`]. A separate value per
/// session, so independent debounce sessions never interfere.
#[derive(Debug, Clone)]
pub struct DebounceState {
    /// Per-letter run counters. Only a blank observation resets them;
    /// a competing letter leaves the others' stale counts in place.
    counts: [u32; ALPHABET_LEN],
    /// True once the current run has already produced a confirmation,
    /// suppressing repeats until the next blank.
    accepted: bool,
    /// The character the same-as-last suppression compares against.
    /// Cleared by a blank tick, so a deliberate pause allows the same
    /// letter to confirm again.
    last_confirmed: Option<char>,
    /// Append-only sequence of confirmed characters.
    history: Vec<char>,
}

impl DebounceState {
    fn new() -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
            accepted: false,
            last_confirmed: None,
            history: Vec::new(),
        }
    }
}

/// Run-length/hysteresis state machine turning per-tick classifications
/// into confirmed characters.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            state: DebounceState::new(),
        }
    }

    /// Consumes one classification; called exactly once per tick.
    /// Returns the confirmed character, if this tick produced one.
    ///
    /// The threshold is "16 ticks of the same letter since the last
    /// blank", not a strict uninterrupted run: observing a different
    /// letter does not clear a counter, only blank does. A letter equal
    /// to the last confirmed character is never confirmed again until a
    /// blank tick or a different confirmed character lands in between.
    pub fn observe(&mut self, classification: Classification) -> Option<char> {
        let state = &mut self.state;
        match classification.symbol {
            Symbol::Blank => {
                state.counts = [0; ALPHABET_LEN];
                state.accepted = false;
                state.last_confirmed = None;
                None
            }
            Symbol::Letter(i) => {
                let idx = i as usize;
                state.counts[idx] += 1;
                let ch = (b'A' + i) as char;
                if state.counts[idx] > CONFIRM_THRESHOLD
                    && !state.accepted
                    && state.last_confirmed != Some(ch)
                {
                    state.history.push(ch);
                    state.last_confirmed = Some(ch);
                    state.accepted = true;
                    debug!(confirmed = %ch, ticks = state.counts[idx], "character confirmed");
                    Some(ch)
                } else {
                    None
                }
            }
        }
    }

    /// All characters confirmed so far, in order.
    pub fn history(&self) -> &[char] {
        &self.state.history
    }

    /// The most recent `n` confirmed characters, joined for display.
    pub fn history_tail(&self, n: usize) -> String {
        let h = &self.state.history;
        h[h.len().saturating_sub(n)..].iter().collect()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Classification {
        Classification::new(Symbol::letter(c).unwrap(), 0.9)
    }

    fn blank() -> Classification {
        Classification::new(Symbol::Blank, 0.9)
    }

    /// Feeds a compact script like "A*16 . B*16" where '.' is a blank
    /// tick, and returns all confirmed characters.
    fn run(script: &[(Classification, usize)]) -> Vec<char> {
        let mut d = Debouncer::new();
        let mut confirmed = Vec::new();
        for &(c, reps) in script {
            for _ in 0..reps {
                if let Some(ch) = d.observe(c) {
                    confirmed.push(ch);
                }
            }
        }
        confirmed
    }

    #[test]
    fn short_runs_emit_nothing() {
        assert_eq!(run(&[(letter('A'), 15)]), Vec::<char>::new());
        assert_eq!(run(&[(letter('A'), 10), (letter('B'), 15)]), Vec::<char>::new());
    }

    #[test]
    fn sixteenth_tick_confirms_exactly_once() {
        let mut d = Debouncer::new();
        for i in 0..16 {
            let got = d.observe(letter('A'));
            if i < 15 {
                assert_eq!(got, None, "tick {} must not confirm", i + 1);
            } else {
                assert_eq!(got, Some('A'));
            }
        }
    }

    #[test]
    fn blank_resets_counters_and_rearms() {
        let mut d = Debouncer::new();
        for _ in 0..15 {
            d.observe(letter('A'));
        }
        d.observe(blank());
        // Counter restarted; another 15 ticks must stay silent.
        for _ in 0..15 {
            assert_eq!(d.observe(letter('A')), None);
        }
    }

    #[test]
    fn same_letter_twice_needs_blank_between() {
        assert_eq!(run(&[(letter('A'), 16), (letter('A'), 16)]), vec!['A']);
        assert_eq!(
            run(&[(letter('A'), 16), (blank(), 1), (letter('A'), 16)]),
            vec!['A', 'A']
        );
    }

    #[test]
    fn blank_then_different_letter() {
        assert_eq!(
            run(&[(letter('A'), 16), (blank(), 1), (letter('B'), 16)]),
            vec!['A', 'B']
        );
    }

    #[test]
    fn competing_letter_does_not_reset_counter() {
        // 10 ticks of A, 5 of B, then 6 more of A: A's counter is at 16
        // since no blank intervened, so A confirms on the last tick.
        let got = run(&[(letter('A'), 10), (letter('B'), 5), (letter('A'), 6)]);
        assert_eq!(got, vec!['A']);
    }

    #[test]
    fn history_accumulates_and_tail_is_bounded() {
        // Spells a word with a doubled letter: the pause between the two
        // L runs clears the same-as-last suppression.
        let mut d = Debouncer::new();
        for c in ['H', 'E', 'L', 'L', 'O'] {
            for _ in 0..16 {
                d.observe(letter(c));
            }
            d.observe(blank());
        }
        assert_eq!(d.history(), &['H', 'E', 'L', 'L', 'O']);
        assert_eq!(d.history_tail(2), "LO");
        assert_eq!(d.history_tail(10), "HELLO");
    }

    #[test]
    fn suppression_survives_competing_letters_without_blank() {
        // After A confirms, 16 ticks of B confirm B (a different
        // confirmed character), after which A may confirm again even
        // though no blank ever occurred: A's counter kept climbing.
        let got = run(&[(letter('A'), 16), (letter('B'), 16)]);
        assert_eq!(got, vec!['A']); // accepted still set, B stays silent
        let got = run(&[
            (letter('A'), 16),
            (blank(), 1),
            (letter('B'), 16),
            (blank(), 1),
            (letter('A'), 16),
        ]);
        assert_eq!(got, vec!['A', 'B', 'A']);
    }

    #[test]
    fn independent_sessions_do_not_interfere() {
        let mut a = Debouncer::new();
        let mut b = Debouncer::new();
        for _ in 0..16 {
            a.observe(letter('A'));
        }
        assert_eq!(a.history(), &['A']);
        assert!(b.history().is_empty());
        // The fresh session still needs its own full run.
        for _ in 0..15 {
            assert_eq!(b.observe(letter('A')), None);
        }
        assert_eq!(b.observe(letter('A')), Some('A'));
    }
}
