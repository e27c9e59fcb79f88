//! Session controller: the single-threaded tick pipeline and command
//! routing.
//!
//! One controller owns the debouncer, both buffers and the suggestion
//! engine. Everything that mutates them, tick processing and user
//! commands alike, is funneled through this one value, so a command
//! applied between ticks can never race a pending debounced append.

use crate::core::buffer::{SentenceBuffer, WordBuffer};
use crate::core::debounce::Debouncer;
use crate::core::types::Classification;
use crate::suggest::engine::SuggestionEngine;
use tracing::debug;

/// Confirmed-history characters exposed for display.
const HISTORY_TAIL: usize = 10;

/// User commands arriving from the display boundary. Applied directly to
/// the buffers, bypassing the classifier path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append the current word to the sentence and clear it.
    CommitWord,
    /// Delete the last character of the current word.
    DeleteChar,
    /// Clear both the word and the sentence.
    ClearAll,
    /// Replace the current word with the n-th suggestion (0-based) and
    /// commit it.
    PickSuggestion(usize),
}

/// Everything the display needs to render one tick.
#[derive(Debug, Clone, Default)]
pub struct TickView {
    /// Label of the most recent raw classification ("A".."Z" or "blank").
    pub symbol_label: String,
    pub confidence: f32,
    pub word: String,
    pub sentence: String,
    pub suggestions: Vec<String>,
    /// The last few confirmed characters, oldest first.
    pub history_tail: String,
}

pub struct SessionController {
    debouncer: Debouncer,
    word: WordBuffer,
    sentence: SentenceBuffer,
    engine: SuggestionEngine,
    last_label: String,
    last_confidence: f32,
    suggestions: Vec<String>,
}

impl SessionController {
    /// Engine construction (dictionary resolution) is the one slow step;
    /// callers do it once, off the tick path, and hand the result here.
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            debouncer: Debouncer::new(),
            word: WordBuffer::new(),
            sentence: SentenceBuffer::new(),
            engine,
            last_label: "...".to_string(),
            last_confidence: 0.0,
            suggestions: Vec::new(),
        }
    }

    /// Runs one tick: debounce the classification (when there is one),
    /// append any confirmed character, then re-query suggestions from
    /// scratch for the current word. `None` means the classifier had no
    /// result this tick; the debouncer is not invoked and no counter
    /// moves.
    pub fn tick(&mut self, classification: Option<Classification>) -> TickView {
        if let Some(c) = classification {
            self.last_label = c.symbol.label();
            self.last_confidence = c.confidence;
            if let Some(ch) = self.debouncer.observe(c) {
                self.word.push_char(ch);
            }
        }
        self.refresh_suggestions();
        self.view()
    }

    /// Applies one user command. Commands are serialized with ticks by
    /// construction: both go through `&mut self`.
    pub fn handle(&mut self, command: Command) {
        debug!(?command, "command");
        match command {
            Command::CommitWord => self.commit_word(),
            Command::DeleteChar => self.word.delete_last(),
            Command::ClearAll => {
                self.word.clear();
                self.sentence.clear();
            }
            Command::PickSuggestion(idx) => {
                if let Some(chosen) = self.suggestions.get(idx) {
                    let chosen = chosen.to_uppercase();
                    self.word.replace(&chosen);
                    self.commit_word();
                }
            }
        }
        self.refresh_suggestions();
    }

    fn commit_word(&mut self) {
        if !self.word.is_empty() {
            self.sentence.push_word(self.word.take());
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = if self.word.is_empty() {
            Vec::new()
        } else {
            self.engine.suggest(self.word.as_str())
        };
    }

    pub fn view(&self) -> TickView {
        TickView {
            symbol_label: self.last_label.clone(),
            confidence: self.last_confidence,
            word: self.word.as_str().to_string(),
            sentence: self.sentence.to_text(),
            suggestions: self.suggestions.clone(),
            history_tail: self.debouncer.history_tail(HISTORY_TAIL),
        }
    }
}
