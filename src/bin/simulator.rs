//! Terminal simulator for the sign-to-text session.
//!
//! The camera and trained model are replaced by either a scripted
//! classification stream (`--script`, one tick per line) or the keyboard:
//! press a letter to hold that sign, `.` to show no sign (blank). The
//! session pipeline underneath is the real one.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute};
use sign_core::classify::{Classifier, Frame, ScriptedClassifier};
use sign_core::config::AppConfig;
use sign_core::core::types::{Classification, Symbol};
use sign_core::session::{Command, SessionController, TickView};
use sign_core::suggest::dictionary::{Dictionary, FrequencyTable};
use sign_core::suggest::engine::SuggestionEngine;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sign_simulator")]
#[command(about = "Drive the sign-to-text session from a script or the keyboard")]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Custom wordlist file (one word per line), overriding the config
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Classification script to replay instead of the keyboard
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Tick period in milliseconds
    #[arg(long, default_value = "20")]
    tick_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(args.config.as_deref());
    if args.wordlist.is_some() {
        config.wordlist_path = args.wordlist.clone();
    }

    // One-time engine construction, off the tick path.
    let dictionary = Dictionary::resolve(Some(&config.wordlist_file()), None, &config.language);
    let engine = SuggestionEngine::new(dictionary, FrequencyTable::base(), None);
    let session = SessionController::new(engine);

    match args.script {
        Some(path) => {
            let classifier = ScriptedClassifier::from_file(&path)
                .with_context(|| format!("startup failed: {}", path.display()))?;
            run_script(session, classifier, &config)
        }
        None => run_interactive(session, &config, args.tick_ms),
    }
}

/// Replays a script tick by tick and prints the final state.
fn run_script(
    mut session: SessionController,
    mut classifier: ScriptedClassifier,
    config: &AppConfig,
) -> Result<()> {
    let frame = Frame::empty(config.image_side);
    let mut view = session.view();
    while !classifier.exhausted() {
        view = session.tick(classifier.classify(&frame));
    }
    println!("word:      {}", view.word);
    println!("sentence:  {}", view.sentence);
    println!("history:   {}", view.history_tail);
    if !view.suggestions.is_empty() {
        println!("suggested: {}", view.suggestions.join(", "));
    }
    Ok(())
}

/// Keyboard-driven classifier: reports the currently held sign every
/// tick, blank when none is held.
struct KeyboardClassifier {
    current: Symbol,
}

impl Classifier for KeyboardClassifier {
    fn classify(&mut self, _frame: &Frame) -> Option<Classification> {
        Some(Classification::new(self.current, 1.0))
    }
}

fn run_interactive(
    mut session: SessionController,
    config: &AppConfig,
    tick_ms: u64,
) -> Result<()> {
    let mut classifier = KeyboardClassifier {
        current: Symbol::Blank,
    };
    let frame = Frame::empty(config.image_side);

    terminal::enable_raw_mode()?;
    let result = (|| -> Result<()> {
        loop {
            if event::poll(Duration::from_millis(tick_ms))? {
                if let Event::Key(key) = event::read()? {
                    match translate_key(key) {
                        KeyAction::Quit => break,
                        KeyAction::Sign(symbol) => classifier.current = symbol,
                        KeyAction::Command(cmd) => session.handle(cmd),
                        KeyAction::None => {}
                    }
                }
            }
            let view = session.tick(classifier.classify(&frame));
            render(&view)?;
        }
        Ok(())
    })();
    terminal::disable_raw_mode()?;
    result
}

enum KeyAction {
    Quit,
    Sign(Symbol),
    Command(Command),
    None,
}

fn translate_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(' ') => KeyAction::Command(Command::CommitWord),
        KeyCode::Backspace => KeyAction::Command(Command::DeleteChar),
        KeyCode::Char('0') => KeyAction::Command(Command::ClearAll),
        KeyCode::Char(c @ '1'..='8') => {
            KeyAction::Command(Command::PickSuggestion(c as usize - '1' as usize))
        }
        KeyCode::Char('.') => KeyAction::Sign(Symbol::Blank),
        KeyCode::Char(c) => match Symbol::letter(c) {
            Some(symbol) => KeyAction::Sign(symbol),
            None => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn render(view: &TickView) -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    write!(out, "Sign-to-Text Simulator\r\n")?;
    write!(out, "----------------------------------------------\r\n")?;
    write!(out, "Hold a letter key to sign it, '.' for no sign.\r\n")?;
    write!(
        out,
        "[Space] commit  [Backspace] delete  [0] clear  [1-8] pick  [Esc] quit\r\n\r\n"
    )?;
    write!(
        out,
        "Detected: {}  ({:.2})\r\n",
        view.symbol_label, view.confidence
    )?;
    write!(out, "Word:     {}\r\n", view.word)?;
    write!(out, "Sentence: {}\r\n", view.sentence)?;
    write!(out, "History:  {}\r\n\r\n", view.history_tail)?;
    if view.suggestions.is_empty() {
        write!(out, "No suggestions.\r\n")?;
    } else {
        write!(out, "Suggestions:\r\n")?;
        for (i, w) in view.suggestions.iter().enumerate() {
            write!(out, "  {}: {}\r\n", i + 1, w)?;
        }
    }
    out.flush()?;
    Ok(())
}
