//! Sign-to-text core: turns a noisy per-tick stream of sign-language
//! letter classifications into confirmed characters, words and sentences,
//! with ranked word-completion suggestions.

pub mod classify;
pub mod config;
pub mod core;
pub mod fuzzy;
pub mod session;
pub mod suggest;

pub use crate::core::debounce::Debouncer;
pub use crate::session::{Command, SessionController, TickView};
pub use crate::suggest::engine::SuggestionEngine;
