//! Shared value types for the per-tick classification stream.

/// Number of letter classes the classifier can emit (A through Z).
pub const ALPHABET_LEN: usize = 26;

/// One classifier output class per tick: a letter, or the blank sentinel
/// emitted when no sign is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Blank,
    /// Letter index 0..26, where 0 is 'A'.
    Letter(u8),
}

impl Symbol {
    /// Builds a letter symbol from an ASCII alphabetic character.
    pub fn letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Symbol::Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Parses a display label, the inverse of [`Symbol::label`].
    pub fn parse(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("blank") {
            return Some(Symbol::Blank);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::letter(c),
            _ => None,
        }
    }

    /// The uppercase character for a letter symbol, `None` for blank.
    pub fn to_char(self) -> Option<char> {
        match self {
            Symbol::Blank => None,
            Symbol::Letter(i) => Some((b'A' + i) as char),
        }
    }

    /// Zero-based alphabet index for a letter symbol.
    pub fn index(self) -> Option<usize> {
        match self {
            Symbol::Blank => None,
            Symbol::Letter(i) => Some(i as usize),
        }
    }

    /// Human-readable label: "A".."Z" or "blank".
    pub fn label(self) -> String {
        match self.to_char() {
            Some(c) => c.to_string(),
            None => "blank".to_string(),
        }
    }
}

/// The classifier's verdict for one tick. Consumed once by the debouncer
/// and not retained.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub symbol: Symbol,
    /// Model confidence in [0, 1]. Carried through to the display; the
    /// debouncer does not act on it.
    pub confidence: f32,
}

impl Classification {
    pub fn new(symbol: Symbol, confidence: f32) -> Self {
        Self { symbol, confidence }
    }
}
