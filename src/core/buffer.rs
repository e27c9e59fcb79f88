//! Word and sentence buffers mutated by confirmations and user commands.

/// The word currently being typed. Mutated only by debounced appends,
/// delete-last, clear, and suggestion-acceptance replacement.
#[derive(Debug, Clone, Default)]
pub struct WordBuffer {
    chars: String,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Removes the last character, if any.
    pub fn delete_last(&mut self) {
        self.chars.pop();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Replaces the whole word, used when a suggestion is accepted.
    pub fn replace(&mut self, word: &str) {
        self.chars.clear();
        self.chars.push_str(word);
    }

    /// Empties the buffer and returns its contents.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.chars)
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Committed words, rendered space-joined.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuffer {
    words: Vec<String>,
}

impl SentenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_word(&mut self, word: String) {
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn to_text(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_buffer_edits() {
        let mut w = WordBuffer::new();
        w.push_char('H');
        w.push_char('I');
        assert_eq!(w.as_str(), "HI");
        w.delete_last();
        assert_eq!(w.as_str(), "H");
        w.delete_last();
        w.delete_last(); // deleting from empty is a no-op
        assert!(w.is_empty());
        w.replace("HELLO");
        assert_eq!(w.take(), "HELLO");
        assert!(w.is_empty());
    }

    #[test]
    fn sentence_joins_with_spaces() {
        let mut s = SentenceBuffer::new();
        s.push_word("HELLO".into());
        s.push_word("WORLD".into());
        assert_eq!(s.to_text(), "HELLO WORLD");
        s.push_word(String::new()); // empty commits are dropped
        assert_eq!(s.words().len(), 2);
        s.clear();
        assert_eq!(s.to_text(), "");
    }
}
