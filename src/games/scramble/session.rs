use serde::{Deserialize, Serialize};

/// One round of play: the root word and every submission accepted so far.
///
/// `used_words` keeps the most recent word first and never holds
/// duplicates; `score` is the running sum of accepted word lengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl Session {
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: root_word.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Record an already validated word. All submissions go through
    /// [`super::game::ScrambleGame::submit`]; this does no checking of
    /// its own.
    pub(crate) fn accept(&mut self, word: String) {
        self.score += word.chars().count() as u32;
        self.used_words.insert(0, word);
    }
}
