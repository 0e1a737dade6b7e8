//! Dictionary lookup for submitted words.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::words::LoadError;

/// Decides whether a submitted word is a real word.
///
/// `locale` is advisory; implementations backed by a single word list
/// ignore it.
pub trait SpellChecker {
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

/// Checker backed by a plain word list, one word per line, such as
/// `/usr/share/dict/words`.
pub struct WordSetChecker {
    words: HashSet<String>,
}

impl WordSetChecker {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path_str.clone(),
            source,
        })?;

        let checker = Self::from_words(text.lines());
        if checker.words.is_empty() {
            return Err(LoadError::Empty { path: path_str });
        }

        debug!(count = checker.words.len(), path = %path_str, "dictionary loaded");
        Ok(checker)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

impl SpellChecker for WordSetChecker {
    fn is_known_word(&self, word: &str, _locale: &str) -> bool {
        self.words.contains(word)
    }
}

/// Accepts every word. Stands in when no dictionary file is available.
pub struct PermissiveChecker;

impl SpellChecker for PermissiveChecker {
    fn is_known_word(&self, _word: &str, _locale: &str) -> bool {
        true
    }
}
