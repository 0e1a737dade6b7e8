//! Root word supply for the game.
//!
//! A session draws its root word from a [`WordListProvider`]. The list is
//! loaded fresh on every new round, so a file-backed list can change
//! between rounds without restarting the program.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// List compiled into the binary, used when the player supplies none.
const BUNDLED_WORDS: &str = include_str!("../../assets/start.txt");

/// A word list could not be produced. Callers treat this as fatal at
/// startup; mid-game it ends the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no words found in {path}")]
    Empty { path: String },
}

/// Supplies the pool of root words a session picks from.
///
/// Implementations must return at least one word or fail with
/// [`LoadError`]; an empty pool is never handed to the game.
pub trait WordListProvider {
    fn load_root_words(&self) -> Result<Vec<String>, LoadError>;
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Word list backed by a newline-separated text file.
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordListProvider for FileWordList {
    fn load_root_words(&self) -> Result<Vec<String>, LoadError> {
        let path = self.path.display().to_string();
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        let words = parse_words(text.lines());
        if words.is_empty() {
            return Err(LoadError::Empty { path });
        }

        debug!(count = words.len(), %path, "word list loaded");
        Ok(words)
    }
}

/// In-memory word list.
pub struct StaticWordList {
    words: Vec<String>,
}

impl StaticWordList {
    pub fn new<I, S>(words: I) -> Self
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

    /// The list shipped inside the binary.
    pub fn bundled() -> Self {
        Self {
            words: parse_words(BUNDLED_WORDS.lines()),
        }
    }
}

impl WordListProvider for StaticWordList {
    fn load_root_words(&self) -> Result<Vec<String>, LoadError> {
        if self.words.is_empty() {
            return Err(LoadError::Empty {
                path: "static word list".to_string(),
            });
        }
        Ok(self.words.clone())
    }
}
