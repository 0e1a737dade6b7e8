//! Submission rules: what it takes for a word to be accepted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::spell::SpellChecker;

use super::session::Session;

/// Shortest word that counts.
pub const MIN_WORD_LEN: usize = 3;

/// Why a submission was refused. Every reason is recoverable; the session
/// is left untouched in all cases.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("type a word first")]
    Empty,
    #[error("words need at least {} letters", MIN_WORD_LEN)]
    TooShort,
    #[error("using the root word is cheating")]
    IsRootWord,
    #[error("be more original")]
    AlreadyUsed,
    #[error("you can't spell that from '{root}'")]
    NotSubset { root: String },
    #[error("you can't just make words up")]
    NotARealWord,
}

impl RejectReason {
    /// Short headline for the UI; `Display` carries the detail line.
    pub fn title(&self) -> &'static str {
        match self {
            RejectReason::Empty => "Nothing entered",
            RejectReason::TooShort => "Word too short",
            RejectReason::IsRootWord => "Word is the root",
            RejectReason::AlreadyUsed => "Word used already",
            RejectReason::NotSubset { .. } => "Word not possible",
            RejectReason::NotARealWord => "Word not recognized",
        }
    }
}

/// Lowercase and strip surrounding whitespace. Submissions are compared
/// in this form everywhere.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a raw submission against the session. Structural checks run
/// first and the dictionary lookup last, so one bad submission costs at
/// most one checker call. Returns the normalized word on success; the
/// session itself is never mutated here.
pub fn validate(
    raw: &str,
    session: &Session,
    checker: &dyn SpellChecker,
    locale: &str,
) -> Result<String, RejectReason> {
    let word = normalize(raw);

    if word.is_empty() {
        return Err(RejectReason::Empty);
    }
    if word.chars().count() < MIN_WORD_LEN {
        return Err(RejectReason::TooShort);
    }
    if word == session.root_word() {
        return Err(RejectReason::IsRootWord);
    }
    if session.used_words().contains(&word) {
        return Err(RejectReason::AlreadyUsed);
    }
    if !is_formable_from(&word, session.root_word()) {
        return Err(RejectReason::NotSubset {
            root: session.root_word().to_string(),
        });
    }
    if !checker.is_known_word(&word, locale) {
        return Err(RejectReason::NotARealWord);
    }

    Ok(word)
}

/// True when `word` can be assembled from `root`'s letters, consuming
/// each occurrence at most once.
fn is_formable_from(word: &str, root: &str) -> bool {
    let mut pool: Vec<char> = root.chars().collect();

    for letter in word.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(i) => {
                pool.swap_remove(i);
            }
            None => return false,
        }
    }

    true
}
