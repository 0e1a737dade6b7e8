use rand::Rng;
use tracing::{debug, info};

use crate::core::spell::SpellChecker;
use crate::core::words::{LoadError, WordListProvider};

use super::rules::{self, RejectReason};
use super::session::Session;

/// Callback fired after every session mutation (accepted word, new round).
pub type ChangeListener = Box<dyn FnMut(&Session)>;

/// Owns the live session plus the collaborators every submission flows
/// through. One writer, no shared state: callers drive it from a single
/// thread and each call runs to completion.
pub struct ScrambleGame {
    provider: Box<dyn WordListProvider>,
    checker: Box<dyn SpellChecker>,
    locale: String,
    session: Session,
    listener: Option<ChangeListener>,
}

impl ScrambleGame {
    /// Start a round with a freshly picked root word. Fails only when the
    /// word list cannot be loaded.
    pub fn start(
        provider: Box<dyn WordListProvider>,
        checker: Box<dyn SpellChecker>,
        locale: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let session = pick_session(provider.as_ref())?;
        info!(root = %session.root_word(), "session started");

        Ok(Self {
            provider,
            checker,
            locale: locale.into(),
            session,
            listener: None,
        })
    }

    /// Throw the current round away and pick a new root word. The word
    /// list is re-read, so a file-backed pool can change between rounds.
    pub fn restart(&mut self) -> Result<(), LoadError> {
        self.session = pick_session(self.provider.as_ref())?;
        info!(root = %self.session.root_word(), "session restarted");
        self.notify();
        Ok(())
    }

    /// Validate one submission; on success the normalized word joins the
    /// session and is returned. On rejection the session is unchanged.
    pub fn submit(&mut self, raw: &str) -> Result<String, RejectReason> {
        match rules::validate(raw, &self.session, self.checker.as_ref(), &self.locale) {
            Ok(word) => {
                self.session.accept(word.clone());
                debug!(word = %word, score = self.session.score(), "word accepted");
                self.notify();
                Ok(word)
            }
            Err(reason) => {
                debug!(%reason, "word rejected");
                Err(reason)
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register the presentation callback. It fires after each accepted
    /// submission and each restart, with the session it should show.
    pub fn on_change(&mut self, listener: impl FnMut(&Session) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.session);
        }
    }
}

fn pick_session(provider: &dyn WordListProvider) -> Result<Session, LoadError> {
    // Providers guarantee a non-empty list or a LoadError.
    let words = provider.load_root_words()?;
    let root = &words[rand::rng().random_range(0..words.len())];
    Ok(Session::new(root))
}
