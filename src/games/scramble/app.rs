use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::game::Game;
use crate::core::words::LoadError;

use super::game::ScrambleGame;
use super::renderer;
use super::rules::RejectReason;

/// What the status line shows about the last submission.
pub enum Feedback {
    Welcome,
    Accepted { word: String, gained: u32 },
    Rejected(RejectReason),
}

/// Terminal front end for one [`ScrambleGame`]: collects keystrokes into
/// an input line and feeds submissions to the game.
pub struct ScrambleApp {
    game: ScrambleGame,
    input: String,
    feedback: Feedback,
    fatal: Option<LoadError>,
}

impl ScrambleApp {
    pub fn new(game: ScrambleGame) -> Self {
        Self {
            game,
            input: String::new(),
            feedback: Feedback::Welcome,
            fatal: None,
        }
    }

    pub fn session(&self) -> &super::session::Session {
        self.game.session()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// A restart that failed to load the word list, surfaced after the
    /// terminal is torn down.
    pub fn into_fatal_error(self) -> Option<LoadError> {
        self.fatal
    }

    fn submit_current(&mut self) {
        let raw = std::mem::take(&mut self.input);
        // Empty submits are ignored rather than scolded.
        if raw.trim().is_empty() {
            return;
        }

        match self.game.submit(&raw) {
            Ok(word) => {
                let gained = word.chars().count() as u32;
                self.feedback = Feedback::Accepted { word, gained };
            }
            Err(reason) => self.feedback = Feedback::Rejected(reason),
        }
    }

    fn restart(&mut self) {
        match self.game.restart() {
            Ok(()) => {
                self.input.clear();
                self.feedback = Feedback::Welcome;
            }
            Err(err) => self.fatal = Some(err),
        }
    }
}

impl Game for ScrambleApp {
    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Enter => self.submit_current(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::draw(frame, self);
    }

    fn finished(&self) -> bool {
        self.fatal.is_some()
    }
}
