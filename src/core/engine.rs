use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::core::game::Game;

/// How long one event poll blocks before the screen is redrawn anyway.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Synchronous terminal loop that draws the game and feeds it key events.
/// Everything runs on the caller's thread; one key event is processed to
/// completion before the next is read.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the player quits with Esc or the game reports finished.
    /// The game is handed back so the caller can inspect its final state.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    // Windows terminals also report key releases
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Esc {
                        break;
                    }
                    self.game.handle_input(key);
                }
            }

            if self.game.finished() {
                break;
            }
        }

        Ok(self.game)
    }
}
