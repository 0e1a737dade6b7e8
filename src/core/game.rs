/// Core game interface for the wordterm engine
use crossterm::event::KeyEvent;

/// Trait the engine drives: the game owns its state, the engine owns the
/// terminal and the event loop.
pub trait Game {
    /// Process one key event from the player. Esc never reaches the game;
    /// the engine reserves it for quitting.
    fn handle_input(&mut self, key: KeyEvent);

    /// Draw the current state into the frame.
    fn render(&self, frame: &mut ratatui::Frame);

    /// When true, the engine leaves its loop after the current frame.
    fn finished(&self) -> bool {
        false
    }
}
