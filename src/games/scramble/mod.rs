/// Word scramble game: make words from the letters of a root word.
pub mod app;
pub mod game;
pub mod renderer;
pub mod rules;
pub mod session;

pub use app::ScrambleApp;
pub use game::ScrambleGame;
pub use rules::{RejectReason, MIN_WORD_LEN};
pub use session::Session;
