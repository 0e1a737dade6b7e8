pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::core::game::Game;
pub use crate::games::scramble::{RejectReason, ScrambleGame, Session};
