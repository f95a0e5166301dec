//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and keeps the
//! column cursor, producing [`Command`]s for the game loop.

pub mod handler;
pub mod map;

pub use piezas_types as types;

pub use handler::{Command, InputHandler, MAX_BATCH};
pub use map::{handle_key_event, should_quit};
