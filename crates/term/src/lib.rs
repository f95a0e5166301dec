//! Terminal rendering for Piezas.
//!
//! A small, game-oriented rendering layer: views draw into a framebuffer,
//! and [`TerminalRenderer`] flushes it to the terminal, re-emitting only what
//! changed since the previous frame.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use piezas_core as core;
pub use piezas_types as types;

pub use board_view::{outcome_text, BoardView, Viewport, MAX_CELL_H, MAX_CELL_W};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_frame_into, TerminalRenderer};
