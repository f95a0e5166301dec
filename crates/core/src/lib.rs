//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the Piezas rules engine: a two-player gravity game on a
//! fixed 3x4 board. It has **zero dependencies** on UI or I/O.
//!
//! # Module Structure
//!
//! - [`board`]: 3x4 grid with bounds-checked access and column drops
//! - [`game_state`]: the [`Piezas`] engine (turn flag, drops, queries, evaluation)
//! - [`rules`]: longest-run scoring of a full board and the tie-break
//! - [`snapshot`]: copyable engine view for renderers
//!
//! # Game Rules
//!
//! - **X moves first.** The turn passes after every drop attempt, including
//!   drops into a full column or a column that does not exist.
//! - **Gravity**: a piece lands on the lowest empty cell of its column.
//! - **End of game**: only when every cell is filled.
//! - **Winner**: the player with the longest horizontal or vertical line.
//!   Equal longest lines are a tie. Diagonals are not counted.
//!
//! Results use the [`Piece`](types::Piece) sentinel encoding:
//!
//! | Call | `Invalid` | `Blank` | `X` / `O` |
//! |------|-----------|---------|-----------|
//! | `drop_piece` | column out of range | column full | piece placed |
//! | `piece_at` | out of bounds | empty cell | occupied cell |
//! | `game_state` | game not over | tie | winner |
//!
//! # Example
//!
//! ```
//! use piezas_core::Piezas;
//! use piezas_core::types::Piece;
//!
//! let mut game = Piezas::new();
//! assert_eq!(game.drop_piece(0), Piece::X);
//! assert_eq!(game.drop_piece(0), Piece::O);
//! assert_eq!(game.piece_at(1, 0), Piece::O);
//!
//! // Out-of-range column: rejected, and O's turn is spent.
//! assert_eq!(game.drop_piece(4), Piece::Invalid);
//!
//! assert_eq!(game.game_state(), Piece::Invalid); // not over yet
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use piezas_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::Piezas;
pub use rules::{evaluate, run_tally, Outcome, RunTally};
pub use snapshot::GameSnapshot;
