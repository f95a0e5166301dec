use crate::rules::{Outcome, RunTally};
use crate::types::{Piece, Player, COLS, ROWS};

/// Copyable view of an engine for renderers
///
/// `cells[row][col]` uses the engine's coordinates: row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[Piece; COLS]; ROWS],
    pub turn: Player,
    pub outcome: Outcome,
    pub runs: Option<RunTally>,
    pub last_landing: Option<(usize, usize)>,
    pub attempts: u32,
}

impl GameSnapshot {
    /// Pieces placed so far
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.player().is_some())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Piece::Blank; COLS]; ROWS],
            turn: Player::X,
            outcome: Outcome::InProgress,
            runs: None,
            last_landing: None,
            attempts: 0,
        }
    }
}
