//! Game state module - the Piezas board engine
//!
//! Owns the board and the turn flag. Every drop attempt consumes a turn,
//! whether it lands, hits a full column, or names a column that does not exist.

use crate::board::Board;
use crate::rules::{self, Outcome, RunTally};
use crate::snapshot::GameSnapshot;
use crate::types::{cell_piece, Piece, Player, COLS, ROWS};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piezas {
    board: Board,
    turn: Player,
    /// Cell filled by the most recent successful drop, as (row, col).
    last_landing: Option<(usize, usize)>,
    /// Drop attempts since creation, including rejected ones.
    attempts: u32,
}

impl Piezas {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            last_landing: None,
            attempts: 0,
        }
    }

    /// Clear every cell back to blank
    ///
    /// The turn is left as it is: a reset in the middle of a game hands the
    /// next move to whoever was due to play.
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_landing = None;
    }

    /// Drop the current player's piece into `column`
    ///
    /// Returns:
    /// - `Invalid` if `column` is outside `0..COLS`
    /// - `Blank` if the column is already full
    /// - the placed piece otherwise
    ///
    /// The turn passes to the other player in all three cases.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let mover = self.turn;
        self.turn = mover.opponent();
        self.attempts = self.attempts.wrapping_add(1);

        if column < 0 || column >= COLS as i32 {
            return Piece::Invalid;
        }

        match self.board.drop_in(column, mover) {
            Some(row) => {
                self.last_landing = Some((row, column as usize));
                self.piece_at(row as i32, column)
            }
            None => Piece::Blank,
        }
    }

    /// Piece at (row, column), `Invalid` when out of bounds
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        self.board.piece(row, column)
    }

    /// `Invalid` while any cell is blank, otherwise the winner (`X`/`O`) or
    /// `Blank` for a tie
    pub fn game_state(&self) -> Piece {
        self.outcome().into()
    }

    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Longest-run maxima, once the board is full
    pub fn run_tally(&self) -> Option<RunTally> {
        rules::run_tally(&self.board)
    }

    /// Player whose piece the next drop will place
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_landing(&self) -> Option<(usize, usize)> {
        self.last_landing
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Fill a caller-owned snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for row in 0..ROWS {
            for (col, cell) in self.board.row(row).iter().enumerate() {
                out.cells[row][col] = cell_piece(*cell);
            }
        }
        out.turn = self.turn;
        out.outcome = self.outcome();
        out.runs = self.run_tally();
        out.last_landing = self.last_landing;
        out.attempts = self.attempts;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Piezas {
    fn default() -> Self {
        Self::new()
    }
}
