//! Outcome rules - longest-run scoring of a full board
//!
//! The game only ends when every cell is filled. The winner is whoever owns the
//! longest unbroken horizontal or vertical line of pieces anywhere on the
//! board; diagonals do not count. Equal longest lines are a tie.

use crate::board::Board;
use crate::types::{Cell, Piece, Player, COLS, ROWS};

/// Longest run seen for each player, across rows and columns combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunTally {
    pub x: usize,
    pub o: usize,
}

impl RunTally {
    /// Fold a completed run into the owner's maximum
    fn record(&mut self, player: Player, len: usize) {
        let best = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        if len > *best {
            *best = len;
        }
    }

    /// Walk one line, recording each run of identical pieces as it ends
    ///
    /// Empty cells end a run without being recorded.
    fn scan_line(&mut self, line: impl IntoIterator<Item = Cell>) {
        let mut current: Cell = None;
        let mut len = 0;
        for cell in line {
            if cell == current {
                len += 1;
                continue;
            }
            if let Some(player) = current {
                self.record(player, len);
            }
            current = cell;
            len = 1;
        }
        if let Some(player) = current {
            self.record(player, len);
        }
    }

    /// Tally every row, then every column
    pub fn of_board(board: &Board) -> Self {
        let mut tally = Self::default();
        for row in 0..ROWS {
            tally.scan_line(board.row(row).iter().copied());
        }
        for col in 0..COLS {
            tally.scan_line(board.column(col));
        }
        tally
    }

    /// Longer maximum wins; equal maxima tie
    pub fn outcome(&self) -> Outcome {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::X),
            std::cmp::Ordering::Less => Outcome::Winner(Player::O),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Verdict in the sentinel encoding: `X`, `O`, or `Blank` for a tie
    pub fn verdict(&self) -> Piece {
        self.outcome().into()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// At least one cell is still empty
    InProgress,
    Winner(Player),
    Tie,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// `InProgress` is `Invalid`, a tie is `Blank`, a win is the winner's piece
impl From<Outcome> for Piece {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::InProgress => Piece::Invalid,
            Outcome::Winner(player) => player.into(),
            Outcome::Tie => Piece::Blank,
        }
    }
}

/// Run tally of a full board, or None while any cell is empty
pub fn run_tally(board: &Board) -> Option<RunTally> {
    if !board.is_full() {
        return None;
    }
    Some(RunTally::of_board(board))
}

/// Evaluate a board
pub fn evaluate(board: &Board) -> Outcome {
    run_tally(board).map_or(Outcome::InProgress, |tally| tally.outcome())
}
