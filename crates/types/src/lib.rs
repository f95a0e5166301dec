//! Shared types - board dimensions, pieces and player actions
//!
//! Everything here is plain data with no dependencies, so the rules engine,
//! the input layer and the terminal view can all agree on one vocabulary.
//!
//! # Board Dimensions
//!
//! The board is fixed at compile time:
//!
//! - **Rows**: 3 (row 0 is the bottom, pieces stack upward)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! ```text
//! [2,0][2,1][2,2][2,3]
//! [1,0][1,1][1,2][1,3]
//! [0,0][0,1][0,2][0,3]
//! ```
//!
//! # Examples
//!
//! ```
//! use piezas_types::{Piece, Player, COLS, ROWS};
//!
//! assert_eq!(ROWS, 3);
//! assert_eq!(COLS, 4);
//!
//! let p = Player::X;
//! assert_eq!(p.opponent(), Player::O);
//! assert_eq!(Piece::from(p), Piece::X);
//!
//! assert_eq!(Piece::from_char('o'), Some(Piece::O));
//! assert_eq!(Piece::Blank.as_char(), '.');
//! ```

/// Board height in cells (3 rows)
pub const ROWS: usize = 3;

/// Board width in cells (4 columns)
pub const COLS: usize = 4;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = ROWS * COLS;

/// The value reported for a board location or a move result
///
/// - **Blank**: empty cell, or a drop into a full column
/// - **X** / **O**: the two players' pieces
/// - **Invalid**: out-of-bounds coordinates, illegal column, or "game not over"
///
/// `Invalid` is only ever returned, never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Blank,
    X,
    O,
    Invalid,
}

impl Piece {
    /// Parse from a single character (case-insensitive)
    ///
    /// ```
    /// use piezas_types::Piece;
    ///
    /// assert_eq!(Piece::from_char('x'), Some(Piece::X));
    /// assert_eq!(Piece::from_char('O'), Some(Piece::O));
    /// assert_eq!(Piece::from_char('.'), Some(Piece::Blank));
    /// assert_eq!(Piece::from_char('?'), Some(Piece::Invalid));
    /// assert_eq!(Piece::from_char('z'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Piece::X),
            'o' => Some(Piece::O),
            '.' | ' ' => Some(Piece::Blank),
            '?' => Some(Piece::Invalid),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Piece::Blank => '.',
            Piece::X => 'X',
            Piece::O => 'O',
            Piece::Invalid => '?',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Piece::Blank => "blank",
            Piece::X => "x",
            Piece::O => "o",
            Piece::Invalid => "invalid",
        }
    }

    /// The player owning this piece, if it is one of X/O
    pub fn player(&self) -> Option<Player> {
        match self {
            Piece::X => Some(Player::X),
            Piece::O => Some(Player::O),
            Piece::Blank | Piece::Invalid => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the two players; also the current-turn flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    ///
    /// ```
    /// use piezas_types::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_char(&self) -> char {
        Piece::from(*self).as_char()
    }
}

impl From<Player> for Piece {
    fn from(value: Player) -> Self {
        match value {
            Player::X => Piece::X,
            Player::O => Piece::O,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty (reported as [`Piece::Blank`])
/// - `Some(Player)`: occupied by that player's piece
///
/// Storing cells this way keeps [`Piece::Invalid`] out of the grid.
pub type Cell = Option<Player>;

/// Convert a stored cell into its reported piece value
#[inline]
pub fn cell_piece(cell: Cell) -> Piece {
    cell.map_or(Piece::Blank, Piece::from)
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    /// Drop into the column under the cursor
    DropAtCursor,
    /// Drop straight into a column; may be out of range
    DropColumn(i32),
    /// Clear the board, keep the turn
    ResetBoard,
    /// Fresh engine, X to move
    NewGame,
}
