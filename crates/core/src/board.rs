//! Board module - manages the game grid
//!
//! The board is a 3x4 grid where each cell is empty or holds one player's piece.
//! Uses a flat array, row-major, with no allocation.
//! Coordinates: (row, col) where row 0 is the bottom and col 0 is the left edge.
//! Pieces dropped into a column stack upward from row 0.

use arrayvec::ArrayVec;

use crate::types::{cell_piece, Cell, Piece, Player, BOARD_SIZE, COLS, ROWS};

/// The game board - 3 rows x 4 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= ROWS as i32 || col < 0 || col >= COLS as i32 {
            return None;
        }
        Some((row as usize) * COLS + (col as usize))
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Piece at (row, col), `Invalid` when out of bounds
    pub fn piece(&self, row: i32, col: i32) -> Piece {
        self.get(row, col).map_or(Piece::Invalid, cell_piece)
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is in bounds and empty
    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Number of pieces stacked in a column (0 for out-of-range columns)
    pub fn column_height(&self, col: i32) -> usize {
        if Self::index(0, col).is_none() {
            return 0;
        }
        (0..ROWS as i32)
            .take_while(|&row| !self.is_empty_at(row, col))
            .count()
    }

    /// Row a piece dropped into `col` would land on
    ///
    /// Scans from the top row down and keeps the lowest empty cell, so the
    /// result is the bottom-most unoccupied cell. `None` for a full or
    /// out-of-range column.
    pub fn landing_row(&self, col: i32) -> Option<usize> {
        let mut landing = None;
        for row in (0..ROWS as i32).rev() {
            if !self.is_empty_at(row, col) {
                break;
            }
            landing = Some(row as usize);
        }
        landing
    }

    /// Place `player`'s piece on top of column `col`
    ///
    /// Returns the landing row, or None if the column is full or out of range.
    pub fn drop_in(&mut self, col: i32, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.set(row as i32, col, Some(player));
        Some(row)
    }

    /// Columns that can still take a piece, left to right
    pub fn open_columns(&self) -> ArrayVec<usize, COLS> {
        (0..COLS)
            .filter(|&col| self.landing_row(col as i32).is_some())
            .collect()
    }

    /// True when no cell is empty; stops at the first empty cell
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// One row, left to right; empty when out of range
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= ROWS {
            return &[];
        }
        let start = row * COLS;
        &self.cells[start..start + COLS]
    }

    /// One column, bottom to top; empty when out of range
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        let rows = if col < COLS { 0..ROWS } else { 0..0 };
        rows.map(move |row| self.cells[row * COLS + col])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows given bottom first, e.g. `["XXXO", "OOOX", "XXOX"]`
    ///
    /// Characters are read with [`Piece::from_char`]; anything that is not
    /// `X` or `O` becomes an empty cell.
    #[cfg(test)]
    pub fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), COLS);
            for (col, ch) in line.chars().enumerate() {
                let cell = Piece::from_char(ch).and_then(|p| p.player());
                board.set(row as i32, col as i32, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
