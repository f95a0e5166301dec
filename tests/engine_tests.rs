//! Engine tests - drop, query, reset and outcome through the public API

use piezas::core::Piezas;
use piezas::types::{Piece, Player, COLS, ROWS};

fn all_blank(game: &Piezas) -> bool {
    (0..ROWS as i32).all(|row| (0..COLS as i32).all(|col| game.piece_at(row, col) == Piece::Blank))
}

fn play(columns: &[i32]) -> Piezas {
    let mut game = Piezas::new();
    for &col in columns {
        game.drop_piece(col);
    }
    game
}

/* CONSTRUCTOR ------------------------------------------------------------- */

#[test]
fn test_new_board_is_blank() {
    let game = Piezas::new();
    assert!(all_blank(&game));
    assert_eq!(game.game_state(), Piece::Invalid);
    assert_eq!(game.turn(), Player::X);
}

/* DROP PIECE -------------------------------------------------------------- */

#[test]
fn test_drop_out_of_range_is_invalid() {
    let mut game = Piezas::new();
    assert_eq!(game.drop_piece(-1), Piece::Invalid);
    assert_eq!(game.drop_piece(COLS as i32), Piece::Invalid);
    assert_eq!(game.drop_piece(i32::MAX), Piece::Invalid);
    assert_eq!(game.drop_piece(i32::MIN), Piece::Invalid);
    assert!(all_blank(&game));
}

#[test]
fn test_drop_out_of_range_leaves_partial_board_unchanged() {
    let mut game = play(&[0, 1, 1, 3, 3, 3]);
    let before = game.board().clone();

    assert_eq!(game.drop_piece(-1), Piece::Invalid);
    assert_eq!(game.drop_piece(COLS as i32), Piece::Invalid);
    assert_eq!(game.board(), &before);
    assert_eq!(game.piece_at(1, 1), Piece::X);
    assert_eq!(game.piece_at(2, 3), Piece::O);
}

#[test]
fn test_drop_lands_at_bottom() {
    let mut game = Piezas::new();
    assert_eq!(game.drop_piece(0), Piece::X);
    assert_eq!(game.piece_at(0, 0), Piece::X);
    assert_eq!(game.piece_at(1, 0), Piece::Blank);
}

#[test]
fn test_consecutive_drops_alternate() {
    let mut game = Piezas::new();
    let p1 = game.drop_piece(0);
    let p2 = game.drop_piece(0);
    assert_ne!(p1, p2);
    assert_eq!(game.piece_at(1, 0), p2);
}

#[test]
fn test_column_fills_bottom_up_then_rejects() {
    let mut game = Piezas::new();
    let placed: Vec<Piece> = (0..ROWS).map(|_| game.drop_piece(2)).collect();
    assert_eq!(placed, vec![Piece::X, Piece::O, Piece::X]);
    for (row, piece) in placed.iter().enumerate() {
        assert_eq!(game.piece_at(row as i32, 2), *piece);
    }

    let before = game.clone();
    assert_eq!(game.drop_piece(2), Piece::Blank);
    assert_eq!(game.board(), before.board());
}

#[test]
fn test_full_column_still_passes_turn() {
    let mut game = Piezas::new();
    for _ in 0..ROWS {
        game.drop_piece(0);
    }
    let last = game.piece_at(ROWS as i32 - 1, 0);
    game.drop_piece(0);
    game.drop_piece(1);
    assert_eq!(game.piece_at(0, 1), last);

    let mut game = Piezas::new();
    for _ in 0..ROWS {
        game.drop_piece(0);
    }
    let last = game.piece_at(ROWS as i32 - 1, 0);
    game.drop_piece(1);
    assert_ne!(game.piece_at(0, 1), last);
}

#[test]
fn test_invalid_column_passes_turn() {
    let mut game = Piezas::new();
    game.drop_piece(-1);
    assert_eq!(game.drop_piece(0), Piece::O);
    game.drop_piece(COLS as i32);
    assert_eq!(game.drop_piece(0), Piece::O);
}

/* RESET ------------------------------------------------------------------- */

#[test]
fn test_reset_after_one_drop() {
    let mut game = Piezas::new();
    game.drop_piece(0);
    game.reset();
    assert!(all_blank(&game));
}

#[test]
fn test_reset_after_full_board() {
    let mut game = Piezas::new();
    for _ in 0..ROWS {
        for col in 0..COLS as i32 {
            game.drop_piece(col);
        }
    }
    assert_ne!(game.game_state(), Piece::Invalid);
    game.reset();
    assert!(all_blank(&game));
    assert_eq!(game.game_state(), Piece::Invalid);
}

#[test]
fn test_reset_keeps_turn() {
    let mut game = Piezas::new();
    game.drop_piece(0);
    game.reset();
    assert_eq!(game.turn(), Player::O);
    assert_eq!(game.drop_piece(0), Piece::O);
}

#[test]
fn test_reset_twice_same_as_once() {
    let mut once = play(&[0, 1, 1, 3]);
    let mut twice = once.clone();
    once.reset();
    twice.reset();
    twice.reset();
    assert_eq!(once, twice);
}

/* PIECE AT ---------------------------------------------------------------- */

#[test]
fn test_piece_at_out_of_bounds() {
    let game = play(&[0, 1, 2, 3]);
    assert_eq!(game.piece_at(-1, 0), Piece::Invalid);
    assert_eq!(game.piece_at(ROWS as i32, 0), Piece::Invalid);
    assert_eq!(game.piece_at(0, -1), Piece::Invalid);
    assert_eq!(game.piece_at(0, COLS as i32), Piece::Invalid);
    assert_eq!(game.piece_at(-1, -1), Piece::Invalid);
}

#[test]
fn test_piece_at_blank_and_placed() {
    let game = play(&[0]);
    assert_eq!(game.piece_at(0, 1), Piece::Blank);
    assert_eq!(game.piece_at(0, 0), Piece::X);
}

/* GAME STATE -------------------------------------------------------------- */

#[test]
fn test_game_state_horizontal_winner() {
    let game = play(&[0, 0, 1, 1, 2, 3, 0, 0, 1, 1, 2, 3, 3, 2]);
    assert_eq!(game.game_state(), Piece::X);
}

#[test]
fn test_game_state_vertical_winner() {
    let game = play(&[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 4, 3, 4, 3]);
    assert_eq!(game.game_state(), Piece::O);
    for row in 0..ROWS as i32 {
        assert_eq!(game.piece_at(row, 3), Piece::O);
    }
}

#[test]
fn test_game_state_not_over() {
    assert_eq!(Piezas::new().game_state(), Piece::Invalid);
    // One cell short of full.
    let game = play(&[0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2]);
    assert_eq!(game.game_state(), Piece::Invalid);
}

#[test]
fn test_game_state_tie_with_equal_columns() {
    // Rows X O X O, so every column is a run of 3.
    let game = play(&[0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(game.game_state(), Piece::Blank);
}

#[test]
fn test_game_state_tie_on_checkerboard() {
    let game = play(&[0, 1, 2, 3, 1, 0, 3, 2, 0, 1, 2, 3]);
    let tally = game.run_tally().unwrap();
    assert_eq!((tally.x, tally.o), (1, 1));
    assert_eq!(game.game_state(), Piece::Blank);
}
