//! Column cursor and action resolution.
//!
//! Turns [`GameAction`]s into [`Command`]s the game loop applies to the engine.
//! Cursor movement is handled here and never reaches the engine.

use crossterm::event::KeyEvent;

use arrayvec::ArrayVec;

use crate::map::handle_key_event;
use crate::types::{GameAction, COLS};

/// Most commands resolved from one batch of key events.
pub const MAX_BATCH: usize = 16;

/// What the game loop should do to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop into this column (unchecked).
    Drop(i32),
    ResetBoard,
    NewGame,
}

/// Tracks the selected column.
#[derive(Debug, Clone)]
pub struct InputHandler {
    cursor: usize,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_cursor(0)
    }

    /// Start with the cursor on `col`, clamped to the board.
    pub fn with_cursor(col: usize) -> Self {
        Self {
            cursor: col.min(COLS - 1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_action(&mut self, action: GameAction) -> Option<Command> {
        match action {
            GameAction::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            GameAction::CursorRight => {
                if self.cursor + 1 < COLS {
                    self.cursor += 1;
                }
                None
            }
            GameAction::DropAtCursor => Some(Command::Drop(self.cursor as i32)),
            GameAction::DropColumn(col) => {
                if (0..COLS as i32).contains(&col) {
                    self.cursor = col as usize;
                }
                Some(Command::Drop(col))
            }
            GameAction::ResetBoard => Some(Command::ResetBoard),
            GameAction::NewGame => {
                self.cursor = 0;
                Some(Command::NewGame)
            }
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<Command> {
        handle_key_event(key).and_then(|action| self.handle_action(action))
    }

    /// Resolve a burst of key presses in order.
    ///
    /// Commands past [`MAX_BATCH`] are dropped.
    pub fn handle_keys(&mut self, keys: impl IntoIterator<Item = KeyEvent>) -> ArrayVec<Command, MAX_BATCH> {
        let mut commands = ArrayVec::new();
        for key in keys {
            if let Some(cmd) = self.handle_key_press(key) {
                let _ = commands.try_push(cmd);
            }
        }
        commands
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_action(GameAction::CursorLeft), None);
        assert_eq!(ih.cursor(), 0);

        for _ in 0..COLS + 2 {
            ih.handle_action(GameAction::CursorRight);
        }
        assert_eq!(ih.cursor(), COLS - 1);
        assert_eq!(InputHandler::with_cursor(99).cursor(), COLS - 1);
    }

    #[test]
    fn test_drop_at_cursor() {
        let mut ih = InputHandler::new();
        ih.handle_action(GameAction::CursorRight);
        ih.handle_action(GameAction::CursorRight);
        assert_eq!(
            ih.handle_action(GameAction::DropAtCursor),
            Some(Command::Drop(2))
        );
    }

    #[test]
    fn test_direct_drop_moves_cursor_only_when_in_range() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_action(GameAction::DropColumn(3)),
            Some(Command::Drop(3))
        );
        assert_eq!(ih.cursor(), 3);

        assert_eq!(
            ih.handle_action(GameAction::DropColumn(6)),
            Some(Command::Drop(6))
        );
        assert_eq!(ih.cursor(), 3);
    }

    #[test]
    fn test_new_game_recenters_cursor() {
        let mut ih = InputHandler::with_cursor(2);
        assert_eq!(ih.handle_action(GameAction::NewGame), Some(Command::NewGame));
        assert_eq!(ih.cursor(), 0);
        assert_eq!(
            ih.handle_action(GameAction::ResetBoard),
            Some(Command::ResetBoard)
        );
    }

    #[test]
    fn test_handle_keys_skips_unmapped_and_caps_batch() {
        let mut ih = InputHandler::new();
        let keys = [
            KeyEvent::from(KeyCode::Right),
            KeyEvent::from(KeyCode::Char('x')),
            KeyEvent::from(KeyCode::Char(' ')),
            KeyEvent::from(KeyCode::Char('5')),
        ];
        let cmds = ih.handle_keys(keys);
        assert_eq!(cmds.as_slice(), &[Command::Drop(1), Command::Drop(4)]);

        let burst = std::iter::repeat(KeyEvent::from(KeyCode::Char('1'))).take(MAX_BATCH + 5);
        assert_eq!(ih.handle_keys(burst).len(), MAX_BATCH);
    }
}
