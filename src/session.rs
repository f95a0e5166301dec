//! One hot-seat game: the engine, the column cursor and the optional move log.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::core::{GameSnapshot, Piezas};
use crate::input::{Command, InputHandler, MAX_BATCH};
use crate::move_log::MoveLog;
use crate::types::Piece;

pub struct Session {
    game: Piezas,
    input: InputHandler,
    log: Option<MoveLog>,
}

impl Session {
    pub fn new(log: Option<MoveLog>) -> Self {
        Self {
            game: Piezas::new(),
            input: InputHandler::new(),
            log,
        }
    }

    pub fn game(&self) -> &Piezas {
        &self.game
    }

    /// Selected column, hidden once the game is over
    pub fn cursor(&self) -> Option<usize> {
        if self.game.outcome().is_over() {
            None
        } else {
            Some(self.input.cursor())
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Resolve a burst of key presses and apply the resulting commands.
    ///
    /// Keys go to the input handler [`MAX_BATCH`] at a time, so bursts of any
    /// length are applied in full.
    pub fn handle_keys(&mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Result<()> {
        let mut keys = keys.into_iter().peekable();
        while keys.peek().is_some() {
            for cmd in self.input.handle_keys(keys.by_ref().take(MAX_BATCH)) {
                self.apply(cmd)?;
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Drop(column) => {
                self.drop_piece(column)?;
            }
            Command::ResetBoard => {
                self.game.reset();
                if let Some(log) = self.log.as_mut() {
                    log.note("reset")?;
                }
            }
            Command::NewGame => {
                self.game = Piezas::new();
                if let Some(log) = self.log.as_mut() {
                    log.note("new game")?;
                }
            }
        }
        Ok(())
    }

    /// Drop for whoever is on turn; drops after the game ended are ignored.
    pub fn drop_piece(&mut self, column: i32) -> Result<Option<Piece>> {
        if self.game.outcome().is_over() {
            return Ok(None);
        }
        let mover = self.game.turn();
        let result = self.game.drop_piece(column);
        if let Some(log) = self.log.as_mut() {
            log.record(self.game.attempts(), mover, column, result)?;
        }
        Ok(Some(result))
    }
}
