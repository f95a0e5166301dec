//! Append-only log of drop attempts.
//!
//! One line per attempt: `<attempt> <player> col=<column> -> <result>`, where
//! the result is the piece `drop_piece` returned (`x`, `o`, `blank` for a full
//! column, `invalid` for a column off the board).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::{Piece, Player};

pub struct MoveLog {
    out: Box<dyn Write>,
}

impl MoveLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening move log {}", path.display()))?;
        Ok(Self::from_writer(file))
    }

    pub fn from_writer(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    pub fn record(&mut self, attempt: u32, player: Player, column: i32, result: Piece) -> Result<()> {
        writeln!(
            self.out,
            "{} {} col={} -> {}",
            attempt,
            player.as_char(),
            column,
            result.as_str()
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Marks a board reset or a new game in the log.
    pub fn note(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "# {}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
