//! Terminal Piezas runner (default binary).
//!
//! Two players share the keyboard. It uses crossterm for input and a
//! framebuffer renderer that only redraws what changed.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use piezas::config::AppConfig;
use piezas::input::{should_quit, MAX_BATCH};
use piezas::move_log::MoveLog;
use piezas::session::Session;
use piezas::term::{outcome_text, BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let log = match config.log_path.as_deref() {
        Some(path) => Some(MoveLog::open(path)?),
        None => None,
    };
    let mut session = Session::new(log);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => {
            let game = session.game();
            eprintln!(
                "[Piezas] {} after {} drop attempts",
                outcome_text(game.outcome()),
                game.attempts()
            );
        }
        Err(e) => eprintln!("[Piezas] error: {:#}", e),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, session: &mut Session) -> Result<()> {
    let view = BoardView::new(config.cell_w, config.cell_h);
    let mut fb = FrameBuffer::new(0, 0);
    let mut keys: Vec<KeyEvent> = Vec::with_capacity(MAX_BATCH);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), session.cursor(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(config.poll_timeout())? {
            continue;
        }

        // Drain everything already queued so a burst of keys renders once.
        keys.clear();
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    keys.push(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            if keys.len() >= MAX_BATCH || !event::poll(Duration::ZERO)? {
                break;
            }
        }

        session.handle_keys(keys.drain(..))?;
    }
}
