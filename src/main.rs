//! Terminal runner (default binary).
//!
//! Polls crossterm for input until the next frame is due, ticks the game at a
//! fixed rate and redraws through the framebuffer renderer.
//!
//! Environment:
//! - `BLOCKFALL_SEED`: piece generator seed (defaults to the clock)
//! - `BLOCKFALL_BEST_FILE`: best-score file (defaults to `.blockfall-best.json`)

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{BestScore, BestScoreStore, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_start_key, should_quit};
use blockfall::session::Session;
use blockfall::store::FileBestScore;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GamePhase, TICK_MS};

const SEED_ENV: &str = "BLOCKFALL_SEED";

fn main() -> Result<()> {
    let seed = seed_from_env()?;
    let best = BestScore::load(FileBestScore::from_env());
    let mut session = Session::new(GameState::new(seed), best);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut session));

    // Always try to restore terminal state.
    let _ = term.exit();
    session.quit();
    result
}

fn seed_from_env() -> Result<u32> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be an unsigned 32-bit integer, got {:?}", SEED_ENV, raw)),
        Err(_) => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1);
            Ok(nanos)
        }
    }
}

fn run<S: BestScoreStore>(term: &mut TerminalRenderer, session: &mut Session<S>) -> Result<()> {
    let view = GameView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            session.snapshot_into(&mut snap);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if session.game().phase() == GamePhase::ReadyToStart && is_start_key(key) {
                        dirty |= session.start();
                    } else if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            dirty |= session.tick();
        }
    }
}
