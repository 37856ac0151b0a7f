//! Terminal Blockfall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall-term`.
//! The loop polls input until the next frame is due, then advances the engine
//! by the measured elapsed time.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::config::AppConfig;
use blockfall::core::{EngineEvent, GameEngine, GameSnapshot};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let seed = config.seed_or_random();
    info!(seed, frame_ms = config.frame_ms, "config loaded");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "run loop failed");
    }
    result
}

/// Install a file logger when `BLOCKFALL_LOG_PATH` is set.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, seed: u32) -> Result<()> {
    let mut engine = GameEngine::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit");
                        return Ok(());
                    }
                    if let Some(intent) = map_key(key) {
                        let accepted = engine.apply(intent);
                        debug!(intent = intent.as_str(), accepted, "intent");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let step_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            engine.tick(step_ms);
        }

        for ev in engine.drain_events() {
            match ev {
                EngineEvent::StatsChanged {
                    score,
                    level,
                    lines,
                } => debug!(score, level, lines, "stats changed"),
                EngineEvent::GameOver { final_score } => {
                    info!(final_score, "game over, press enter to play again")
                }
            }
        }
    }
}
