//! Terminal boulder runner (default binary).
//!
//! Owns the fixed-timestep loop: key presses are queued as commands, the game
//! ticks every `BOULDER_TICK_MS`, and the latest snapshot is rendered through
//! the framebuffer renderer.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_boulder::config::GameConfig;
use tui_boulder::core::{Game, GameSnapshot};
use tui_boulder::input::{handle_key_event, should_quit, should_restart};
use tui_boulder::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let level = config.load_level().with_context(|| match &config.level_path {
        Some(path) => format!("failed to load level {}", path.display()),
        None => "failed to load built-in level".to_string(),
    })?;
    let mut game = Game::with_max_pending(level, config.max_pending_commands);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("game loop failed: {e:#}");
    }
    result
}

/// Logs go to a file: the terminal is in raw mode on the alternate screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, config: &GameConfig) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} ticks", game.tick_count());
                        return Ok(());
                    }
                    if should_restart(key) {
                        game.restart();
                        game.snapshot_into(&mut snap);
                    } else if let Some(command) = handle_key_event(key) {
                        game.push_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
            game.snapshot_into(&mut snap);
        }
    }
}
