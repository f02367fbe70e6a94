//! Terminal Aviator runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The session
//! is ticked at a fixed period; key presses are forwarded between ticks.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use aviator::config::{init_logging, RunConfig};
use aviator::core::{GameState, StatusLine};
use aviator::input::{handle_key_event, should_quit};
use aviator::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!("starting with seed {} and {}ms ticks", config.seed, config.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = GameState::with_observer(config.seed, StatusLine::new());
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();
    let mut redraw = true;

    loop {
        if redraw || game.observer_mut().take_dirty() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), game.observer().text(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, game.started()) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
