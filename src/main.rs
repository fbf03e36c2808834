//! Terminal gridfall runner.
//!
//! Sequences menu → game session until the player quits. Each session tick
//! is: sleep one fixed tick, sample at most one key, advance the engine,
//! render. Input is never waited for during play; the menu, by contrast,
//! blocks on keys since nothing moves there.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};

use gridfall::core::GameState;
use gridfall::input::{map_key, poll_key_press, should_quit};
use gridfall::term::{render_menu, GameView, TerminalRenderer, Viewport, MENU_ENTRIES};
use gridfall::types::{MenuChoice, TICK_MS};

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() {
    // stdout/stderr belong to the raw-mode UI; logs go to a file.
    let Ok(file) = std::fs::File::create("gridfall.log") else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp(None)
        .try_init();
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    loop {
        match run_menu(term)? {
            MenuChoice::NewGame => run_session(term)?,
            MenuChoice::Quit => {
                info!("quit from menu");
                return Ok(());
            }
        }
    }
}

fn run_menu(term: &mut TerminalRenderer) -> Result<MenuChoice> {
    let mut selected = 0usize;
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&render_menu(selected, Viewport::new(w, h)))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up => {
                    selected = selected.checked_sub(1).unwrap_or(MENU_ENTRIES.len() - 1);
                }
                KeyCode::Down => {
                    selected = (selected + 1) % MENU_ENTRIES.len();
                }
                KeyCode::Enter => {
                    return Ok(if selected == 0 {
                        MenuChoice::NewGame
                    } else {
                        MenuChoice::Quit
                    });
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(MenuChoice::Quit),
                _ => {}
            }
        }
    }
}

fn run_session(term: &mut TerminalRenderer) -> Result<()> {
    let seed = time_seed();
    let mut state = GameState::new(seed);
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS);
    info!("session started, seed {seed}");

    loop {
        // The sleep is the only suspension point; input is sampled once
        // afterwards and never waited for.
        thread::sleep(tick);

        if let Some(key) = poll_key_press()? {
            if should_quit(key) {
                info!("session quit, score {}", state.progression().score());
                return Ok(());
            }
            if let Some(command) = map_key(key) {
                state.apply(command);
            }
        }

        if state.tick() {
            debug!(
                "piece locked: {} lines, level {}",
                state.progression().lines(),
                state.progression().level()
            );
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(&state, Viewport::new(w, h)))?;

        if state.over() {
            info!(
                "game over: score {}, lines {}, level {}",
                state.progression().score(),
                state.progression().lines(),
                state.progression().level()
            );
            // Hold the final frame until a key is pressed, then back to
            // the menu. The score is not kept.
            event::read()?;
            return Ok(());
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
