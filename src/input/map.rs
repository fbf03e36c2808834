//! Key mapping from terminal events to engine commands.
//!
//! The engine takes at most one command per tick; `poll_key_press` samples
//! one pending key press with a zero-duration poll and never blocks, so
//! the tick cadence is independent of the keyboard.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Command;

/// Map a key press to an engine command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::RotateCw),
        _ => None,
    }
}

/// Session-quit chord: `q` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Sample at most one pending key press without blocking.
///
/// Non-press events (releases, repeats, resizes) consume the sample and
/// count as "no input" for this tick.
pub fn poll_key_press() -> Result<Option<KeyEvent>> {
    if event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}
