//! Raw-mode terminal glue (crossterm)

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::internal::{Key, KeySource};
use crate::logging::log_debug;

/// Keeps stdin in raw (unbuffered, non-echoing) mode until dropped
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to switch terminal to raw mode")?;
        log_debug("prompt", "raw mode on");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        log_debug("prompt", "raw mode off");
    }
}

/// Blocking key reader over the real terminal
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Key> {
        let event = event::read().context("Failed to read key from terminal")?;
        Ok(match event {
            Event::Key(key) => key_from_event(&key),
            _ => Key::Other,
        })
    }
}

/// Map a crossterm key event onto a prompt key.
///
/// Release events (reported on Windows) map to [`Key::Other`] so a single
/// physical keystroke is only seen once.
pub fn key_from_event(event: &KeyEvent) -> Key {
    if event.kind == KeyEventKind::Release {
        return Key::Other;
    }

    match event.code {
        KeyCode::Char('c' | 'C') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Interrupt
        }
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter | KeyCode::Char('\r' | '\n') => Key::Enter,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
