#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind};

/// A single input token, already decoded from the terminal's key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Restart,
    Quit,
    Other,
}

impl Key {
    /// Decode a crossterm key event. Release/repeat events decode to
    /// [`Key::Other`] so a single key press is never counted twice.
    pub fn from_key_event(ev: KeyEvent) -> Self {
        if ev.kind != KeyEventKind::Press {
            return Key::Other;
        }
        match ev.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Char(' ') => Key::Confirm,
            KeyCode::Char('r') => Key::Restart,
            KeyCode::Char('q') => Key::Quit,
            _ => Key::Other,
        }
    }
}

/// Something that yields input tokens, one per call.
///
/// The terminal implementation blocks until the user presses a key; tests
/// replay a fixed script instead.
pub trait InputSource {
    fn next_key(&mut self) -> Result<Key>;
}

/// Blocking reader over crossterm's event stream.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_key(&mut self) -> Result<Key> {
        let ev = event::read().context("failed to read terminal event")?;
        Ok(match ev {
            CEvent::Key(key) => Key::from_key_event(key),
            // Resizes and the like just trigger a redraw.
            _ => Key::Other,
        })
    }
}

/// Test double that replays a fixed sequence of keys, then reports
/// [`Key::Quit`] forever. Available with the `test-util` feature.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl InputSource for ScriptedInput {
    fn next_key(&mut self) -> Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Quit))
    }
}
