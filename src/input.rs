use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::config::SpeedSetting;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the menu and game loops.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Speed(SpeedSetting),
    Confirm,
    Quit,
}

/// Single-slot mailbox holding the most recent requested direction.
///
/// The input handler writes with last-write-wins semantics; the game loop
/// reads the slot once per tick. The slot starts empty, so the snake holds
/// still until the first direction arrives, and each run owns a fresh slot
/// so a key press from a previous run cannot leak in.
#[derive(Debug, Default)]
pub struct DirectionSlot {
    current: Option<Direction>,
}

impl DirectionSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `direction`, replacing any previous value.
    pub fn set(&mut self, direction: Direction) {
        self.current = Some(direction);
    }

    /// Returns the stored direction without consuming it.
    #[must_use]
    pub fn get(&self) -> Option<Direction> {
        self.current
    }
}

/// Polls the terminal for at most `timeout` and maps the next key press to
/// a [`GameInput`]. Unrecognized keys and non-key events are ignored.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char('1') => Some(GameInput::Speed(SpeedSetting::Fast)),
        KeyCode::Char('2') => Some(GameInput::Speed(SpeedSetting::Normal)),
        KeyCode::Char('3') => Some(GameInput::Speed(SpeedSetting::Slow)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}
