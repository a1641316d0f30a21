use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// Canonical movement headings for the actor.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit-vector grid delta for one movement step.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Picks one of the four headings uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Right,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Quit,
}

/// Polls for the next game input, waiting at most `timeout`.
///
/// Returns `Ok(None)` when the timeout elapses without input, or when the
/// next terminal event carries no game meaning (resize, key release,
/// unrecognized key).
pub fn poll_game_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(game_input_from_key(key)),
        _ => Ok(None),
    }
}

/// Maps one key event to a game input. Unrecognized keys map to `None`.
#[must_use]
pub fn game_input_from_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Heading(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Heading(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Heading(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Heading(Heading::Right)),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}
