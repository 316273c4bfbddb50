//! Keyboard state tracking
//!
//! Turns key-down/key-up events into the held-button set the simulation
//! reads each frame. W/S drive the left paddle, Up/Down the right one and
//! Escape asks to quit. `ScriptedInput` replays timed key events for
//! headless runs.

use super::InputProvider;
use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
}

impl Key {
    /// Map a platform key name (as reported by most windowing layers)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "keyw" => Some(Key::W),
            "s" | "keys" => Some(Key::S),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "escape" | "esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Currently held keys plus a sticky quit flag
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: TickInput,
    quit: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.held.paddle1_up = pressed,
            Key::S => self.held.paddle1_down = pressed,
            Key::Up => self.held.paddle2_up = pressed,
            Key::Down => self.held.paddle2_down = pressed,
            Key::Escape => {
                if pressed {
                    log::info!("Quit requested");
                    self.quit = true;
                }
            }
        }
    }
}

impl InputProvider for KeyboardState {
    fn sample(&mut self) -> TickInput {
        self.held
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// A key press or release at a point on the session clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub at_ms: f64,
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    /// Parse `<ms>:+<key>` (press) or `<ms>:-<key>` (release)
    pub fn parse(token: &str) -> Option<Self> {
        let (at, action) = token.trim().split_once(':')?;
        let at_ms = at.trim().parse::<f64>().ok().filter(|t| *t >= 0.0)?;
        let action = action.trim();
        let pressed = match action.chars().next()? {
            '+' => true,
            '-' => false,
            _ => return None,
        };
        let key = Key::from_name(&action[1..])?;
        Some(Self {
            at_ms,
            key,
            pressed,
        })
    }
}

/// Replays a list of timed key events into a `KeyboardState`
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// Sorted by `at_ms`
    events: Vec<KeyEvent>,
    next: usize,
    keyboard: KeyboardState,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<KeyEvent>) -> Self {
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Self {
            events,
            next: 0,
            keyboard: KeyboardState::new(),
        }
    }

    /// Parse a comma separated script such as `0:+w,400:-w,2000:+esc`
    ///
    /// Returns the first token that could not be read on failure.
    pub fn parse(script: &str) -> Result<Self, String> {
        let events = script
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .map(|token| KeyEvent::parse(token).ok_or_else(|| token.trim().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    /// Apply every event due at or before `now_ms`
    pub fn advance_to(&mut self, now_ms: f64) {
        while let Some(event) = self.events.get(self.next) {
            if event.at_ms > now_ms {
                break;
            }
            if event.pressed {
                self.keyboard.key_down(event.key);
            } else {
                self.keyboard.key_up(event.key);
            }
            self.next += 1;
        }
    }

    /// Events not yet applied
    pub fn remaining(&self) -> usize {
        self.events.len() - self.next
    }
}

impl InputProvider for ScriptedInput {
    fn sample(&mut self) -> TickInput {
        self.keyboard.sample()
    }

    fn quit_requested(&self) -> bool {
        self.keyboard.quit_requested()
    }
}
