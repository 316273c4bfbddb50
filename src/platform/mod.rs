//! Platform abstraction layer
//!
//! The boundaries the game loop talks to:
//! - Input (held buttons, quit requests)
//! - Audio cues
//! - Score display
//! - Frame rendering

pub mod input;

use crate::audio::SoundEffect;
use crate::renderer::FrameSnapshot;
use crate::sim::{Side, TickInput};

pub use input::{Key, KeyEvent, KeyboardState, ScriptedInput};

/// Supplies the held buttons, sampled once per frame before the update
pub trait InputProvider {
    fn sample(&mut self) -> TickInput;

    /// Whether the player asked to leave
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Fire-and-forget sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// A player's score changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub side: Side,
    pub new_score: u32,
}

impl ScoreUpdate {
    /// Player number (1 or 2)
    pub fn player(&self) -> u8 {
        self.side.player_number()
    }
}

/// Receives new score values; owns whatever it uses to show them
pub trait ScoreSink {
    fn score_changed(&mut self, update: ScoreUpdate);
}

/// Draws one frame from a read-only snapshot
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);
}
