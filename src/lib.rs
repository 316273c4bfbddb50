//! Twin Pong - A two-player paddle and ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, serve timing)
//! - `session`: Frame loop, fixed timestep accumulator and event routing
//! - `platform`: Input, audio, score and render boundaries
//! - `renderer`: Frame snapshots and vertex generation
//! - `audio`: Sound cue mixing
//! - `settings`: Player preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Score, Session};
pub use settings::{Settings, TimestepMode};

/// Game configuration constants
///
/// All distances are playfield pixels (origin top-left, y down), all times
/// are milliseconds and all speeds are pixels per millisecond.
pub mod consts {
    /// Fixed simulation timestep (1 ms keeps the ball under its own width per step)
    pub const SIM_DT_MS: f32 = 1.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 100;
    /// Longest wall-clock frame fed to the simulation
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Ball extents
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;
    pub const BALL_SPEED: f32 = 8.0;

    /// Paddle extents
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Horizontal distance from each side wall to the paddle's left edge
    pub const PADDLE_INSET: f32 = 50.0;

    /// Vertical speed given to the ball as a fraction of BALL_SPEED
    pub const ANGLE_FACTOR: f32 = 0.75;

    /// Pause between a score and the next serve
    pub const SERVE_DELAY_MS: f64 = 1000.0;
}

/// Center of the playfield
#[inline]
pub fn playfield_center() -> glam::Vec2 {
    use consts::*;
    glam::Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0)
}
