//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only, seeded once per session
//! - Fixed collision priority (left paddle, right paddle, walls)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod resolve;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, ContactKind, detect_paddle_collision, detect_wall_collision};
pub use resolve::{Outcome, resolve_paddle_collision, resolve_wall_collision};
pub use state::{Ball, GamePhase, GameState, Paddle, Side};
pub use tick::{DETECTORS, GameEvent, Surface, TickInput, first_contact, tick};
