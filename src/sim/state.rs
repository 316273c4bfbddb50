//! Game state and core simulation types
//!
//! Everything the simulation mutates during a frame lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::playfield_center;

/// Which half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, paddle on the left
    Left,
    /// Player 2, paddle on the right
    Right,
}

impl Side {
    /// Player number shown to humans (1 or 2)
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in flight
    Playing,
    /// Ball parked after a score until the simulation clock reaches `deadline_ms`
    Resetting { deadline_ms: f64 },
}

/// The ball (top-left anchored axis-aligned square)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Opening position: centered on the playfield, heading right
    pub fn opening() -> Self {
        let half = Vec2::new(BALL_WIDTH, BALL_HEIGHT) / 2.0;
        Self::new(playfield_center() - half, Vec2::new(BALL_SPEED, 0.0))
    }

    /// Advance by `dt` milliseconds. No bounds handling; walls are collisions.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BALL_WIDTH, BALL_HEIGHT))
    }
}

/// A player paddle (vertical movement only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Starting paddle for a side
    pub fn for_side(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => PLAYFIELD_WIDTH - PADDLE_INSET,
        };
        Self::new(Vec2::new(x, PLAYFIELD_HEIGHT / 2.0))
    }

    /// Set vertical velocity from the held buttons. Up wins when both are held.
    pub fn steer(&mut self, up: bool, down: bool) {
        self.vel = if up {
            Vec2::new(0.0, -PADDLE_SPEED)
        } else if down {
            Vec2::new(0.0, PADDLE_SPEED)
        } else {
            Vec2::ZERO
        };
    }

    /// Advance by `dt` milliseconds, then hard-clamp inside the playfield
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.pos.y = self.pos.y.clamp(0.0, PLAYFIELD_HEIGHT - PADDLE_HEIGHT);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub ball: Ball,
    /// Indexed by `Side`: `[left, right]`
    pub paddles: [Paddle; 2],
    pub phase: GamePhase,
    /// Simulation clock (ms since the session started)
    pub time_ms: f64,
    /// Serve direction source, seeded once
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ball: Ball::opening(),
            paddles: [Paddle::for_side(Side::Left), Paddle::for_side(Side::Right)],
            phase: GamePhase::Playing,
            time_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side as usize]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side as usize]
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_resetting(&self) -> bool {
        matches!(self.phase, GamePhase::Resetting { .. })
    }
}
