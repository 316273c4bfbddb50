//! Presentation glue
//!
//! Read-only snapshots of the playfield taken once per frame after all
//! physics has run, plus triangle lists any GPU or software backend can draw.

pub mod shapes;
pub mod vertex;

use serde::{Deserialize, Serialize};

pub use vertex::{Vertex, colors};

use crate::sim::{Aabb, GameState, Side};

/// A rectangle in playfield pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Aabb> for RectSnapshot {
    fn from(aabb: Aabb) -> Self {
        Self {
            x: aabb.min.x,
            y: aabb.min.y,
            width: aabb.size.x,
            height: aabb.size.y,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub ball: RectSnapshot,
    /// `[left, right]`
    pub paddles: [RectSnapshot; 2],
    /// Ball is parked waiting for the next serve
    pub resetting: bool,
}

impl FrameSnapshot {
    /// Color the backend clears to before drawing `vertices()`
    pub const CLEAR_COLOR: [f32; 4] = colors::BACKGROUND;

    pub fn capture(state: &GameState) -> Self {
        Self {
            ball: state.ball.bounds().into(),
            paddles: [
                state.paddle(Side::Left).bounds().into(),
                state.paddle(Side::Right).bounds().into(),
            ],
            resetting: state.is_resetting(),
        }
    }

    /// Triangle list for the whole frame, in draw order
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = shapes::center_net(colors::NET);
        vertices.extend(shapes::rect(&self.ball, colors::BALL));
        for paddle in &self.paddles {
            vertices.extend(shapes::rect(paddle, colors::PADDLE));
        }
        vertices
    }
}
