//! Collision detection for axis-aligned rectangles
//!
//! Pure queries over the current ball and paddle positions. Nothing here
//! mutates state; `resolve` applies the contacts produced.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap; rectangles that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which surface or paddle zone was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactKind {
    #[default]
    None,
    /// Upper band of a paddle, or the top wall
    Top,
    /// Middle band of a paddle
    Mid,
    /// Lower band of a paddle, or the bottom wall
    Bot,
    /// Left wall (right player scores)
    Left,
    /// Right wall (left player scores)
    Right,
}

/// Result of a collision query
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contact {
    pub kind: ContactKind,
    /// Signed correction distance. Horizontal for paddle contacts, vertical for
    /// top/bottom walls, zero for left/right walls.
    pub penetration: f32,
}

impl Contact {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(kind: ContactKind, penetration: f32) -> Self {
        Self { kind, penetration }
    }

    pub fn is_hit(&self) -> bool {
        self.kind != ContactKind::None
    }
}

/// Check the ball against one paddle
///
/// Penetration pushes the ball back against its direction of travel, not along
/// the minimum translation axis. The vertical zone is picked from where the
/// ball's bottom edge sits: upper third `Top`, middle third `Mid`, else `Bot`.
pub fn detect_paddle_collision(ball: &Ball, paddle: &Paddle) -> Contact {
    let b = ball.bounds();
    let p = paddle.bounds();

    if !b.overlaps(&p) {
        return Contact::none();
    }

    let penetration = if ball.vel.x < 0.0 {
        p.right() - b.left()
    } else if ball.vel.x > 0.0 {
        p.left() - b.right()
    } else {
        0.0
    };

    let upper_limit = p.bottom() - 2.0 * PADDLE_HEIGHT / 3.0;
    let mid_limit = p.bottom() - PADDLE_HEIGHT / 3.0;

    let kind = if b.bottom() > p.top() && b.bottom() < upper_limit {
        ContactKind::Top
    } else if b.bottom() > upper_limit && b.bottom() < mid_limit {
        ContactKind::Mid
    } else {
        ContactKind::Bot
    };

    Contact::new(kind, penetration)
}

/// Check the ball against the four playfield walls
///
/// Walls are tested left, right, top, bottom; only the first hit is reported.
pub fn detect_wall_collision(ball: &Ball) -> Contact {
    let b = ball.bounds();

    if b.left() < 0.0 {
        Contact::new(ContactKind::Left, 0.0)
    } else if b.right() > PLAYFIELD_WIDTH {
        Contact::new(ContactKind::Right, 0.0)
    } else if b.top() < 0.0 {
        Contact::new(ContactKind::Top, -b.top())
    } else if b.bottom() > PLAYFIELD_HEIGHT {
        Contact::new(ContactKind::Bot, PLAYFIELD_HEIGHT - b.bottom())
    } else {
        Contact::none()
    }
}
