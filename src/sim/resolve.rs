//! Collision response
//!
//! Applies a detected `Contact` to the ball. Each resolution reports the side
//! effect it implies so the tick can emit the matching event.

use glam::Vec2;

use super::collision::{Contact, ContactKind};
use super::state::{Ball, Side};
use crate::consts::*;
use crate::playfield_center;

/// What a resolved contact means for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report (no contact)
    Nothing,
    /// Ball bounced off a paddle
    PaddleBounce,
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball left the playfield; the given side scores
    Point(Side),
}

/// Bounce the ball off a paddle
///
/// The ball is pushed out by the contact penetration and its horizontal
/// velocity flips. Striking a paddle's upper or lower band sends the ball off
/// at a fixed steep angle; the middle band keeps the current vertical speed.
pub fn resolve_paddle_collision(ball: &mut Ball, contact: &Contact) -> Outcome {
    if !contact.is_hit() {
        return Outcome::Nothing;
    }

    ball.pos.x += contact.penetration;
    ball.vel.x = -ball.vel.x;

    match contact.kind {
        ContactKind::Top => ball.vel.y = -ANGLE_FACTOR * BALL_SPEED,
        ContactKind::Bot => ball.vel.y = ANGLE_FACTOR * BALL_SPEED,
        _ => {}
    }

    Outcome::PaddleBounce
}

/// Bounce off the top/bottom wall, or recenter the ball after it leaves a side
pub fn resolve_wall_collision(ball: &mut Ball, contact: &Contact) -> Outcome {
    match contact.kind {
        ContactKind::Top | ContactKind::Bot => {
            ball.pos.y += contact.penetration;
            ball.vel.y = -ball.vel.y;
            Outcome::WallBounce
        }
        ContactKind::Left => {
            ball.pos = playfield_center();
            ball.vel = Vec2::new(-BALL_SPEED, -ANGLE_FACTOR * BALL_SPEED);
            Outcome::Point(Side::Right)
        }
        ContactKind::Right => {
            ball.pos = playfield_center();
            ball.vel = Vec2::new(BALL_SPEED, ANGLE_FACTOR * BALL_SPEED);
            Outcome::Point(Side::Left)
        }
        ContactKind::Mid | ContactKind::None => Outcome::Nothing,
    }
}
