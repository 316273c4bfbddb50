//! Simulation step
//!
//! Advances the game by one timestep: input, paddles, ball, then the first
//! collision found in priority order.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, detect_paddle_collision, detect_wall_collision};
use super::resolve::{Outcome, resolve_paddle_collision, resolve_wall_collision};
use super::state::{GamePhase, GameState, Side};
use crate::consts::*;
use crate::playfield_center;

/// Buttons held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub paddle1_up: bool,
    pub paddle1_down: bool,
    pub paddle2_up: bool,
    pub paddle2_down: bool,
}

/// Side effects produced by a tick, for audio/score/UI consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball left the playfield past the opponent of `scorer`
    Scored { scorer: Side },
    /// Ball relaunched from the center after the serve delay
    Served { direction: Side },
}

/// What surface a detector checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Paddle(Side),
    Wall,
}

/// A collision query against the current state
pub type Detector = fn(&GameState) -> Contact;

fn detect_left_paddle(state: &GameState) -> Contact {
    detect_paddle_collision(&state.ball, state.paddle(Side::Left))
}

fn detect_right_paddle(state: &GameState) -> Contact {
    detect_paddle_collision(&state.ball, state.paddle(Side::Right))
}

fn detect_walls(state: &GameState) -> Contact {
    detect_wall_collision(&state.ball)
}

/// Collision queries in priority order. The first hit wins; the rest are skipped.
pub const DETECTORS: [(Surface, Detector); 3] = [
    (Surface::Paddle(Side::Left), detect_left_paddle),
    (Surface::Paddle(Side::Right), detect_right_paddle),
    (Surface::Wall, detect_walls),
];

/// Run the detectors in order and return the first contact
pub fn first_contact(state: &GameState) -> Option<(Surface, Contact)> {
    DETECTORS.iter().find_map(|(surface, detect)| {
        let contact = detect(state);
        contact.is_hit().then_some((*surface, contact))
    })
}

/// Advance the game state by `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.time_ms += f64::from(dt);

    // Paddles always respond, even while the ball is parked
    state
        .paddle_mut(Side::Left)
        .steer(input.paddle1_up, input.paddle1_down);
    state
        .paddle_mut(Side::Right)
        .steer(input.paddle2_up, input.paddle2_down);
    for paddle in &mut state.paddles {
        paddle.integrate(dt);
    }

    match state.phase {
        GamePhase::Playing => state.ball.integrate(dt),
        GamePhase::Resetting { deadline_ms } => {
            if state.time_ms >= deadline_ms {
                let direction = serve(state);
                events.push(GameEvent::Served { direction });
            }
        }
    }

    if let Some((surface, contact)) = first_contact(state) {
        let outcome = match surface {
            Surface::Paddle(_) => resolve_paddle_collision(&mut state.ball, &contact),
            Surface::Wall => resolve_wall_collision(&mut state.ball, &contact),
        };

        match (outcome, surface) {
            (Outcome::PaddleBounce, Surface::Paddle(side)) => {
                events.push(GameEvent::PaddleHit { side });
            }
            (Outcome::WallBounce, _) => events.push(GameEvent::WallHit),
            (Outcome::Point(scorer), _) => {
                let deadline_ms = state.time_ms + SERVE_DELAY_MS;
                log::debug!(
                    "Player {} scored at {:.0}ms, serving at {:.0}ms",
                    scorer.player_number(),
                    state.time_ms,
                    deadline_ms
                );
                state.phase = GamePhase::Resetting { deadline_ms };
                events.push(GameEvent::Scored { scorer });
            }
            _ => {}
        }
    }

    events
}

/// Put the ball back in the center and launch it toward a random side
fn serve(state: &mut GameState) -> Side {
    let direction = if state.rng().random_bool(0.5) {
        Side::Left
    } else {
        Side::Right
    };
    let vx = match direction {
        Side::Left => -BALL_SPEED,
        Side::Right => BALL_SPEED,
    };

    state.ball.pos = playfield_center();
    state.ball.vel = Vec2::new(vx, ANGLE_FACTOR * BALL_SPEED);
    state.phase = GamePhase::Playing;

    log::debug!("Served toward {:?} at {:.0}ms", direction, state.time_ms);
    direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Paddle};

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Put the ball just inside the left wall and tick it out
    fn score_on_left(state: &mut GameState) -> Vec<GameEvent> {
        state.ball = Ball::new(Vec2::new(3.0, 100.0), Vec2::new(-BALL_SPEED, 0.0));
        tick(state, &idle(), SIM_DT_MS)
    }

    #[test]
    fn test_paddle_input_moves_both_paddles() {
        let mut state = GameState::new(1);
        let input = TickInput {
            paddle1_up: true,
            paddle2_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, 10.0);
        assert_eq!(state.paddle(Side::Left).pos.y, 360.0 - 70.0);
        assert_eq!(state.paddle(Side::Right).pos.y, 360.0 + 70.0);
    }

    #[test]
    fn test_paddle_hit_event() {
        let mut state = GameState::new(1);
        state.ball = Ball::new(Vec2::new(63.0, 360.0), Vec2::new(-BALL_SPEED, 0.0));
        let events = tick(&mut state, &idle(), SIM_DT_MS);
        assert_eq!(events, vec![GameEvent::PaddleHit { side: Side::Left }]);
        assert_eq!(state.ball.pos.x, 60.0);
        assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED, -6.0));
    }

    #[test]
    fn test_wall_hit_event() {
        let mut state = GameState::new(1);
        state.ball = Ball::new(Vec2::new(600.0, 2.0), Vec2::new(BALL_SPEED, -6.0));
        let events = tick(&mut state, &idle(), SIM_DT_MS);
        assert_eq!(events, vec![GameEvent::WallHit]);
        assert_eq!(state.ball.vel.y, 6.0);
        assert_eq!(state.ball.pos.y, 0.0);
    }

    #[test]
    fn test_paddle_beats_wall() {
        // Paddle pinned at the top; ball overlaps both the paddle and the top wall
        let mut state = GameState::new(1);
        state.paddles[0] = Paddle::new(Vec2::new(50.0, 0.0));
        state.ball = Ball::new(Vec2::new(57.0, -1.0), Vec2::new(-BALL_SPEED, -6.0));
        let (surface, _) = first_contact(&state).expect("contact");
        assert_eq!(surface, Surface::Paddle(Side::Left));
    }

    #[test]
    fn test_scoring_enters_reset_then_serves() {
        let mut state = GameState::new(42);
        let events = score_on_left(&mut state);
        assert_eq!(events, vec![GameEvent::Scored { scorer: Side::Right }]);
        assert_eq!(
            state.phase,
            GamePhase::Resetting {
                deadline_ms: state.time_ms + SERVE_DELAY_MS
            }
        );

        // Ball stays parked at center during the delay
        for _ in 0..999 {
            assert!(tick(&mut state, &idle(), SIM_DT_MS).is_empty());
        }
        assert!(state.is_resetting());
        assert_eq!(state.ball.pos, Vec2::new(640.0, 360.0));

        let events = tick(&mut state, &idle(), SIM_DT_MS);
        assert_eq!(events.len(), 1);
        let GameEvent::Served { direction } = events[0] else {
            panic!("expected serve, got {:?}", events);
        };
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(640.0, 360.0));
        let expected_vx = if direction == Side::Left { -8.0 } else { 8.0 };
        assert_eq!(state.ball.vel, Vec2::new(expected_vx, 6.0));
    }

    #[test]
    fn test_paddles_move_while_resetting() {
        let mut state = GameState::new(3);
        score_on_left(&mut state);
        let input = TickInput {
            paddle2_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, 5.0);
        assert!(state.is_resetting());
        assert_eq!(state.paddle(Side::Right).pos.y, 360.0 - 35.0);
    }

    #[test]
    fn test_serve_direction_uses_both_sides() {
        let mut state = GameState::new(7);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..64 {
            state.phase = GamePhase::Resetting { deadline_ms: 0.0 };
            match serve(&mut state) {
                Side::Left => seen_left = true,
                Side::Right => seen_right = true,
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                paddle1_up: true,
                ..Default::default()
            },
            TickInput {
                paddle2_down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..20_000 {
            let input = &inputs[(i / 500) % inputs.len()];
            let e1 = tick(&mut state1, input, SIM_DT_MS);
            let e2 = tick(&mut state2, input, SIM_DT_MS);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddles, state2.paddles);
        assert_eq!(state1.phase, state2.phase);
    }
}
