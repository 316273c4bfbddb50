//! Frame loop for one play session
//!
//! Converts wall-clock frames into simulation steps, keeps the score, and
//! routes simulation events to the platform sinks.

use crate::audio::SoundEffect;
use crate::consts::*;
use crate::platform::{AudioSink, Renderer, ScoreSink, ScoreUpdate};
use crate::renderer::FrameSnapshot;
use crate::settings::{Settings, TimestepMode};
use crate::sim::{GameEvent, GameState, Side, TickInput, tick};

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point and return the new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points = points.saturating_add(1);
        *points
    }
}

/// Fixed timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's worth of time and return how many `SIM_DT_MS` steps to run
    pub fn advance(&mut self, frame_ms: f32) -> u32 {
        self.accumulator += frame_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT_MS;
            substeps += 1;
        }
        substeps
    }

    /// Unsimulated time carried into the next frame
    pub fn pending_ms(&self) -> f32 {
        self.accumulator
    }
}

/// The collaborators a frame reports to
pub struct Sinks<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub score: &'a mut dyn ScoreSink,
    pub renderer: &'a mut dyn Renderer,
}

/// One play session: simulation state, score and frame timing
pub struct Session {
    pub state: GameState,
    pub score: Score,
    timestep: TimestepMode,
    stepper: FixedStep,
}

impl Session {
    pub fn new(seed: u64, timestep: TimestepMode) -> Self {
        log::info!(
            "New session: seed={}, timestep={}",
            seed,
            timestep.as_str()
        );
        Self {
            state: GameState::new(seed),
            score: Score::new(),
            timestep,
            stepper: FixedStep::new(),
        }
    }

    /// Session from settings; draws a seed when none is configured
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::new(seed, settings.timestep)
    }

    pub fn timestep(&self) -> TimestepMode {
        self.timestep
    }

    /// Run one wall-clock frame and report everything that happened
    ///
    /// Returns the number of simulation steps taken.
    pub fn frame(&mut self, frame_ms: f32, input: &TickInput, sinks: &mut Sinks<'_>) -> u32 {
        let steps = match self.timestep {
            TimestepMode::Fixed => {
                let steps = self.stepper.advance(frame_ms);
                for _ in 0..steps {
                    let events = tick(&mut self.state, input, SIM_DT_MS);
                    self.dispatch(&events, sinks);
                }
                steps
            }
            TimestepMode::Variable => {
                let events = tick(&mut self.state, input, frame_ms.clamp(0.0, MAX_FRAME_MS));
                self.dispatch(&events, sinks);
                1
            }
        };

        sinks.renderer.draw(&FrameSnapshot::capture(&self.state));
        steps
    }

    fn dispatch(&mut self, events: &[GameEvent], sinks: &mut Sinks<'_>) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                sinks.audio.play(effect);
            }

            if let GameEvent::Scored { scorer } = *event {
                let new_score = self.score.increment(scorer);
                log::info!(
                    "Player {} scores ({} - {})",
                    scorer.player_number(),
                    self.score.left,
                    self.score.right
                );
                sinks.score.score_changed(ScoreUpdate {
                    side: scorer,
                    new_score,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Ball;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        cues: Vec<SoundEffect>,
        scores: Vec<ScoreUpdate>,
        frames: Vec<FrameSnapshot>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.cues.push(effect);
        }
    }

    impl ScoreSink for Recorder {
        fn score_changed(&mut self, update: ScoreUpdate) {
            self.scores.push(update);
        }
    }

    impl Renderer for Recorder {
        fn draw(&mut self, frame: &FrameSnapshot) {
            self.frames.push(*frame);
        }
    }

    /// Run a frame with separate recorders for each sink
    fn run_frame(
        session: &mut Session,
        frame_ms: f32,
        audio: &mut Recorder,
        score: &mut Recorder,
        render: &mut Recorder,
    ) -> u32 {
        let mut sinks = Sinks {
            audio,
            score,
            renderer: render,
        };
        session.frame(frame_ms, &TickInput::default(), &mut sinks)
    }

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.increment(Side::Right), 1);
        assert_eq!(score.increment(Side::Right), 2);
        assert_eq!(score.get(Side::Left), 0);
        score.left = u32::MAX;
        assert_eq!(score.increment(Side::Left), u32::MAX);
    }

    #[test]
    fn test_fixed_step_accumulates() {
        let mut stepper = FixedStep::new();
        assert_eq!(stepper.advance(16.5), 16);
        assert!((stepper.pending_ms() - 0.5).abs() < 1e-4);
        assert_eq!(stepper.advance(0.5), 1);
        // Long stalls are clamped
        assert_eq!(stepper.advance(5_000.0), MAX_SUBSTEPS);
        assert_eq!(stepper.advance(-3.0), 0);
    }

    #[test]
    fn test_frame_steps_per_mode() {
        let (mut a, mut s, mut r) = Default::default();

        let mut fixed = Session::new(1, TimestepMode::Fixed);
        assert_eq!(fixed.timestep(), TimestepMode::Fixed);
        assert_eq!(run_frame(&mut fixed, 16.0, &mut a, &mut s, &mut r), 16);
        assert_eq!(fixed.state.time_ms, 16.0);

        let mut variable = Session::new(1, TimestepMode::Variable);
        assert_eq!(variable.timestep(), TimestepMode::Variable);
        assert_eq!(run_frame(&mut variable, 16.0, &mut a, &mut s, &mut r), 1);
        assert_eq!(variable.state.time_ms, 16.0);

        // One snapshot per frame regardless of steps
        assert_eq!(r.frames.len(), 2);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            timestep: TimestepMode::Variable,
            seed: Some(42),
            ..Default::default()
        };
        let session = Session::from_settings(&settings);
        assert_eq!(session.timestep(), TimestepMode::Variable);
        assert_eq!(session.state.seed, 42);
        assert_eq!(session.score, Score::new());

        let session = Session::from_settings(&Settings::default());
        assert_eq!(session.timestep(), TimestepMode::Fixed);
    }

    #[test]
    fn test_scoring_reaches_score_sink() {
        let mut session = Session::new(9, TimestepMode::Fixed);
        session.state.ball = Ball::new(Vec2::new(1262.0, 100.0), Vec2::new(BALL_SPEED, 0.0));

        let (mut audio, mut score, mut render) = (Recorder::default(), Recorder::default(), Recorder::default());
        run_frame(&mut session, 1.0, &mut audio, &mut score, &mut render);

        assert_eq!(
            score.scores,
            vec![ScoreUpdate {
                side: Side::Left,
                new_score: 1
            }]
        );
        assert_eq!(score.scores[0].player(), 1);
        assert_eq!(session.score, Score { left: 1, right: 0 });
        assert!(audio.cues.is_empty());
        assert!(render.frames[0].resetting);
    }

    #[test]
    fn test_bounces_reach_audio_sink() {
        let mut session = Session::new(9, TimestepMode::Fixed);
        // Heading into the right paddle's face
        session.state.ball = Ball::new(Vec2::new(1210.0, 400.0), Vec2::new(BALL_SPEED, 0.0));

        let (mut audio, mut score, mut render) = (Recorder::default(), Recorder::default(), Recorder::default());
        run_frame(&mut session, 1.0, &mut audio, &mut score, &mut render);
        assert_eq!(audio.cues, vec![SoundEffect::PaddleHit]);
        assert!(session.state.ball.vel.x < 0.0);

        session.state.ball = Ball::new(Vec2::new(600.0, 710.0), Vec2::new(BALL_SPEED, 6.0));
        run_frame(&mut session, 1.0, &mut audio, &mut score, &mut render);
        assert_eq!(audio.cues, vec![SoundEffect::PaddleHit, SoundEffect::WallHit]);
        assert!(score.scores.is_empty());
    }

    #[test]
    fn test_full_point_cycle() {
        // From the opening serve, idle paddles eventually concede a point
        // and the ball is relaunched after the serve delay.
        let mut session = Session::new(2024, TimestepMode::Fixed);
        let (mut audio, mut score, mut render) = (Recorder::default(), Recorder::default(), Recorder::default());

        let mut frames = 0;
        while score.scores.is_empty() && frames < 10_000 {
            run_frame(&mut session, 16.0, &mut audio, &mut score, &mut render);
            frames += 1;
        }
        assert_eq!(score.scores.len(), 1);
        assert!(session.state.is_resetting());

        for _ in 0..63 {
            run_frame(&mut session, 16.0, &mut audio, &mut score, &mut render);
        }
        assert!(!session.state.is_resetting());
        assert_eq!(session.state.ball.vel.y.abs(), 6.0);
    }
}
