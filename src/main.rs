//! Twin Pong entry point
//!
//! Native headless runner: drives a session with a simulated 60 Hz frame
//! clock and logs what happens. Windowing, audio output and text rendering
//! plug in through the `platform` traits.
//!
//! Usage: `twin-pong [settings.json] [seconds] [fixed|variable] [keys]`
//!
//! `keys` is a comma separated script of timed presses and releases on the
//! frame clock, e.g. `0:+w,400:-w,1500:+up,1800:-up,20000:+esc`.

use twin_pong::audio::{AudioManager, LogBackend};
use twin_pong::platform::{InputProvider, Renderer, ScoreSink, ScoreUpdate, ScriptedInput};
use twin_pong::renderer::FrameSnapshot;
use twin_pong::session::Sinks;
use twin_pong::{Session, Settings, TimestepMode};

/// Simulated display refresh
const FRAME_MS: f32 = 1000.0 / 60.0;
const DEFAULT_SECONDS: f32 = 30.0;

/// Prints score changes the way a HUD label would show them
struct ScoreLog;

impl ScoreSink for ScoreLog {
    fn score_changed(&mut self, update: ScoreUpdate) {
        log::info!("Player {} score: {}", update.player(), update.new_score);
    }
}

/// Counts frames and traces the last snapshot
#[derive(Default)]
struct FrameLog {
    frames: u64,
    vertices: usize,
}

impl Renderer for FrameLog {
    fn draw(&mut self, frame: &FrameSnapshot) {
        if self.frames == 0 {
            log::debug!("clear color {:?}", FrameSnapshot::CLEAR_COLOR);
        }
        self.frames += 1;
        self.vertices = frame.vertices().len();
        log::trace!(
            "frame {}: ball=({:.1}, {:.1}) paddles y=({:.1}, {:.1})",
            self.frames,
            frame.ball.x,
            frame.ball.y,
            frame.paddles[0].y,
            frame.paddles[1].y
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("Twin Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|s| *s > 0.0)
        .unwrap_or(DEFAULT_SECONDS);
    if let Some(mode) = args.next() {
        match TimestepMode::from_str(&mode) {
            Some(timestep) => settings.timestep = timestep,
            None => log::warn!(
                "Unknown timestep '{}', keeping {}",
                mode,
                settings.timestep.as_str()
            ),
        }
    }
    let mut input = match ScriptedInput::parse(&args.next().unwrap_or_default()) {
        Ok(input) => input,
        Err(token) => {
            eprintln!("Invalid key event '{}' (expected <ms>:+<key> or <ms>:-<key>)", token);
            std::process::exit(2);
        }
    };

    let mut session = Session::from_settings(&settings);
    let mut audio = AudioManager::from_settings(LogBackend, &settings);
    let mut scores = ScoreLog;
    let mut renderer = FrameLog::default();

    let total_frames = (seconds * 1000.0 / FRAME_MS).ceil() as u64;
    for frame in 0..total_frames {
        input.advance_to(frame as f64 * FRAME_MS as f64);
        if input.quit_requested() {
            break;
        }
        let held = input.sample();
        let mut sinks = Sinks {
            audio: &mut audio,
            score: &mut scores,
            renderer: &mut renderer,
        };
        session.frame(FRAME_MS, &held, &mut sinks);
    }

    log::info!(
        "Stopped after {} frames ({} timestep, {} key events unplayed)",
        renderer.frames,
        session.timestep().as_str(),
        input.remaining()
    );
    log::debug!("{} vertices in last frame", renderer.vertices);
    println!(
        "Final score: {} - {} (seed {})",
        session.score.left, session.score.right, session.state.seed
    );
}
