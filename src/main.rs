//! Sol Drift entry point
//!
//! Runs a headless session: real frame pacing, a scripted pilot, and a
//! surface that records draw calls. A windowed front end plugs in by
//! implementing `InputSource` and `Surface`.

use std::path::PathBuf;
use std::process::ExitCode;

use sol_drift::game::{self, ExitReason};
use sol_drift::platform::{ScriptedInput, ThrottledClock};
use sol_drift::renderer::HeadlessSurface;
use sol_drift::settings::Settings;
use sol_drift::sim::GameState;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Sol Drift (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(Settings::ENV_VAR).ok())
        .map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let mut state = match GameState::new(&settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Could not set up the solar system: {e}");
            return ExitCode::FAILURE;
        }
    };

    if settings.max_frames.is_none() {
        log::info!("No frame limit set, running until interrupted");
    }

    let mut clock = ThrottledClock::new();
    let mut input = ScriptedInput::demo_pattern();
    let mut surface = HeadlessSurface::new();

    let reason = game::run(&mut state, &settings, &mut clock, &mut input, &mut surface);

    let how = match reason {
        ExitReason::Quit => "quit",
        ExitReason::Escape => "escape",
        ExitReason::FrameLimit => "frame limit",
    };
    log::info!(
        "Session over ({how}) after {} frames: score={}, best={}, crashes={}",
        state.frame,
        state.score(),
        state.best_score,
        state.attempts
    );

    ExitCode::SUCCESS
}
