//! Frame loop
//!
//! Each iteration: wait for the clock, drain input events, sample held keys,
//! advance the simulation one frame, render. The loop ends on a quit event,
//! the escape key, or the optional frame limit from settings.

use crate::platform::{FpsCounter, FrameClock, InputEvent, InputSource, Key};
use crate::renderer::{Surface, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Escape,
    FrameLimit,
}

/// Run the session until it is told to stop
pub fn run<C, I, S>(
    state: &mut GameState,
    settings: &Settings,
    clock: &mut C,
    input: &mut I,
    surface: &mut S,
) -> ExitReason
where
    C: FrameClock + ?Sized,
    I: InputSource + ?Sized,
    S: Surface + ?Sized,
{
    let mut fps = FpsCounter::default();
    let report_every = u64::from(settings.target_fps.max(1)) * 10;

    loop {
        if settings.max_frames.is_some_and(|max| state.frame >= max) {
            return ExitReason::FrameLimit;
        }

        let elapsed_ms = clock.tick(settings.target_fps);
        fps.record(elapsed_ms);

        for event in input.poll_events() {
            match event {
                InputEvent::Quit => return ExitReason::Quit,
                InputEvent::KeyDown(Key::Escape) => return ExitReason::Escape,
                InputEvent::KeyDown(_) => {}
            }
        }

        let tick_input = input.held_keys().to_tick_input();
        tick(state, &tick_input, elapsed_ms);

        for event in state.take_events() {
            log_event(state, event);
        }

        if let Err(e) = render_frame(surface, state) {
            log::warn!("Render error: {e}");
        }

        if state.frame % report_every == 0 {
            log::info!(
                "Frame {}: score={}, best={}, fps={}",
                state.frame,
                state.score(),
                state.best_score,
                fps.fps()
            );
        }
    }
}

fn log_event(state: &GameState, event: GameEvent) {
    match event {
        GameEvent::PlayerReset { score_lost } => log::info!(
            "Crashed into a planet (attempt {}), lost {score_lost} points",
            state.attempts
        ),
        GameEvent::Boosted { remaining } => log::debug!("Boost fired, {remaining} left"),
        GameEvent::FieldEntered => log::debug!("Entered a gravity field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, KeyState, ScriptedFrame, ScriptedInput};
    use crate::renderer::HeadlessSurface;

    fn session() -> (GameState, Settings) {
        let settings = Settings {
            star_count: 10,
            ..Default::default()
        };
        (GameState::new(&settings).unwrap(), settings)
    }

    #[test]
    fn test_escape_stops_before_ticking() {
        let (mut state, settings) = session();
        let mut input = ScriptedInput::once(vec![ScriptedFrame {
            events: vec![InputEvent::KeyDown(Key::Other), InputEvent::KeyDown(Key::Escape)],
            keys: KeyState::default(),
        }]);
        let mut surface = HeadlessSurface::new();

        let reason = run(&mut state, &settings, &mut FixedClock::at_rate(50), &mut input, &mut surface);

        assert_eq!(reason, ExitReason::Escape);
        assert_eq!(state.frame, 0);
        assert_eq!(surface.frames_presented(), 0);
    }

    #[test]
    fn test_script_end_quits() {
        let (mut state, settings) = session();
        let mut input = ScriptedInput::once(vec![ScriptedFrame::default(); 5]);
        let mut surface = HeadlessSurface::new();

        let reason = run(&mut state, &settings, &mut FixedClock::at_rate(50), &mut input, &mut surface);

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(state.frame, 5);
        assert_eq!(surface.frames_presented(), 5);
    }

    #[test]
    fn test_frame_limit() {
        let (mut state, mut settings) = session();
        settings.max_frames = Some(12);
        let mut input = ScriptedInput::demo_pattern();
        let mut surface = HeadlessSurface::new();

        let reason = run(&mut state, &settings, &mut FixedClock::at_rate(50), &mut input, &mut surface);

        assert_eq!(reason, ExitReason::FrameLimit);
        assert_eq!(state.frame, 12);
        assert_eq!(surface.last_text(), Some(format!("Score: {}", state.score()).as_str()));
    }
}
