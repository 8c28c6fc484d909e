//! Frame clock collaborator
//!
//! `tick` blocks until the next frame is due and returns the milliseconds
//! since the previous call.

use std::thread;
use std::time::{Duration, Instant};

pub trait FrameClock {
    /// Wait for the next frame at `target_fps`; returns elapsed milliseconds
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Wall-clock throttle that sleeps off the remainder of each frame
#[derive(Debug, Default)]
pub struct ThrottledClock {
    last: Option<Instant>,
}

impl ThrottledClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for ThrottledClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        let frame = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);

        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0.0;
        };

        let spent = last.elapsed();
        if spent < frame {
            thread::sleep(frame - spent);
        }

        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last).as_secs_f32() * 1000.0
    }
}

/// Non-blocking clock reporting a constant frame time
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step_ms: f32,
}

impl FixedClock {
    /// Exactly one frame at `target_fps`
    pub fn at_rate(target_fps: u32) -> Self {
        Self {
            step_ms: 1000.0 / target_fps.max(1) as f32,
        }
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.step_ms
    }
}

/// Rolling frames-per-second estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_ms: [f32; 60],
    index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_ms: [0.0; 60],
            index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, elapsed_ms: f32) {
        self.frame_ms[self.index] = elapsed_ms;
        self.index = (self.index + 1) % self.frame_ms.len();
        self.filled = (self.filled + 1).min(self.frame_ms.len());
    }

    pub fn fps(&self) -> u32 {
        let total: f32 = self.frame_ms[..self.filled].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.filled as f32 * 1000.0 / total).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_clock_holds_frame_rate() {
        let mut clock = ThrottledClock::new();
        assert_eq!(clock.tick(50), 0.0);
        let elapsed = clock.tick(50);
        // 20 ms frame; sleep may overshoot but never undershoot
        assert!(elapsed >= 19.5, "elapsed {elapsed}");
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::at_rate(50);
        assert_eq!(clock.tick(50), 20.0);
        assert_eq!(clock.tick(10), 20.0);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        assert_eq!(fps.fps(), 0);
        for _ in 0..100 {
            fps.record(20.0);
        }
        assert_eq!(fps.fps(), 50);
    }
}
