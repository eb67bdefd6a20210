//! Frame timing: a monotonic source, a synthetic source for tests and
//! headless runs, and the per-frame delta/elapsed bookkeeping.

use std::time::Instant;

/// Elapsed time wraps here so `f32` phase math keeps its precision.
pub const TIME_WRAP_SECONDS: f64 = 21600.0;

/// Default cap on a single frame's delta.
pub const DEFAULT_MAX_DELTA: f64 = 0.1;

/// A source of seconds since some fixed start.
pub trait Clock {
    /// Current reading. Synthetic clocks advance one step per call.
    fn now(&mut self) -> f64;
}

/// Wall clock backed by [`Instant`].
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: starts at zero and advances `step` per reading.
#[derive(Debug, Clone)]
pub struct SyntheticClock {
    step: f64,
    next: f64,
}

impl SyntheticClock {
    pub fn new(step: f64) -> Self {
        Self { step, next: 0.0 }
    }

    /// 60 Hz display refresh.
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl Clock for SyntheticClock {
    fn now(&mut self) -> f64 {
        let now = self.next;
        self.next += self.step;
        now
    }
}

/// Timing for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since start, wrapped at [`TIME_WRAP_SECONDS`].
    pub elapsed: f32,
    /// Seconds since the previous tick, capped.
    pub delta: f32,
    /// Tick counter, starting at zero.
    pub frame: u64,
}

impl FrameTime {
    /// Timing of tick `frame` of a fixed-rate run.
    pub fn fixed(frame: u64, step: f32) -> Self {
        let elapsed = (frame as f64 * step as f64) % TIME_WRAP_SECONDS;
        Self {
            elapsed: elapsed as f32,
            delta: if frame == 0 { 0.0 } else { step },
            frame,
        }
    }

    /// Multiplier that turns per-tick rates (tuned at 60 Hz) into this
    /// frame's rates.
    pub fn frame_scale(&self) -> f32 {
        (self.delta * 60.0).clamp(0.0, 6.0)
    }
}

/// Turns clock readings into [`FrameTime`]s.
pub struct FrameClock<C: Clock> {
    clock: C,
    last: Option<f64>,
    max_delta: f64,
    frame: u64,
}

impl<C: Clock> FrameClock<C> {
    pub fn new(clock: C, max_delta: f64) -> Self {
        Self {
            clock,
            last: None,
            max_delta: max_delta.max(0.0),
            frame: 0,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = self.clock.now();
        let delta = match self.last {
            Some(last) => (now - last).clamp(0.0, self.max_delta),
            None => 0.0,
        };
        self.last = Some(now);

        let time = FrameTime {
            elapsed: (now % TIME_WRAP_SECONDS) as f32,
            delta: delta as f32,
            frame: self.frame,
        };
        self.frame += 1;
        time
    }

    /// Forget the previous reading so the next tick reports a zero delta.
    pub fn reset_delta(&mut self) {
        self.last = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
