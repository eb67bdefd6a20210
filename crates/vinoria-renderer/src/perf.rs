//! Frame timing and periodic FPS logging.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window length.
pub const FRAME_SAMPLES: usize = 120;

/// Tracks frame durations for FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    log_interval: Option<Duration>,
    since_log: Duration,
}

impl FrameTimer {
    /// Create a new frame timer with a 120-sample rolling window.
    ///
    /// `log_interval_secs` of zero (or less) disables periodic logging.
    pub fn new(log_interval_secs: f64) -> Self {
        let log_interval = (log_interval_secs > 0.0 && log_interval_secs.is_finite())
            .then(|| Duration::from_secs_f64(log_interval_secs));
        Self {
            frame_times: VecDeque::with_capacity(FRAME_SAMPLES),
            last_frame: Instant::now(),
            max_samples: FRAME_SAMPLES,
            log_interval,
            since_log: Duration::ZERO,
        }
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt);
    }

    /// Record one frame duration.
    pub fn record(&mut self, dt: Duration) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        self.since_log += dt;
    }

    /// Whether a stats line is due. Resets the interval when it returns true.
    pub fn log_due(&mut self) -> bool {
        match self.log_interval {
            Some(interval) if self.since_log >= interval => {
                self.since_log = Duration::ZERO;
                true
            }
            _ => false,
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(0.0)
    }
}
