//! Per-tick context handed to the surface and particle stages.

use crate::activity::ActivityState;
use crate::clock::FrameTime;
use crate::palette::Palette;

/// Read-only view of everything a stage needs for one tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub time: FrameTime,
    pub state: &'a ActivityState,
    /// Smoothed pointer in `[-1, 1]`.
    pub pointer: [f32; 2],
    pub palette: &'a Palette,
}

impl FrameContext<'_> {
    pub fn t(&self) -> f32 {
        self.time.elapsed
    }
}
