//! Click ripples around the orb.

use crate::points::{push_ring, PointSprite};

pub const RIPPLE_LIFETIME: f32 = 1.8;
pub const RIPPLE_RADIUS: f32 = 1.15;
/// How far a ripple grows beyond its initial radius.
pub const RIPPLE_GROWTH: f32 = 0.9;
pub const RIPPLE_PEAK_ALPHA: f32 = 0.35;
const RIPPLE_POINTS: usize = 96;
/// Oldest ripples are dropped past this count.
const MAX_RIPPLES: usize = 16;

pub fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p.clamp(0.0, 1.0)).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Ripple {
    born: f32,
}

impl Ripple {
    fn progress(&self, t: f32) -> f32 {
        ((t - self.born) / RIPPLE_LIFETIME).max(0.0)
    }
}

/// Active ripples, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn spawn(&mut self, t: f32) {
        if self.ripples.len() == MAX_RIPPLES {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple { born: t });
    }

    /// Drop ripples whose lifetime has elapsed. A clock that jumped
    /// backwards (time wrap) also expires them.
    pub fn update(&mut self, t: f32) {
        self.ripples
            .retain(|r| t >= r.born && r.progress(t) < 1.0);
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    /// `(scale, alpha)` of every active ripple.
    pub fn envelopes(&self, t: f32) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.ripples.iter().map(move |r| {
            let p = r.progress(t).min(1.0);
            let scale = 1.0 + ease_out_cubic(p) * RIPPLE_GROWTH;
            let alpha = (1.0 - p).powi(2) * RIPPLE_PEAK_ALPHA;
            (scale, alpha)
        })
    }

    /// Emit each ripple as a horizontal ring of points around the orb.
    pub fn write_points(&self, t: f32, color: [f32; 3], out: &mut Vec<PointSprite>) {
        for (scale, alpha) in self.envelopes(t) {
            push_ring(
                out,
                [0.0; 3],
                RIPPLE_RADIUS * scale,
                [std::f32::consts::FRAC_PI_2, 0.0, 0.0],
                RIPPLE_POINTS,
                PointSprite {
                    position: [0.0; 3],
                    size: 2.0,
                    color,
                    alpha,
                },
            );
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
