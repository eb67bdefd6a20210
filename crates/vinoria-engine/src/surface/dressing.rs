//! Set dressing drawn as point sprites: orbital rings and energy tendrils
//! around the orb, data rings, the scan bar, the floor platform and the rising stream
//! around the hologram.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use vinoria_common::Color;

use crate::activity::ActivityState;
use crate::palette::Palette;
use crate::points::{push_ring, PointSprite};
use crate::vector::{add, lerp, rotate_euler, Vec3};

/// A ring that spins about its own axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRing {
    pub radius: f32,
    pub y: f32,
    /// Spin in radians per second; negative spins the other way.
    pub speed: f32,
}

pub const DATA_RINGS: [DataRing; 3] = [
    DataRing { radius: 0.6, y: 2.5, speed: 1.0 },
    DataRing { radius: 0.8, y: 1.8, speed: -0.7 },
    DataRing { radius: 0.5, y: 1.0, speed: 0.5 },
];

pub const DATA_RING_COLOR: Color = Color::from_u32(0xa855f7);
pub const PLATFORM_COLOR: Color = Color::from_u32(0x7c3aed);

/// Orbital ring around the orb: `(radius, spin speed, tilt)`.
pub const ORBITAL_RINGS: [(f32, f32, f32); 4] = [
    (1.45, 0.25, 0.1),
    (1.6, -0.18, -0.15),
    (1.75, 0.12, 0.05),
    (1.9, -0.08, -0.08),
];

pub const STREAM_COUNT: usize = 100;
/// Per-tick rise of the stream.
pub const STREAM_RISE: f32 = 0.005;
pub const STREAM_TOP: f32 = 2.0;
pub const STREAM_BOTTOM: f32 = -2.0;
const STREAM_DRIFT: f32 = 0.001;
const STREAM_SPIN: f32 = 0.002;

pub const RING_POINTS: usize = 72;

pub const TENDRIL_COUNT: usize = 6;
pub const TENDRIL_POINTS: usize = 30;

/// Height of the sweeping scan bar in rig space.
pub fn scan_bar_y(t: f32) -> f32 {
    t.sin() * 1.5
}

/// Tilt applied to the data rings.
pub fn data_ring_tilt(t: f32) -> f32 {
    (t * 0.5).sin() * 0.1
}

/// Per-tick spin factor for the orbital rings.
const ORBITAL_SPIN_RATE: f32 = 0.008;

/// Orbital rings around the orb. Spin accumulates per tick and speeds up
/// with activity.
#[derive(Debug, Clone, Default)]
pub struct OrbitalRings {
    spins: [f32; 4],
}

impl OrbitalRings {
    pub fn update(&mut self, state: &ActivityState, frame_scale: f32) {
        let boost = 1.0 + state.activity * 0.5;
        for (spin, (_, speed, _)) in self.spins.iter_mut().zip(ORBITAL_RINGS) {
            *spin = (*spin + speed * ORBITAL_SPIN_RATE * boost * frame_scale) % TAU;
        }
    }

    pub fn write_points(
        &self,
        t: f32,
        state: &ActivityState,
        palette: &Palette,
        out: &mut Vec<PointSprite>,
    ) {
        let color = lerp(palette.accent, Palette::gold(), state.speaking * 0.3);
        let mut alpha =
            0.12 + state.speaking * 0.15 + state.listening * 0.12 + state.thinking * 0.08;
        alpha *= 0.6 + (t * 1.5).sin() * 0.15;
        for (spin, (radius, _, tilt)) in self.spins.iter().zip(ORBITAL_RINGS) {
            push_ring(
                out,
                [0.0; 3],
                radius,
                [FRAC_PI_2 + tilt, 0.0, *spin],
                RING_POINTS,
                PointSprite {
                    position: [0.0; 3],
                    size: 1.5,
                    color,
                    alpha,
                },
            );
        }
    }
}

/// Opacity of tendril `offset` at time `t`; brighter while speaking.
pub fn tendril_alpha(t: f32, offset: f32, speaking: f32) -> f32 {
    ((t * 3.0 + offset).sin() * 0.3 + 0.4) * (speaking * 0.7 + 0.3) * 0.15
}

/// Light streams curling out from the orb. The rest shape is fixed at
/// build time; each tick only adds a flowing wave.
#[derive(Debug, Clone)]
pub struct Tendrils {
    rest: Vec<Vec3>,
}

impl Tendrils {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut rest = Vec::with_capacity(TENDRIL_COUNT * TENDRIL_POINTS);
        for line in 0..TENDRIL_COUNT {
            let base_angle = line as f32 / TENDRIL_COUNT as f32 * TAU;
            for i in 0..TENDRIL_POINTS {
                let progress = i as f32 / (TENDRIL_POINTS - 1) as f32;
                let radius = 1.1 + progress * 0.8;
                let angle = base_angle + progress * 0.5;
                let y = rng.random_range(-0.15..0.15) + progress * 0.2;
                rest.push([angle.cos() * radius, y, angle.sin() * radius]);
            }
        }
        Self { rest }
    }

    pub fn write_points(
        &self,
        t: f32,
        state: &ActivityState,
        palette: &Palette,
        out: &mut Vec<PointSprite>,
    ) {
        out.reserve(self.rest.len());
        for (line, points) in self.rest.chunks(TENDRIL_POINTS).enumerate() {
            let offset = line as f32 * 0.5;
            let alpha = tendril_alpha(t, offset, state.speaking);
            let sway = (t * 1.5 + offset).cos() * 0.03;
            out.extend(points.iter().map(|p| PointSprite {
                position: [
                    p[0] + sway,
                    p[1] + (t * 2.0 + offset + p[0] * 3.0).sin() * 0.05,
                    p[2],
                ],
                size: 1.2,
                color: palette.accent,
                alpha,
            }));
        }
    }
}

/// Points that rise around the hologram and wrap back to the bottom.
#[derive(Debug, Clone)]
pub struct RisingStream {
    points: Vec<(Vec3, Vec3)>,
    spin: f32,
}

impl RisingStream {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let wine = Palette::wine();
        let gold = Palette::gold();
        let points = (0..STREAM_COUNT)
            .map(|_| {
                let angle = rng.random_range(0.0..TAU);
                let radius = rng.random_range(1.2..2.7);
                let y = rng.random_range(STREAM_BOTTOM..STREAM_TOP);
                let color = if rng.random_bool(0.5) { wine } else { gold };
                ([angle.cos() * radius, y, angle.sin() * radius], color)
            })
            .collect();
        Self { points, spin: 0.0 }
    }

    pub fn update(&mut self, t: f32, frame_scale: f32) {
        for (i, (p, _)) in self.points.iter_mut().enumerate() {
            p[1] += STREAM_RISE * frame_scale;
            if p[1] > STREAM_TOP {
                p[1] = STREAM_BOTTOM;
            }
            let phase = t + i as f32;
            p[0] += phase.sin() * STREAM_DRIFT * frame_scale;
            p[2] += phase.cos() * STREAM_DRIFT * frame_scale;
        }
        self.spin = (self.spin + STREAM_SPIN * frame_scale) % TAU;
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let spin = self.spin;
        self.points
            .iter()
            .map(move |(p, _)| rotate_euler(*p, [0.0, spin, 0.0]))
    }

    pub fn write_points(&self, out: &mut Vec<PointSprite>) {
        out.extend(self.positions().zip(&self.points).map(|(position, (_, color))| {
            PointSprite {
                position,
                size: 2.5,
                color: *color,
                alpha: 0.7,
            }
        }));
    }
}

/// Rig-attached dressing. `rig_euler`/`rig_offset` place rig-space points
/// in the world the same way the surface model transform does.
pub fn write_hologram_rig_dressing(
    t: f32,
    palette: &Palette,
    rig_euler: Vec3,
    rig_offset: Vec3,
    out: &mut Vec<PointSprite>,
) {
    let start = out.len();

    let ring_color = DATA_RING_COLOR.to_rgb_f32();
    for ring in DATA_RINGS {
        push_ring(
            out,
            [0.0, ring.y, 0.0],
            ring.radius,
            [FRAC_PI_2 + data_ring_tilt(t), t * ring.speed, 0.0],
            RING_POINTS,
            PointSprite {
                position: [0.0; 3],
                size: 1.5,
                color: ring_color,
                alpha: 0.6,
            },
        );
    }

    // Scan bar: a 1.5-wide horizontal line of points.
    let y = scan_bar_y(t);
    for i in 0..32 {
        let x = -0.75 + 1.5 * i as f32 / 31.0;
        out.push(PointSprite {
            position: [x, y, 0.0],
            size: 2.0,
            color: palette.accent,
            alpha: 0.8,
        });
    }

    for p in &mut out[start..] {
        p.position = add(rotate_euler(p.position, rig_euler), rig_offset);
    }
}

/// Floor platform below the hologram: a wide band and a thin spinning rim.
pub fn write_platform(t: f32, palette: &Palette, out: &mut Vec<PointSprite>) {
    let center = [0.0, -1.2, 0.0];
    let band = PLATFORM_COLOR.to_rgb_f32();
    for radius in [0.8, 0.93, 1.07, 1.2] {
        push_ring(
            out,
            center,
            radius,
            [-FRAC_PI_2, 0.0, 0.0],
            RING_POINTS,
            PointSprite {
                position: [0.0; 3],
                size: 1.5,
                color: band,
                alpha: 0.3,
            },
        );
    }
    push_ring(
        out,
        center,
        1.125,
        [-FRAC_PI_2, 0.0, t * 0.2],
        RING_POINTS,
        PointSprite {
            position: [0.0; 3],
            size: 2.0,
            color: palette.accent,
            alpha: 0.5,
        },
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_starts_inside_band() {
        let stream = RisingStream::new(5);
        assert_eq!(stream.points.len(), STREAM_COUNT);
        for p in stream.positions() {
            assert!((STREAM_BOTTOM..=STREAM_TOP).contains(&p[1]));
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((1.2..=2.7).contains(&r));
        }
    }

    #[test]
    fn stream_rises_and_wraps() {
        let mut stream = RisingStream::new(5);
        stream.points[0].0[1] = STREAM_TOP - STREAM_RISE * 0.5;
        stream.points[1].0[1] = 0.0;
        stream.update(0.0, 1.0);
        assert_eq!(stream.points[0].0[1], STREAM_BOTTOM);
        assert!((stream.points[1].0[1] - STREAM_RISE).abs() < 1e-6);
    }

    #[test]
    fn stream_is_seeded() {
        let a: Vec<Vec3> = RisingStream::new(9).positions().collect();
        let b: Vec<Vec3> = RisingStream::new(9).positions().collect();
        let c: Vec<Vec3> = RisingStream::new(10).positions().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn stream_paused_frame_does_not_rise() {
        let mut stream = RisingStream::new(1);
        let before: Vec<Vec3> = stream.positions().collect();
        stream.update(3.0, 0.0);
        let after: Vec<Vec3> = stream.positions().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn scan_bar_sweeps_rig_height() {
        assert_eq!(scan_bar_y(0.0), 0.0);
        assert!((scan_bar_y(FRAC_PI_2) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn rig_dressing_follows_offset() {
        let mut out = Vec::new();
        write_hologram_rig_dressing(0.0, &Palette::default(), [0.0; 3], [0.0, -0.5, 0.0], &mut out);
        assert_eq!(out.len(), DATA_RINGS.len() * RING_POINTS + 32);
        // Scan bar at t = 0 sits at rig y = 0, world y = -0.5.
        let bar = &out[out.len() - 1];
        assert!((bar.position[1] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn orbital_rings_brighten_with_activity() {
        let palette = Palette::default();
        let rings = OrbitalRings::default();
        let mut idle = Vec::new();
        let mut busy = Vec::new();
        rings.write_points(1.0, &ActivityState::default(), &palette, &mut idle);
        let speaking = ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() };
        rings.write_points(1.0, &speaking, &palette, &mut busy);
        assert_eq!(idle.len(), ORBITAL_RINGS.len() * RING_POINTS);
        assert!(busy[0].alpha > idle[0].alpha);
    }

    #[test]
    fn orbital_rings_spin_faster_when_active() {
        let mut calm = OrbitalRings::default();
        let mut busy = OrbitalRings::default();
        let active = ActivityState { thinking: 1.0, activity: 1.0, ..Default::default() };
        calm.update(&ActivityState::default(), 1.0);
        busy.update(&active, 1.0);
        assert!(busy.spins[0].abs() > calm.spins[0].abs());
        assert!((calm.spins[0] - 0.25 * ORBITAL_SPIN_RATE).abs() < 1e-7);
    }

    #[test]
    fn platform_points_sit_on_floor() {
        let mut out = Vec::new();
        write_platform(2.0, &Palette::default(), &mut out);
        assert!(out.iter().all(|p| (p.position[1] + 1.2).abs() < 1e-5));
    }

    #[test]
    fn tendrils_flow_around_rest_shape() {
        let tendrils = Tendrils::new(3);
        assert_eq!(tendrils.rest.len(), TENDRIL_COUNT * TENDRIL_POINTS);
        let palette = Palette::default();
        let mut out = Vec::new();
        tendrils.write_points(2.5, &ActivityState::default(), &palette, &mut out);
        assert_eq!(out.len(), TENDRIL_COUNT * TENDRIL_POINTS);
        for (p, rest) in out.iter().zip(&tendrils.rest) {
            assert!((p.position[0] - rest[0]).abs() <= 0.03 + 1e-6);
            assert!((p.position[1] - rest[1]).abs() <= 0.05 + 1e-6);
            assert_eq!(p.position[2], rest[2]);
        }
        // Each line starts just outside the orb and reaches out to 1.9.
        let first = tendrils.rest[0];
        let last = tendrils.rest[TENDRIL_POINTS - 1];
        assert!(((first[0] * first[0] + first[2] * first[2]).sqrt() - 1.1).abs() < 1e-5);
        assert!(((last[0] * last[0] + last[2] * last[2]).sqrt() - 1.9).abs() < 1e-5);
    }

    #[test]
    fn tendrils_brighten_while_speaking() {
        for i in 0..50 {
            let t = i as f32 * 0.2;
            let quiet = tendril_alpha(t, 0.5, 0.0);
            let loud = tendril_alpha(t, 0.5, 1.0);
            assert!(quiet > 0.0);
            assert!((loud / quiet - 1.0 / 0.3).abs() < 1e-3);
            assert!(loud <= 0.7 * 0.15 + 1e-6);
        }
    }

    #[test]
    fn tendrils_are_seeded() {
        assert_eq!(Tendrils::new(4).rest, Tendrils::new(4).rest);
        assert_ne!(Tendrils::new(4).rest, Tendrils::new(5).rest);
    }
}
