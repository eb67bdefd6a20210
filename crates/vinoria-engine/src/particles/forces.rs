//! The blended force fields acting on each particle, plus the per-tick
//! retention and speed ceiling. All magnitudes are per 60 Hz tick.

use crate::activity::ActivityState;
use crate::vector::{normalize_or, scale, sub, Vec3, EPSILON};

pub const FLOW_BASE: f32 = 0.0004;
pub const GATHER_STRENGTH: f32 = 0.0006;
pub const ORBIT_STRENGTH: f32 = 0.003;
pub const RING_STRENGTH: f32 = 0.0006;
pub const SWIRL_STRENGTH: f32 = 0.0003;
pub const PULSE_STRENGTH: f32 = 0.0012;
/// Speed ceiling at rest.
pub const BASE_CEILING: f32 = 0.02;
/// Velocity kept after a particle is pushed back onto the boundary.
pub const BOUNDARY_RESTITUTION: f32 = 0.5;

/// Pseudo-curl flow: each axis is a product of sines/cosines of the
/// other two, so the field is divergence-free.
pub fn flow(p: Vec3, t: f32, activity: f32) -> Vec3 {
    let [x, y, z] = p;
    let speed = FLOW_BASE * (1.0 + activity);
    [
        (1.3 * y + 0.4 * t).sin() * (0.9 * z - 0.3 * t).cos() * speed,
        (1.1 * z + 0.35 * t).sin() * (0.8 * x + 0.25 * t).cos() * speed,
        (1.2 * x - 0.3 * t).sin() * (1.0 * y + 0.45 * t).cos() * speed,
    ]
}

/// Spring toward the focus point.
pub fn gather(p: Vec3, focus: Vec3, listening: f32) -> Vec3 {
    scale(sub(focus, p), GATHER_STRENGTH * listening)
}

/// Tangential push around the vertical axis through the focus point.
pub fn orbit(p: Vec3, focus: Vec3, thinking: f32) -> Vec3 {
    let rel = sub(p, focus);
    let tangent = normalize_or([-rel[2], 0.0, rel[0]], [0.0; 3]);
    scale(tangent, ORBIT_STRENGTH * thinking)
}

/// Flatten onto the focus plane and pull the horizontal radius toward
/// `ring_radius`. Particles on the axis get no radial pull.
pub fn ring(p: Vec3, focus: Vec3, ring_radius: f32, listening: f32) -> Vec3 {
    let rel = sub(p, focus);
    let k = RING_STRENGTH * listening;
    let horizontal = (rel[0] * rel[0] + rel[2] * rel[2]).sqrt();
    let mut f = [0.0, -rel[1] * k, 0.0];
    if horizontal > EPSILON {
        let pull = (ring_radius - horizontal) * k / horizontal;
        f[0] = rel[0] * pull;
        f[2] = rel[2] * pull;
    }
    f
}

/// Constant ambient swirl around the world vertical axis.
pub fn swirl(p: Vec3, thinking: f32) -> Vec3 {
    let tangent = normalize_or([-p[2], 0.0, p[0]], [0.0; 3]);
    scale(tangent, SWIRL_STRENGTH * (1.0 + thinking))
}

/// Outward push along the normalized position, signed by the pulse wave.
pub fn pulse(p: Vec3, wave: f32, speaking: f32) -> Vec3 {
    scale(normalize_or(p, [0.0; 3]), PULSE_STRENGTH * wave * speaking)
}

/// `sin(2π·hz·t)`.
pub fn pulse_wave(t: f32, hz: f32) -> f32 {
    (std::f32::consts::TAU * hz * t).sin()
}

/// Fraction of velocity kept per tick: more damping while listening,
/// less while speaking.
pub fn retention(state: &ActivityState) -> f32 {
    0.96 - 0.04 * state.listening + 0.02 * state.speaking
}

/// Maximum speed for this tick.
pub fn speed_ceiling(state: &ActivityState) -> f32 {
    BASE_CEILING
        * (1.0 + 1.5 * state.speaking + 0.5 * state.thinking - 0.3 * state.listening)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{dot, length};

    fn full() -> ActivityState {
        ActivityState {
            speaking: 1.0,
            listening: 1.0,
            thinking: 1.0,
            activity: 1.0,
        }
    }

    #[test]
    fn flow_is_divergence_free() {
        let h = 1e-2;
        for i in 0..20 {
            let p = [i as f32 * 0.3 - 3.0, (i as f32 * 0.7).sin(), (i as f32 * 0.4).cos()];
            let t = i as f32 * 0.2;
            let dx = (flow([p[0] + h, p[1], p[2]], t, 0.0)[0] - flow([p[0] - h, p[1], p[2]], t, 0.0)[0]) / (2.0 * h);
            let dy = (flow([p[0], p[1] + h, p[2]], t, 0.0)[1] - flow([p[0], p[1] - h, p[2]], t, 0.0)[1]) / (2.0 * h);
            let dz = (flow([p[0], p[1], p[2] + h], t, 0.0)[2] - flow([p[0], p[1], p[2] - h], t, 0.0)[2]) / (2.0 * h);
            assert!((dx + dy + dz).abs() < 1e-7);
        }
    }

    #[test]
    fn flow_grows_with_activity() {
        let p = [0.4, 0.9, -0.2];
        assert!(length(flow(p, 1.0, 1.0)) > length(flow(p, 1.0, 0.0)));
    }

    #[test]
    fn gather_points_at_focus() {
        let f = gather([2.0, 0.0, 0.0], [0.0; 3], 1.0);
        assert!(f[0] < 0.0);
        assert_eq!(gather([2.0, 0.0, 0.0], [0.0; 3], 0.0), [0.0; 3]);
    }

    #[test]
    fn orbit_is_tangential() {
        let p = [1.0, 0.5, 1.0];
        let f = orbit(p, [0.0; 3], 1.0);
        assert!(dot(f, [p[0], 0.0, p[2]]).abs() < 1e-8);
        assert!((length(f) - ORBIT_STRENGTH).abs() < 1e-8);
    }

    #[test]
    fn forces_on_axis_are_finite() {
        let p = [0.0, 1.0, 0.0];
        let state = full();
        for f in [
            orbit(p, [0.0; 3], state.thinking),
            ring(p, [0.0; 3], 0.9, state.listening),
            swirl(p, state.thinking),
            pulse([0.0; 3], 1.0, state.speaking),
        ] {
            assert!(f.iter().all(|c| c.is_finite()));
        }
        assert_eq!(ring(p, [0.0; 3], 0.9, 1.0)[0], 0.0);
    }

    #[test]
    fn ring_pulls_toward_radius() {
        let outside = ring([2.0, 0.0, 0.0], [0.0; 3], 0.9, 1.0);
        let inside = ring([0.3, 0.0, 0.0], [0.0; 3], 0.9, 1.0);
        assert!(outside[0] < 0.0);
        assert!(inside[0] > 0.0);
        let above = ring([0.9, 1.0, 0.0], [0.0; 3], 0.9, 1.0);
        assert!(above[1] < 0.0);
        assert!(above[0].abs() < 1e-8);
    }

    #[test]
    fn pulse_wave_has_requested_period() {
        assert!(pulse_wave(0.0, 0.8).abs() < 1e-6);
        assert!((pulse_wave(1.25 / 4.0, 0.8) - 1.0).abs() < 1e-5);
        assert!(pulse_wave(1.25, 0.8).abs() < 1e-5);
    }

    #[test]
    fn retention_orders_by_state() {
        let listening = ActivityState { listening: 1.0, activity: 1.0, ..Default::default() };
        let speaking = ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() };
        let idle = ActivityState::default();
        assert!(retention(&listening) < retention(&idle));
        assert!(retention(&speaking) > retention(&idle));
        assert!(retention(&speaking) < 1.0);
    }

    #[test]
    fn ceiling_is_positive_for_every_state() {
        for s in [ActivityState::default(), full()] {
            assert!(speed_ceiling(&s) > 0.0);
        }
        let listening = ActivityState { listening: 1.0, activity: 1.0, ..Default::default() };
        assert!((speed_ceiling(&listening) - 0.014).abs() < 1e-6);
    }
}
