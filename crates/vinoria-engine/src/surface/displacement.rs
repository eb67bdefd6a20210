//! Per-vertex displacement: idle breathing, pointer attraction, and the
//! three state-weighted deformations.
//!
//! Evaluation order matters: every term samples the position produced by
//! the terms before it.

use crate::activity::ActivityState;
use crate::noise_field::NoiseField;
use crate::vector::{add, dot, normalize_or, scale, Vec3};

/// Peak radial scale of the idle breathing term.
pub const BREATHING_AMPLITUDE: f32 = 0.015 + 0.008 + 0.005;
/// Peak offset of the pointer attraction term.
pub const POINTER_AMPLITUDE: f32 = 0.02;
/// State weights at or below this skip their deformation entirely.
pub const STATE_GATE: f32 = 0.01;
/// Direction the surface leans toward while listening.
pub const LISTEN_LEAN: Vec3 = [0.0, 0.1, 0.3];

/// Inputs shared by every vertex in a tick.
#[derive(Debug, Clone, Copy)]
pub struct DisplacementParams {
    pub t: f32,
    pub state: ActivityState,
    pub pointer: [f32; 2],
    /// Global multiplier on pointer and state terms (1.0 orb, 0.6 rig).
    pub amplitude: f32,
}

/// Breakdown of one vertex's displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplacementTerms {
    /// Radial scale offset: the position is multiplied by `1 + breathing`.
    pub breathing: f32,
    /// Offset along the normal from pointer attraction.
    pub pointer: f32,
    pub speaking: f32,
    pub listening: f32,
    pub thinking: f32,
}

impl DisplacementTerms {
    /// The scalar the fragment stage uses for brightness.
    pub fn shading(&self) -> f32 {
        self.speaking + self.listening + self.thinking
    }
}

/// Idle breathing scale offset at time `t`.
pub fn breathing(t: f32) -> f32 {
    (t * 0.4).sin() * 0.015 + (t * 0.7 + 1.0).sin() * 0.008 + (t * 1.1 + 2.0).sin() * 0.005
}

/// Displace one vertex from its rest position.
pub fn displace(
    noise: &NoiseField,
    rest: Vec3,
    normal: Vec3,
    params: &DisplacementParams,
) -> (Vec3, DisplacementTerms) {
    let t = params.t;
    let state = &params.state;
    let amp = params.amplitude;
    let mut terms = DisplacementTerms {
        breathing: breathing(t),
        ..Default::default()
    };

    let mut pos = scale(rest, 1.0 + terms.breathing);

    let pointer_dir = normalize_or(
        [params.pointer[0] * 0.3, params.pointer[1] * 0.3, 0.5],
        [0.0, 0.0, 1.0],
    );
    let pointer_dot = dot(normalize_or(pos, normal), pointer_dir);
    terms.pointer = pointer_dot * POINTER_AMPLITUDE * (1.0 - state.activity * 0.5) * amp;
    pos = add(pos, scale(normal, terms.pointer));

    if state.speaking > STATE_GATE {
        let wave = (t * 5.0).sin() * 0.035
            + (t * 10.0).sin() * 0.018
            + (t * 15.0 + 0.5).sin() * 0.008
            + noise.fbm(offset(scale(pos, 1.5), t * 1.5)) * 0.025;
        terms.speaking = wave * state.speaking * amp;
        pos = add(pos, scale(normal, terms.speaking));
    }

    if state.listening > STATE_GATE {
        let pulse = (t * 3.0).sin() * 0.02;
        let focus = (t * 1.5).sin() * 0.015;
        let bias = dot(normalize_or(pos, normal), LISTEN_LEAN) * 0.02;
        let grain = noise.snoise(offset(scale(pos, 2.5), t * 2.0)) * 0.015;
        // The focus term brightens without moving the vertex.
        terms.listening = (pulse + focus + grain) * state.listening * amp;
        pos = add(pos, scale(normal, (pulse + grain) * state.listening * amp));
        pos = add(pos, scale(LISTEN_LEAN, bias * state.listening * amp));
    }

    if state.thinking > STATE_GATE {
        let drift = noise.fbm(offset(scale(pos, 2.0), t * 0.8)) * 0.03;
        let grain = noise.snoise(offset(scale(pos, 4.0), -t * 1.2)) * 0.015;
        let wave = (pos[1] * 6.0 + t * 1.5).sin() * (pos[0] * 4.0 + t).cos() * 0.012;
        terms.thinking = (drift + grain + wave) * state.thinking * amp;
        pos = add(pos, scale(normal, terms.thinking));
    }

    (pos, terms)
}

fn offset(p: Vec3, by: f32) -> Vec3 {
    [p[0] + by, p[1] + by, p[2] + by]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{length, sub};

    fn params(t: f32, state: ActivityState, pointer: [f32; 2]) -> DisplacementParams {
        DisplacementParams {
            t,
            state,
            pointer,
            amplitude: 1.0,
        }
    }

    fn unit_points() -> Vec<Vec3> {
        (0..64)
            .map(|i| {
                let a = i as f32 * 0.7;
                let b = i as f32 * 0.31;
                [a.cos() * b.sin(), b.cos(), a.sin() * b.sin()]
            })
            .map(|p| normalize_or(p, [0.0, 1.0, 0.0]))
            .collect()
    }

    #[test]
    fn breathing_is_bounded() {
        for i in 0..2000 {
            assert!(breathing(i as f32 * 0.05).abs() <= BREATHING_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn idle_displacement_bounded_by_breathing_and_pointer() {
        let noise = NoiseField::new(3);
        let idle = ActivityState::default();
        for i in 0..60 {
            let t = i as f32 * 0.37;
            let pointer = [(t * 0.5).sin(), (t * 0.3).cos()];
            for rest in unit_points() {
                let (pos, terms) = displace(&noise, rest, rest, &params(t, idle, pointer));
                let moved = length(sub(pos, rest));
                assert!(moved <= BREATHING_AMPLITUDE + POINTER_AMPLITUDE + 1e-5);
                assert_eq!(terms.shading(), 0.0);
            }
        }
    }

    #[test]
    fn gated_states_are_skipped() {
        let noise = NoiseField::new(3);
        let state = ActivityState {
            speaking: 0.01,
            listening: 0.005,
            thinking: 0.0,
            activity: 0.01,
        };
        let (_, terms) = displace(&noise, [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], &params(1.3, state, [0.0; 2]));
        assert_eq!(terms.speaking, 0.0);
        assert_eq!(terms.listening, 0.0);
    }

    #[test]
    fn speaking_moves_along_normal() {
        let noise = NoiseField::new(3);
        let state = ActivityState {
            speaking: 1.0,
            activity: 1.0,
            ..Default::default()
        };
        // t where sin(5t) dominates positively
        let t = std::f32::consts::FRAC_PI_2 / 5.0;
        let (_, terms) = displace(&noise, [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], &params(t, state, [0.0; 2]));
        assert!(terms.speaking.abs() > 0.0);
        assert!(terms.speaking.abs() <= 0.035 + 0.018 + 0.008 + 0.025 + 1e-6);
    }

    #[test]
    fn amplitude_scales_state_terms() {
        let noise = NoiseField::new(9);
        let state = ActivityState {
            thinking: 1.0,
            activity: 1.0,
            ..Default::default()
        };
        let rest = [0.0, 0.0, 1.0];
        let mut p = params(2.0, state, [0.0; 2]);
        let (_, full) = displace(&noise, rest, rest, &p);
        p.amplitude = 0.0;
        let (_, none) = displace(&noise, rest, rest, &p);
        assert!(full.thinking.abs() > 0.0);
        assert_eq!(none.thinking, 0.0);
        assert_eq!(none.pointer, 0.0);
    }

    #[test]
    fn zero_rest_position_stays_finite() {
        let noise = NoiseField::new(1);
        let state = ActivityState {
            speaking: 1.0,
            listening: 1.0,
            thinking: 1.0,
            activity: 1.0,
        };
        let (pos, _) = displace(&noise, [0.0; 3], [0.0, 1.0, 0.0], &params(0.7, state, [1.0, -1.0]));
        assert!(pos.iter().all(|c| c.is_finite()));
    }
}
