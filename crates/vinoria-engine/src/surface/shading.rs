//! CPU mirror of the holographic fragment stage in `holo_surface.wgsl`.
//!
//! Tests check the color and alpha bounds against this copy without a
//! device.

use crate::activity::ActivityState;
use crate::palette::{Palette, THINK_COLOR};
use crate::vector::{dot, lerp, saturate, scale, Vec3};

/// Upper bound on fragment alpha.
pub const MAX_ALPHA: f32 = 0.92;

/// Per-fragment inputs.
#[derive(Debug, Clone, Copy)]
pub struct ShadeInput {
    /// Unit vector from the fragment toward the camera.
    pub view_dir: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
    /// Displaced model-space position.
    pub position: Vec3,
    /// [`DisplacementTerms::shading`](super::DisplacementTerms::shading).
    pub displacement: f32,
}

/// Final fragment color and alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub color: Vec3,
    pub alpha: f32,
}

pub fn fresnel(view_dir: Vec3, normal: Vec3, power: f32) -> f32 {
    (1.0 - dot(view_dir, normal).abs()).max(0.0).powf(power)
}

pub fn shade(input: &ShadeInput, t: f32, state: &ActivityState, palette: &Palette) -> Shade {
    let [x, y, z] = input.position;
    let [u, v] = input.uv;

    let sharp = fresnel(input.view_dir, input.normal, 2.5);
    let soft = fresnel(input.view_dir, input.normal, 1.5);

    let du = u - 0.5;
    let dv = v - 0.5;
    let core = (1.0 - (du * du + dv * dv).sqrt() * 1.6).max(0.0).powf(1.8);

    let e1 = (x * 8.0 + t * 1.8 + y * 3.0).sin() * 0.5 + 0.5;
    let e2 = (y * 10.0 + t * 2.2 - z * 2.0).sin() * 0.5 + 0.5;
    let e3 = (z * 6.0 + t * 1.5 + x * 4.0).sin() * 0.5 + 0.5;
    let energy = (e1 * e2 + e2 * e3 + e3 * e1) / 3.0;

    let scan = ((y * 50.0 + t * 2.5).sin() * 0.5 + 0.5).powf(20.0) * 0.12;
    let band = (1.0 - ((t * 0.25).sin() - v).abs()).max(0.0).powf(35.0) * 0.25;
    let angle = x.atan2(z);
    let rotating = ((angle * 2.0 + t * 0.5).sin() * 0.5 + 0.5).powf(8.0) * 0.1 * (1.0 - sharp);

    let mut color = lerp(palette.base, palette.accent, sharp * 0.6 + energy * 0.25);

    let speak_pulse = ((t * 6.0).sin() * 0.5 + 0.5).powi(2);
    let speak_color = lerp(Palette::wine(), Palette::gold(), speak_pulse * 0.3);
    color = lerp(color, speak_color, state.speaking * speak_pulse * 0.3);

    let listen_glow = (t * 3.0).sin() * 0.3 + 0.7;
    color = lerp(color, scale(palette.accent, 1.4), state.listening * listen_glow * 0.35);

    let think_shift = (t * 1.2).sin() * 0.5 + 0.5;
    color = lerp(color, THINK_COLOR, state.thinking * think_shift * 0.25);

    color = scale(color, (1.0 + input.displacement * 2.0).max(0.0));
    color = crate::vector::add(color, scale(palette.accent, sharp * 0.2));

    let mut alpha = 0.3 + sharp * 0.5 + soft * 0.15 + core * 0.2;
    alpha += scan + band + rotating;
    alpha += state.speaking * 0.12 + state.listening * 0.08 + state.thinking * 0.06;
    alpha *= flicker(t);

    Shade {
        color: saturate(color),
        alpha: alpha.clamp(0.0, MAX_ALPHA),
    }
}

/// Micro-flicker multiplier applied to alpha.
pub fn flicker(t: f32) -> f32 {
    0.97 + (t * 30.0).sin() * 0.015 + (t * 53.0).sin() * 0.01
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vinoria_config::schema::WineCategory;

    #[test]
    fn fresnel_is_zero_facing_and_one_at_grazing() {
        let n = [0.0, 0.0, 1.0];
        assert!(fresnel([0.0, 0.0, 1.0], n, 2.5) < 1e-6);
        assert!((fresnel([1.0, 0.0, 0.0], n, 2.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn output_in_range_across_states_and_palettes() {
        let states = [
            ActivityState::default(),
            ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() },
            ActivityState { listening: 1.0, activity: 1.0, ..Default::default() },
            ActivityState { speaking: 1.0, listening: 1.0, thinking: 1.0, activity: 1.0 },
        ];
        for category in WineCategory::ALL {
            let palette = Palette::for_category(category);
            for state in &states {
                for i in 0..40 {
                    let t = i as f32 * 0.173;
                    let a = i as f32 * 0.9;
                    let n = [a.sin(), (a * 0.3).cos(), a.cos()];
                    let input = ShadeInput {
                        view_dir: [0.0, 0.0, 1.0],
                        normal: crate::vector::normalize_or(n, [0.0, 0.0, 1.0]),
                        uv: [(i % 7) as f32 / 6.0, (i % 5) as f32 / 4.0],
                        position: n,
                        displacement: 0.1 * (t * 3.0).sin(),
                    };
                    let out = shade(&input, t, state, &palette);
                    assert!(out.color.iter().all(|c| (0.0..=1.0).contains(c)));
                    assert!((0.0..=MAX_ALPHA).contains(&out.alpha));
                }
            }
        }
    }

    #[test]
    fn rim_is_more_opaque_than_center() {
        let palette = Palette::default();
        let state = ActivityState::default();
        let base = ShadeInput {
            view_dir: [0.0, 0.0, 1.0],
            normal: [0.0, 0.0, 1.0],
            uv: [0.0, 0.0],
            position: [0.0, 0.3, 1.0],
            displacement: 0.0,
        };
        let rim = ShadeInput {
            normal: [1.0, 0.0, 0.0],
            position: [1.0, 0.3, 0.0],
            ..base
        };
        let t = 4.0;
        assert!(shade(&rim, t, &state, &palette).alpha > shade(&base, t, &state, &palette).alpha);
    }

    #[test]
    fn flicker_stays_near_one() {
        for i in 0..500 {
            let f = flicker(i as f32 * 0.01);
            assert!((0.945..=0.995).contains(&f));
        }
    }
}
