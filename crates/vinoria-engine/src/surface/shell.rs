//! Glow shells around the orb: a pulsing inner core seen through its far
//! side and a breathing outer atmosphere.
//!
//! Both shells are a unit sphere scaled on the GPU. The engine computes the
//! per-tick scale, color and rim alpha; the shader only adds the fresnel
//! falloff (`glow_shell.wgsl`).

use crate::activity::ActivityState;
use crate::palette::Palette;
use crate::vector::{lerp, saturate, scale, Vec3};

const INNER_SPEAK_TINT: Vec3 = [0.9, 0.3, 0.4];
const ATMOSPHERE_SPEAK_TINT: Vec3 = [0.85, 0.25, 0.35];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Inside the orb, drawn from its far hemisphere only.
    InnerGlow,
    /// Outside the orb, both hemispheres.
    Atmosphere,
}

impl ShellKind {
    pub const ALL: [ShellKind; 2] = [ShellKind::Atmosphere, ShellKind::InnerGlow];

    pub fn radius(self) -> f32 {
        match self {
            ShellKind::InnerGlow => 0.82,
            ShellKind::Atmosphere => 1.35,
        }
    }

    pub fn fresnel_power(self) -> f32 {
        match self {
            ShellKind::InnerGlow => 4.5,
            ShellKind::Atmosphere => 2.2,
        }
    }

    /// Alpha at a full rim when the pulse is 1.
    pub fn alpha_gain(self) -> f32 {
        match self {
            ShellKind::InnerGlow => 0.45,
            ShellKind::Atmosphere => 0.22,
        }
    }

    pub fn far_side_only(self) -> bool {
        self == ShellKind::InnerGlow
    }

    /// Radial breathing multiplier for this tick.
    pub fn breathing(self, t: f32, state: &ActivityState) -> f32 {
        match self {
            ShellKind::InnerGlow => {
                1.0 + (t * 2.0).sin() * 0.02 + state.speaking * (t * 8.0).sin() * 0.03
            }
            ShellKind::Atmosphere => {
                1.0 + (t * 0.4).sin() * 0.025
                    + (t * 0.7).sin() * 0.015
                    + state.speaking * (t * 5.0).sin() * 0.035
                    + state.listening * (t * 3.0).sin() * 0.02
            }
        }
    }

    /// Opacity pulse in `[0.35, 1]` for the inner shell and `[0.43, 0.87]`
    /// for the atmosphere.
    pub fn pulse(self, t: f32, state: &ActivityState) -> f32 {
        match self {
            ShellKind::InnerGlow => 0.5 + (t * 1.8).sin() * 0.15 + state.activity * 0.35,
            ShellKind::Atmosphere => 0.55 + (t * 1.2).sin() * 0.12 + state.activity * 0.2,
        }
    }

    pub fn color(self, state: &ActivityState, palette: &Palette) -> Vec3 {
        match self {
            ShellKind::InnerGlow => {
                let c = lerp(palette.accent, INNER_SPEAK_TINT, state.speaking * 0.2);
                let c = lerp(c, scale(palette.accent, 1.3), state.listening * 0.3);
                saturate(scale(c, 1.6))
            }
            ShellKind::Atmosphere => saturate(lerp(
                palette.base,
                ATMOSPHERE_SPEAK_TINT,
                state.speaking * 0.15,
            )),
        }
    }
}

/// One shell as drawn this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellFrame {
    pub kind: ShellKind,
    /// Radius after breathing.
    pub radius: f32,
    pub fresnel_power: f32,
    /// Alpha where the fresnel term is 1.
    pub rim_alpha: f32,
    pub color: Vec3,
    pub far_side_only: bool,
}

impl ShellFrame {
    pub fn new(kind: ShellKind, t: f32, state: &ActivityState, palette: &Palette) -> Self {
        Self {
            kind,
            radius: kind.radius() * kind.breathing(t, state),
            fresnel_power: kind.fresnel_power(),
            rim_alpha: (kind.pulse(t, state) * kind.alpha_gain()).clamp(0.0, 1.0),
            color: kind.color(state, palette),
            far_side_only: kind.far_side_only(),
        }
    }

    /// Fragment alpha for a surface point whose normal makes `n_dot_v`
    /// with the direction to the camera. Mirrors `glow_shell.wgsl`.
    pub fn alpha(&self, n_dot_v: f32) -> f32 {
        if self.far_side_only && n_dot_v > 0.0 {
            return 0.0;
        }
        let fresnel = (1.0 - n_dot_v.abs()).max(0.0).powf(self.fresnel_power);
        fresnel * self.rim_alpha
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<ActivityState> {
        let mut out = Vec::new();
        for s in [0.0, 0.5, 1.0] {
            for l in [0.0, 1.0] {
                for th in [0.0, 1.0] {
                    out.push(ActivityState {
                        speaking: s,
                        listening: l,
                        thinking: th,
                        activity: f32::max(s, f32::max(l, th)),
                    });
                }
            }
        }
        out
    }

    #[test]
    fn idle_radii_stay_near_rest() {
        let idle = ActivityState::default();
        for i in 0..600 {
            let t = i as f32 / 60.0;
            let inner = ShellFrame::new(ShellKind::InnerGlow, t, &idle, &Palette::default());
            let outer = ShellFrame::new(ShellKind::Atmosphere, t, &idle, &Palette::default());
            assert!((inner.radius - 0.82).abs() <= 0.82 * 0.02 + 1e-5);
            assert!((outer.radius - 1.35).abs() <= 1.35 * 0.04 + 1e-5);
        }
    }

    #[test]
    fn speaking_adds_fast_inner_pulse() {
        let speaking = ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() };
        let spread = |state: &ActivityState| {
            let radii: Vec<f32> = (0..240)
                .map(|i| ShellKind::InnerGlow.breathing(i as f32 / 60.0, state))
                .collect();
            let max = radii.iter().cloned().fold(f32::MIN, f32::max);
            let min = radii.iter().cloned().fold(f32::MAX, f32::min);
            max - min
        };
        assert!(spread(&speaking) > spread(&ActivityState::default()) + 0.03);
    }

    #[test]
    fn rim_alpha_bounded_by_gain() {
        let palette = Palette::default();
        for state in states() {
            for i in 0..120 {
                let t = i as f32 * 0.13;
                for kind in ShellKind::ALL {
                    let shell = ShellFrame::new(kind, t, &state, &palette);
                    assert!(shell.rim_alpha >= 0.0);
                    assert!(shell.rim_alpha <= kind.alpha_gain() + 1e-6);
                    assert!(shell.color.iter().all(|c| (0.0..=1.0).contains(c)));
                }
            }
        }
    }

    #[test]
    fn activity_brightens_shells() {
        let palette = Palette::default();
        let idle = ShellFrame::new(ShellKind::InnerGlow, 1.0, &ActivityState::default(), &palette);
        let thinking = ActivityState { thinking: 1.0, activity: 1.0, ..Default::default() };
        let busy = ShellFrame::new(ShellKind::InnerGlow, 1.0, &thinking, &palette);
        assert!((busy.rim_alpha - idle.rim_alpha - 0.35 * 0.45).abs() < 1e-5);
    }

    #[test]
    fn fresnel_peaks_at_rim() {
        let shell = ShellFrame::new(
            ShellKind::Atmosphere,
            0.0,
            &ActivityState::default(),
            &Palette::default(),
        );
        assert_eq!(shell.alpha(1.0), 0.0);
        assert!((shell.alpha(0.0) - shell.rim_alpha).abs() < 1e-6);
        assert!(shell.alpha(0.3) > shell.alpha(0.6));
        // The atmosphere shows both hemispheres.
        assert!((shell.alpha(-0.3) - shell.alpha(0.3)).abs() < 1e-6);
    }

    #[test]
    fn inner_glow_hides_near_side() {
        let shell = ShellFrame::new(
            ShellKind::InnerGlow,
            0.0,
            &ActivityState::default(),
            &Palette::default(),
        );
        assert_eq!(shell.alpha(0.2), 0.0);
        assert!(shell.alpha(-0.2) > 0.0);
    }

    #[test]
    fn inner_glow_tints_toward_accent() {
        let palette = Palette::default();
        let shell = ShellFrame::new(ShellKind::InnerGlow, 0.0, &ActivityState::default(), &palette);
        let expected = saturate(scale(palette.accent, 1.6));
        assert_eq!(shell.color, expected);
        let outer = ShellFrame::new(ShellKind::Atmosphere, 0.0, &ActivityState::default(), &palette);
        assert_eq!(outer.color, saturate(palette.base));
    }
}
