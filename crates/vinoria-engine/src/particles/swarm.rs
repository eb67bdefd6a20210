//! The particle swarm: a fixed population integrated once per tick.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tracing::debug;

use super::forces::{
    flow, gather, orbit, pulse, pulse_wave, retention, ring, speed_ceiling, swirl,
    BOUNDARY_RESTITUTION,
};
use super::types::{Particle, SwarmAppearance, SwarmParams};
use crate::activity::ActivityState;
use crate::frame::FrameContext;
use crate::palette::Palette;
use crate::points::PointSprite;
use crate::vector::{add, length, lerp, normalize_or, saturate, scale, sub, Vec3};

/// Initial distance band from the origin.
pub const SPAWN_RADIUS: (f32, f32) = (1.2, 2.6);
/// Lowest value any color channel is allowed to reach.
pub const COLOR_FLOOR: f32 = 0.08;

pub struct ParticleSwarm {
    params: SwarmParams,
    particles: Vec<Particle>,
    focus: Vec3,
    pulse: f32,
    ceiling: f32,
    appearance: SwarmAppearance,
}

impl ParticleSwarm {
    /// Allocate and place the whole population from `seed`.
    pub fn new(params: SwarmParams, seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let max_spawn = SPAWN_RADIUS.1.min(params.boundary_radius);
        let min_spawn = SPAWN_RADIUS.0.min(max_spawn * 0.5);
        let particles = (0..params.count)
            .map(|_| {
                let u: f32 = rng.random_range(-1.0..=1.0);
                let theta = rng.random_range(0.0..TAU);
                let radius = rng.random_range(min_spawn..=max_spawn);
                let s = (1.0 - u * u).max(0.0).sqrt();
                Particle {
                    position: [radius * s * theta.cos(), radius * u, radius * s * theta.sin()],
                    velocity: [0.0; 3],
                    phase: rng.random_range(0.0..TAU),
                    color: [0.0; 3],
                    size: params.base_size,
                }
            })
            .collect();

        debug!(count = params.count, seed, "particle swarm allocated");

        Self {
            focus: params.focus,
            params,
            particles,
            pulse: 0.0,
            ceiling: speed_ceiling(&ActivityState::default()),
            appearance: SwarmAppearance::default(),
        }
    }

    /// Integrate one tick.
    pub fn step(&mut self, ctx: &FrameContext) {
        let t = ctx.t();
        let state = ctx.state;
        let s = ctx.time.frame_scale();

        self.focus = self.focus_at(t);
        self.pulse = pulse_wave(t, self.params.pulse_hz);
        self.ceiling = speed_ceiling(state);
        let keep = retention(state).powf(s);
        let boundary = self.params.boundary_radius;

        for particle in &mut self.particles {
            let p = particle.position;
            let mut force = flow(p, t, state.activity);
            force = add(force, gather(p, self.focus, state.listening));
            force = add(force, orbit(p, self.focus, state.thinking));
            force = add(force, ring(p, self.focus, self.params.ring_radius, state.listening));
            force = add(force, swirl(p, state.thinking));
            force = add(force, pulse(p, self.pulse, state.speaking));

            let mut v = scale(add(particle.velocity, scale(force, s)), keep);
            let speed = length(v);
            if speed > self.ceiling {
                v = scale(v, self.ceiling / speed);
            }

            let mut next = add(p, scale(v, s));
            let dist = length(next);
            if dist > boundary {
                next = scale(next, boundary / dist);
                v = scale(v, BOUNDARY_RESTITUTION);
            }

            particle.position = next;
            particle.velocity = v;
        }

        self.recolor(t, state, ctx.palette);
    }

    fn recolor(&mut self, t: f32, state: &ActivityState, palette: &Palette) {
        let lift = self.pulse.max(0.0);
        let boundary = self.params.boundary_radius;
        let base_size = self.params.base_size;

        for particle in &mut self.particles {
            let mix = (0.2
                + 0.5 * state.thinking
                + 0.3 * state.speaking * (0.5 + 0.5 * self.pulse)
                + 0.1 * (particle.phase + t).sin())
            .clamp(0.0, 1.0);
            let hue = lerp(palette.base, palette.accent, mix);

            let proximity = 1.0 - (length(particle.position) / boundary).clamp(0.0, 1.0);
            let brightness = 0.6 + 0.4 * proximity + 0.25 * state.speaking * lift;
            let lit = scale(hue, brightness);
            particle.color = saturate(lit.map(|c| c.max(COLOR_FLOOR)));

            particle.size = base_size * (0.85 + 0.15 * (2.5 * t + particle.phase).sin());
        }

        let size_scale = 1.0 + 0.6 * state.activity + 0.3 * state.speaking * lift;
        self.appearance = SwarmAppearance {
            size_scale,
            point_size: base_size * size_scale,
            opacity: (0.55 + 0.35 * state.activity).min(0.95),
        };
    }

    /// Focus point at time `t`, wandering by `focus_drift` and kept inside
    /// the boundary.
    fn focus_at(&self, t: f32) -> Vec3 {
        let drift = self.params.focus_drift;
        if drift <= 0.0 {
            return self.params.focus;
        }
        let wander = [
            (t * 0.13).sin() * drift,
            (t * 0.21).sin() * drift * 0.5,
            (t * 0.17).sin() * drift,
        ];
        let focus = add(self.params.focus, wander);
        let limit = self.params.boundary_radius * 0.9;
        if length(focus) > limit {
            scale(normalize_or(focus, [0.0; 3]), limit)
        } else {
            focus
        }
    }

    /// Append every particle as a point sprite.
    pub fn write_points(&self, out: &mut Vec<PointSprite>) {
        let scale_by = self.appearance.size_scale;
        let alpha = self.appearance.opacity;
        out.extend(self.particles.iter().map(|p| PointSprite {
            position: p.position,
            size: p.size * scale_by,
            color: p.color,
            alpha,
        }));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn params(&self) -> &SwarmParams {
        &self.params
    }

    pub fn appearance(&self) -> SwarmAppearance {
        self.appearance
    }

    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Pulse wave value from the last step.
    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    /// Speed ceiling applied in the last step.
    pub fn speed_ceiling(&self) -> f32 {
        self.ceiling
    }

    /// Mean distance to `point`; zero for an empty swarm.
    pub fn mean_distance_to(&self, point: Vec3) -> f32 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .particles
            .iter()
            .map(|p| length(sub(p.position, point)))
            .sum();
        total / self.particles.len() as f32
    }

    pub fn mean_radius(&self) -> f32 {
        self.mean_distance_to([0.0; 3])
    }

    pub fn max_speed(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| length(p.velocity))
            .fold(0.0, f32::max)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameTime;

    fn params(count: usize) -> SwarmParams {
        SwarmParams {
            count,
            ..Default::default()
        }
    }

    fn step_n(swarm: &mut ParticleSwarm, state: ActivityState, frames: std::ops::Range<u64>) {
        let palette = Palette::default();
        for frame in frames {
            let ctx = FrameContext {
                time: FrameTime::fixed(frame, 1.0 / 60.0),
                state: &state,
                pointer: [0.0; 2],
                palette: &palette,
            };
            swarm.step(&ctx);
        }
    }

    #[test]
    fn spawn_inside_band() {
        let swarm = ParticleSwarm::new(params(500), 1);
        assert_eq!(swarm.len(), 500);
        for p in swarm.particles() {
            let r = length(p.position);
            assert!(r >= SPAWN_RADIUS.0 - 1e-4 && r <= SPAWN_RADIUS.1 + 1e-4);
            assert!((0.0..TAU).contains(&p.phase));
            assert_eq!(p.velocity, [0.0; 3]);
        }
    }

    #[test]
    fn small_boundary_clamps_spawn() {
        let swarm = ParticleSwarm::new(
            SwarmParams {
                count: 200,
                boundary_radius: 1.0,
                ring_radius: 0.5,
                ..Default::default()
            },
            4,
        );
        assert!(swarm.particles().iter().all(|p| length(p.position) <= 1.0 + 1e-4));
    }

    #[test]
    fn empty_swarm_is_harmless() {
        let mut swarm = ParticleSwarm::new(params(0), 1);
        step_n(&mut swarm, ActivityState::default(), 0..10);
        assert!(swarm.is_empty());
        assert_eq!(swarm.mean_radius(), 0.0);
        assert_eq!(swarm.max_speed(), 0.0);
        let mut out = Vec::new();
        swarm.write_points(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn invariants_hold_under_every_state() {
        let states = [
            ActivityState::default(),
            ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() },
            ActivityState { listening: 1.0, activity: 1.0, ..Default::default() },
            ActivityState { thinking: 1.0, activity: 1.0, ..Default::default() },
            ActivityState { speaking: 1.0, listening: 1.0, thinking: 1.0, activity: 1.0 },
        ];
        let mut swarm = ParticleSwarm::new(params(300), 11);
        let mut frame = 0;
        for state in states {
            for _ in 0..120 {
                step_n(&mut swarm, state, frame..frame + 1);
                frame += 1;
                let ceiling = swarm.speed_ceiling();
                for p in swarm.particles() {
                    assert!(length(p.velocity) <= ceiling * (1.0 + 1e-4));
                    assert!(length(p.position) <= swarm.params().boundary_radius + 1e-4);
                    assert!(p.color.iter().all(|c| (0.0..=1.0).contains(c)));
                    assert!(p.color.iter().all(|c| *c >= COLOR_FLOOR - 1e-6));
                }
            }
        }
    }

    #[test]
    fn brightness_follows_distance_from_center() {
        let mut swarm = ParticleSwarm::new(
            SwarmParams {
                count: 2,
                focus: [2.0, 0.0, 0.0],
                ..Default::default()
            },
            5,
        );
        swarm.particles[0].position = [0.0; 3];
        swarm.particles[1].position = [2.0, 0.0, 0.0];
        swarm.particles[1].phase = swarm.particles[0].phase;
        swarm.recolor(0.0, &ActivityState::default(), &Palette::default());

        let sum = |c: Vec3| c.iter().sum::<f32>();
        let center = swarm.particles()[0].color;
        let at_focus = swarm.particles()[1].color;
        assert!(sum(center) > sum(at_focus));
    }

    #[test]
    fn black_palette_keeps_color_floor() {
        let black = Palette {
            base: [0.0; 3],
            accent: [0.0; 3],
        };
        let speaking = ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() };
        let mut swarm = ParticleSwarm::new(params(100), 9);
        for frame in 0..90 {
            let ctx = FrameContext {
                time: FrameTime::fixed(frame, 1.0 / 60.0),
                state: &speaking,
                pointer: [0.0; 2],
                palette: &black,
            };
            swarm.step(&ctx);
            for p in swarm.particles() {
                assert!(p.color.iter().all(|c| *c >= COLOR_FLOOR - 1e-6));
            }
        }
    }

    #[test]
    fn boundary_is_inelastic() {
        let mut swarm = ParticleSwarm::new(params(1), 2);
        swarm.particles[0].position = [2.99, 0.0, 0.0];
        swarm.particles[0].velocity = [0.02, 0.0, 0.0];
        let speaking = ActivityState { speaking: 1.0, activity: 1.0, ..Default::default() };
        step_n(&mut swarm, speaking, 1..2);
        let p = swarm.particles()[0];
        assert!((length(p.position) - 3.0).abs() < 1e-4);
        assert!(length(p.velocity) < 0.02);
    }

    #[test]
    fn zero_delta_frame_does_not_move() {
        let mut swarm = ParticleSwarm::new(params(50), 3);
        let before: Vec<Vec3> = swarm.particles().iter().map(|p| p.position).collect();
        step_n(&mut swarm, ActivityState::default(), 0..1);
        let after: Vec<Vec3> = swarm.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn appearance_tracks_activity() {
        let mut swarm = ParticleSwarm::new(params(10), 3);
        step_n(&mut swarm, ActivityState::default(), 1..2);
        let idle = swarm.appearance();
        assert!((idle.opacity - 0.55).abs() < 1e-6);
        assert!((idle.point_size - 3.0).abs() < 1e-6);

        let busy = ActivityState { thinking: 1.0, activity: 1.0, ..Default::default() };
        step_n(&mut swarm, busy, 2..3);
        let a = swarm.appearance();
        assert!((a.opacity - 0.9).abs() < 1e-6);
        assert!((a.point_size - 3.0 * 1.6).abs() < 1e-5);
    }

    #[test]
    fn focus_drift_stays_inside_boundary() {
        let mut swarm = ParticleSwarm::new(
            SwarmParams {
                count: 1,
                focus: [2.0, 0.0, 0.0],
                focus_drift: 2.0,
                ..Default::default()
            },
            1,
        );
        for frame in 0..2000 {
            step_n(&mut swarm, ActivityState::default(), frame..frame + 1);
            assert!(length(swarm.focus()) <= 2.7 + 1e-4);
        }
    }

    #[test]
    fn write_points_applies_appearance() {
        let mut swarm = ParticleSwarm::new(params(20), 9);
        step_n(&mut swarm, ActivityState::default(), 1..2);
        let mut out = Vec::new();
        swarm.write_points(&mut out);
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|p| (p.alpha - swarm.appearance().opacity).abs() < 1e-6));
    }
}
