//! Particle flow-field configuration types.

use serde::{Deserialize, Serialize};

/// Particle swarm settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub enabled: bool,
    /// Population size; governs simulation cost (valid range: 0-20000).
    pub count: u32,
    /// Base point size in pixels at unit depth.
    pub point_size: f64,
    /// Radius of the soft containment sphere.
    pub boundary_radius: f64,
    /// Horizontal ring radius particles settle onto while listening.
    pub ring_radius: f64,
    /// Attraction target for the gather force.
    pub focus: [f64; 3],
    /// Amplitude of the focus point's slow drift (0 = fixed).
    pub focus_drift: f64,
    /// Speaking pulse oscillator frequency in Hz.
    pub pulse_hz: f64,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 2000,
            point_size: 3.0,
            boundary_radius: 3.0,
            ring_radius: 0.9,
            focus: [0.0, 0.0, 0.0],
            focus_drift: 0.0,
            pulse_hz: 0.8,
        }
    }
}
