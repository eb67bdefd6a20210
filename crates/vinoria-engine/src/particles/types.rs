//! Particle data and swarm parameters.

use vinoria_config::schema::ParticlesConfig;

use crate::vector::Vec3;

/// One point of the swarm. The population is allocated once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Displacement per 60 Hz tick.
    pub velocity: Vec3,
    /// Fixed random phase in `[0, 2π)`.
    pub phase: f32,
    pub color: Vec3,
    pub size: f32,
}

/// Swarm configuration, converted from `[particles]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmParams {
    pub count: usize,
    pub base_size: f32,
    pub boundary_radius: f32,
    pub ring_radius: f32,
    pub focus: Vec3,
    pub focus_drift: f32,
    pub pulse_hz: f32,
}

impl SwarmParams {
    pub fn from_config(config: &ParticlesConfig) -> Self {
        Self {
            count: if config.enabled { config.count as usize } else { 0 },
            base_size: config.point_size as f32,
            boundary_radius: (config.boundary_radius as f32).max(0.1),
            ring_radius: config.ring_radius as f32,
            focus: config.focus.map(|c| c as f32),
            focus_drift: config.focus_drift as f32,
            pulse_hz: config.pulse_hz as f32,
        }
    }
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self::from_config(&ParticlesConfig::default())
    }
}

/// Global point size and opacity for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmAppearance {
    /// Multiplier on every particle's own size.
    pub size_scale: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for SwarmAppearance {
    fn default() -> Self {
        Self {
            size_scale: 1.0,
            point_size: 0.0,
            opacity: 0.55,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_from_default_config() {
        let params = SwarmParams::default();
        assert_eq!(params.count, 2000);
        assert!((params.boundary_radius - 3.0).abs() < 1e-6);
        assert!((params.pulse_hz - 0.8).abs() < 1e-6);
        assert_eq!(params.focus, [0.0; 3]);
    }

    #[test]
    fn disabled_config_means_empty_swarm() {
        let config = ParticlesConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(SwarmParams::from_config(&config).count, 0);
    }
}
