//! Particle flow-field simulator.

pub mod forces;
mod swarm;
mod types;

pub use swarm::{ParticleSwarm, COLOR_FLOOR, SPAWN_RADIUS};
pub use types::{Particle, SwarmAppearance, SwarmParams};
