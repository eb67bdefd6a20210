//! CPU core of the Vinoria visualization.
//!
//! Smooths conversational activity flags, animates the holographic surface
//! (orb or humanoid rig) and integrates the particle swarm. Everything
//! here is plain numeric code with no GPU dependency; `vinoria-renderer`
//! uploads the results.
//!
//! Dependency order within a tick: [`activity`] → [`surface`] and
//! [`particles`], driven by [`Visualization::tick`].

pub mod activity;
pub mod clock;
pub mod frame;
pub mod input;
pub mod noise_field;
pub mod palette;
pub mod particles;
pub mod points;
pub mod surface;
pub mod vector;
mod visualization;

pub use activity::{ActivityInputs, ActivityState, SMOOTHING_RATE};
pub use clock::{Clock, FrameClock, FrameTime, MonotonicClock, SyntheticClock};
pub use frame::FrameContext;
pub use input::Pointer;
pub use palette::Palette;
pub use particles::{ParticleSwarm, SwarmParams};
pub use points::PointSprite;
pub use surface::{Camera, SurfaceAnimator};
pub use visualization::Visualization;
