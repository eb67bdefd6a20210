//! Configuration schema types for the Vinoria visual core.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the site ships with.

mod palette;
mod particles;
mod system;
mod visual;
mod window;

pub use palette::*;
pub use particles::*;
pub use system::*;
pub use visual::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VinoriaConfig {
    pub visual: VisualConfig,
    pub particles: ParticlesConfig,
    pub palette: PaletteConfig,
    pub window: WindowConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
