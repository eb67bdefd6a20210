//! Host window configuration.

use serde::{Deserialize, Serialize};

/// Initial host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in device-independent pixels.
    pub width: u32,
    /// Logical height in device-independent pixels.
    pub height: u32,
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vinoria AI Sommelier".into(),
            width: 720,
            height: 720,
            transparent: true,
        }
    }
}
