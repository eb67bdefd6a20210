//! Palette override configuration.

use serde::{Deserialize, Serialize};

/// Optional overrides for the category palette.
///
/// When unset, the palette is chosen from `visual.wine_type`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaletteConfig {
    pub base_color: Option<String>,
    pub accent_color: Option<String>,
}
