//! Base/accent color pairs per wine category.

use tracing::warn;
use vinoria_common::Color;
use vinoria_config::schema::{PaletteConfig, WineCategory};

/// Wine red used by the speaking blend.
pub const WINE_ACCENT: Color = Color::from_u32(0x8b1538);
/// Gold used by the speaking blend and several category accents.
pub const GOLD_ACCENT: Color = Color::from_u32(0xd4af37);
/// Blue-violet target of the thinking blend.
pub const THINK_COLOR: [f32; 3] = [0.35, 0.45, 0.95];

/// Linear-ish RGB pair consumed by the shaders and the particle colorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: [f32; 3],
    pub accent: [f32; 3],
}

impl Palette {
    pub fn for_category(category: WineCategory) -> Self {
        let (base, accent) = match category {
            WineCategory::Red => (0x8b1538, 0xd4af37),
            WineCategory::White => (0xf2e6b0, 0xd4af37),
            WineCategory::Rose => (0xe8839b, 0xd4af37),
            WineCategory::Sparkling => (0xf7e7ce, 0xbfe9f0),
            WineCategory::Dessert => (0xc8791a, 0xd4af37),
            WineCategory::Neutral => (0x0891b2, 0x22d3ee),
        };
        Self {
            base: Color::from_u32(base).to_rgb_f32(),
            accent: Color::from_u32(accent).to_rgb_f32(),
        }
    }

    /// Category palette with any hex overrides from `[palette]` applied.
    pub fn from_config(category: WineCategory, overrides: &PaletteConfig) -> Self {
        let mut palette = Self::for_category(category);
        if let Some(base) = parse_override("base_color", overrides.base_color.as_deref()) {
            palette.base = base;
        }
        if let Some(accent) = parse_override("accent_color", overrides.accent_color.as_deref()) {
            palette.accent = accent;
        }
        palette
    }

    pub fn wine() -> [f32; 3] {
        WINE_ACCENT.to_rgb_f32()
    }

    pub fn gold() -> [f32; 3] {
        GOLD_ACCENT.to_rgb_f32()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_category(WineCategory::Neutral)
    }
}

fn parse_override(name: &str, value: Option<&str>) -> Option<[f32; 3]> {
    let hex = value?;
    match Color::from_hex(hex) {
        Some(color) => Some(color.to_rgb_f32()),
        None => {
            warn!("ignoring palette.{name} = '{hex}'");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
