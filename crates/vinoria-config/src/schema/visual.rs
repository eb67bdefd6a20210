//! Surface and palette-selection configuration types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a CLI or config string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Which holographic body the surface animator renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceVariant {
    #[default]
    Orb,
    Hologram,
}

impl FromStr for SurfaceVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orb" => Ok(Self::Orb),
            "hologram" | "humanoid" => Ok(Self::Hologram),
            other => Err(UnknownVariant {
                kind: "surface variant",
                value: other.to_string(),
                expected: "orb, hologram",
            }),
        }
    }
}

/// Wine category; selects the palette pair used by both renderers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WineCategory {
    Red,
    White,
    Rose,
    Sparkling,
    Dessert,
    #[default]
    Neutral,
}

impl WineCategory {
    pub const ALL: [WineCategory; 6] = [
        WineCategory::Red,
        WineCategory::White,
        WineCategory::Rose,
        WineCategory::Sparkling,
        WineCategory::Dessert,
        WineCategory::Neutral,
    ];

    /// Parse a category, falling back to [`WineCategory::Neutral`] for
    /// anything unrecognized.
    pub fn parse_or_neutral(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: UnknownVariant| {
            tracing::warn!("{e}, using neutral palette");
            WineCategory::Neutral
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            WineCategory::Red => "red",
            WineCategory::White => "white",
            WineCategory::Rose => "rose",
            WineCategory::Sparkling => "sparkling",
            WineCategory::Dessert => "dessert",
            WineCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for WineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WineCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "red" => Ok(Self::Red),
            "white" => Ok(Self::White),
            "rose" | "rosé" => Ok(Self::Rose),
            "sparkling" | "champagne" => Ok(Self::Sparkling),
            "dessert" | "fortified" => Ok(Self::Dessert),
            "neutral" | "" => Ok(Self::Neutral),
            _ => Err(UnknownVariant {
                kind: "wine type",
                value: lowered,
                expected: "red, white, rose, sparkling, dessert, neutral",
            }),
        }
    }
}

/// Surface mesh tessellation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeshDetail {
    Low,
    #[default]
    Medium,
    High,
}

/// Visual core settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub variant: SurfaceVariant,
    /// Unknown names select the neutral palette instead of failing the load.
    #[serde(deserialize_with = "lenient_wine_type")]
    pub wine_type: WineCategory,
    pub mesh_detail: MeshDetail,
    /// Seed for initial particle placement and noise tables.
    pub seed: u64,
    /// Spawn an expanding ring on click (orb only).
    pub click_ripples: bool,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            variant: SurfaceVariant::Orb,
            wine_type: WineCategory::Neutral,
            mesh_detail: MeshDetail::Medium,
            seed: 0x5eed_1e55,
            click_ripples: true,
        }
    }
}

fn lenient_wine_type<'de, D>(deserializer: D) -> Result<WineCategory, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(WineCategory::parse_or_neutral(&raw))
}
