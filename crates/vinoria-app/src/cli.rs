use std::path::PathBuf;

use clap::Parser;
use vinoria_config::{SurfaceVariant, VinoriaConfig, WineCategory};

/// Upper bound accepted for `--particles`.
pub const MAX_PARTICLES: u32 = 20_000;

/// Vinoria: holographic AI-sommelier visualization.
#[derive(Parser, Debug, Default)]
#[command(name = "vinoria", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Surface variant (orb, hologram).
    #[arg(long)]
    pub variant: Option<SurfaceVariant>,

    /// Wine category selecting the palette. Unknown names use neutral.
    #[arg(long)]
    pub wine_type: Option<String>,

    /// Particle count (0 disables the swarm).
    #[arg(long)]
    pub particles: Option<u32>,

    /// Seed for particle placement and noise.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run N frames without a window on a synthetic 60 Hz clock.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(args: &Args, config: &mut VinoriaConfig) {
    if let Some(variant) = args.variant {
        config.visual.variant = variant;
    }
    if let Some(ref wine_type) = args.wine_type {
        config.visual.wine_type = WineCategory::parse_or_neutral(wine_type);
    }
    if let Some(count) = args.particles {
        if count > MAX_PARTICLES {
            tracing::warn!("--particles {count} exceeds {MAX_PARTICLES}, clamping");
        }
        config.particles.count = count.min(MAX_PARTICLES);
        config.particles.enabled = count > 0;
    }
    if let Some(seed) = args.seed {
        config.visual.seed = seed;
    }
}

/// Filter directive: CLI flag first, then the config file's level.
pub fn log_directive(args: &Args, config: &VinoriaConfig) -> String {
    match args.log_level.as_deref() {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("vinoria={level}"),
        None => config.logging.level.directive().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
