//! Core TOML config loading: read from path or platform default.

use crate::schema::VinoriaConfig;
use crate::validation;
use vinoria_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A file that parses but fails
/// validation is discarded with a warning and the defaults are returned.
pub fn load_from_path(path: &Path) -> Result<VinoriaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: VinoriaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}; falling back to defaults", path.display());
        return Ok(VinoriaConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/vinoria/vinoria.toml`
/// On Linux: `~/.config/vinoria/vinoria.toml`
///
/// Writes the commented template on first run and returns defaults.
pub fn load_default() -> Result<VinoriaConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(VinoriaConfig::default())
        }
        Err(e) => Err(e),
    }
}
