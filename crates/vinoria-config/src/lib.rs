//! Vinoria configuration system.
//!
//! TOML-based configuration for the visual core with full validation.
//! All sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vinoria_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    LogLevel, MeshDetail, SurfaceVariant, UnknownVariant, VinoriaConfig, WineCategory,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;
use vinoria_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path that does not exist is an error; the default path is
/// created from the template on first run.
pub fn load_config(path: Option<&Path>) -> Result<VinoriaConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &VinoriaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
