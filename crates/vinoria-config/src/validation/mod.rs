//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod particles;

#[cfg(test)]
mod tests;

use crate::schema::VinoriaConfig;
use vinoria_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VinoriaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    particles::validate_particles(&mut errors, config);
    misc::validate_palette(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
