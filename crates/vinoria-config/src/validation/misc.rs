//! Palette, window, and performance validation.

use crate::schema::VinoriaConfig;

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

/// Validate palette overrides.
pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &VinoriaConfig) {
    validate_hex_color(
        errors,
        "palette.base_color",
        config.palette.base_color.as_deref(),
    );
    validate_hex_color(
        errors,
        "palette.accent_color",
        config.palette.accent_color.as_deref(),
    );
}

/// Validate host window dimensions.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &VinoriaConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 8192);
    validate_range(errors, "window.height", config.window.height, 64, 8192);
}

/// Validate frame pacing settings.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &VinoriaConfig) {
    validate_range_f64(
        errors,
        "performance.max_frame_delta",
        config.performance.max_frame_delta,
        0.001,
        0.5,
    );
    validate_range_f64(
        errors,
        "performance.fps_log_interval",
        config.performance.fps_log_interval,
        0.0,
        3600.0,
    );
}
