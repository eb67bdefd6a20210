//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = VinoriaConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn zero_particles_is_allowed() {
    let mut config = VinoriaConfig::default();
    config.particles.count = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_particle_count_too_large() {
    let mut config = VinoriaConfig::default();
    config.particles.count = 50_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.count"));
}

#[test]
fn catches_ring_outside_boundary() {
    let mut config = VinoriaConfig::default();
    config.particles.ring_radius = 4.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.ring_radius"));
}

#[test]
fn catches_focus_outside_boundary() {
    let mut config = VinoriaConfig::default();
    config.particles.focus = [0.0, 5.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.focus"));
}

#[test]
fn catches_nan_pulse_frequency() {
    let mut config = VinoriaConfig::default();
    config.particles.pulse_hz = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.pulse_hz"));
}

#[test]
fn catches_bad_palette_hex() {
    let mut config = VinoriaConfig::default();
    config.palette.accent_color = Some("crimson".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.accent_color"));
}

#[test]
fn accepts_good_palette_hex() {
    let mut config = VinoriaConfig::default();
    config.palette.base_color = Some("#722f37".into());
    config.palette.accent_color = Some("#c4a35a".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_tiny_window() {
    let mut config = VinoriaConfig::default();
    config.window.height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn catches_oversized_frame_delta() {
    let mut config = VinoriaConfig::default();
    config.performance.max_frame_delta = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.max_frame_delta"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = VinoriaConfig::default();
    config.particles.count = 99_999;
    config.window.width = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("particles.count"));
    assert!(err.contains("window.width"));
    assert!(err.contains("; "));
}
