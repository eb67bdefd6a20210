//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{SurfaceVariant, WineCategory};
use std::path::Path;
use vinoria_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_vinoria_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vinoria.toml");
    std::fs::write(
        &path,
        r##"
[visual]
variant = "hologram"
wine_type = "sparkling"

[particles]
count = 750

[palette]
accent_color = "#c0c0c0"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.visual.variant, SurfaceVariant::Hologram);
    assert_eq!(config.visual.wine_type, WineCategory::Sparkling);
    assert_eq!(config.particles.count, 750);
    assert_eq!(config.palette.accent_color.as_deref(), Some("#c0c0c0"));
    // Defaults preserved
    assert!((config.particles.pulse_hz - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.window.title, "Vinoria AI Sommelier");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vinoria.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_wine_type_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vinoria.toml");
    std::fs::write(&path, "[visual]\nwine_type = \"merlot\"\n").unwrap();

    assert!(matches!(load_from_path(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vinoria.toml");
    std::fs::write(
        &path,
        r#"
[visual]
wine_type = "red"

[particles]
count = 100000
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.particles.count, 2000);
    assert_eq!(config.visual.wine_type, WineCategory::Neutral);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vinoria").join("vinoria.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.visual.variant, SurfaceVariant::Orb);
    assert_eq!(config.particles.count, 2000);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::VinoriaConfig;

    let config: VinoriaConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.visual.wine_type, WineCategory::Neutral);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("vinoria"));
        assert!(path_str.ends_with("vinoria.toml"));
    }
}
