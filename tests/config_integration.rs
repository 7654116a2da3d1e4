//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use sandbox::config::AppConfig;
use sandbox::i18n::Language;
use sandbox_core::Color;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SBX_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("SBX_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_nested_values() {
    std::env::set_var("SBX_SANDBOX__MAX_OBJECTS", "5");
    std::env::set_var("SBX_SANDBOX__LANGUAGE", "en");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("SBX_SANDBOX__MAX_OBJECTS");
    std::env::remove_var("SBX_SANDBOX__LANGUAGE");

    assert_eq!(config.sandbox.max_objects, 5);
    assert_eq!(config.sandbox.language, Language::English);
}

#[test]
#[serial]
fn test_shipped_defaults_match_built_in_defaults() {
    std::env::remove_var("SBX_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let loaded = AppConfig::load_from(cwd.join("config")).unwrap();
    let built_in = AppConfig::default();

    assert_eq!(loaded.window.title, built_in.window.title);
    assert_eq!(loaded.camera.start_position, built_in.camera.start_position);
    assert_eq!(loaded.input.move_speed, built_in.input.move_speed);
    assert_eq!(loaded.physics.gravity, built_in.physics.gravity);
    assert_eq!(loaded.sandbox.max_objects, built_in.sandbox.max_objects);
    assert_eq!(loaded.sandbox.default_color, Color::DEFAULT_SPAWN);
    assert_eq!(loaded.black_hole.position, built_in.black_hole.position);
    assert_eq!(loaded.rendering.grid_color, built_in.rendering.grid_color);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join(format!("sandbox_no_config_{}", std::process::id()));
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.sandbox.scene_path, "scene.json");
    assert!(config.black_hole.enabled);
}
