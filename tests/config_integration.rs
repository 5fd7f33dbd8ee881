//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use flythrough::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("FLY_CORRIDOR__AMPLITUDE", "4.5");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("FLY_CORRIDOR__AMPLITUDE");

    assert_eq!(config.corridor.amplitude, 4.5);
    // Other fields keep their file values
    assert_eq!(config.corridor.length, 60);
}

#[test]
#[serial]
fn test_env_override_nested_animation() {
    std::env::set_var("FLY_ANIMATION__FPS", "250");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("FLY_ANIMATION__FPS");

    assert_eq!(config.animation.fps, 250);
    assert_eq!(config.animation.total_frames(), 250);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("FLY_CORRIDOR__AMPLITUDE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.materials.base_name, "DarkGray");
    assert_eq!(config.materials.accent_name, "Neon");
    assert_eq!(config.corridor.curve_start, 15.0);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.corridor.length, 60);
    assert_eq!(config.corridor.smoothing, 15.0);
    assert_eq!(config.animation.fps, 1000);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_invalid_env_value_is_an_error() {
    std::env::set_var("FLY_CORRIDOR__LENGTH", "not-a-number");
    let result = AppConfig::load();
    std::env::remove_var("FLY_CORRIDOR__LENGTH");

    assert!(result.is_err());
}
