//! Integration tests for Settings config loading with layered precedence.
//!
//! Layers: defaults → global file → local file → env vars.
//!
//! Note: These tests pass explicit file paths to `Settings::load_from`, so the
//! real XDG config of the machine running them never participates.

use std::fs;

use tempfile::TempDir;

use rslimit::application::ApplicationError;
use rslimit::config::{local_config_path, Settings};

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_no_config_files_when_load_then_uses_defaults() {
    // Act
    let settings = Settings::load_from(None, None).expect("load settings");

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = write(&dir, "rslimit.toml", "fail_on_breach = true\n");

    // Act
    let settings = Settings::load_from(Some(&global), None).expect("load settings");

    // Assert
    assert!(settings.fail_on_breach);
    assert!(settings.show_structure, "unspecified field keeps default");
    assert!(!settings.strict_paths);
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = write(
        &dir,
        "rslimit.toml",
        "fail_on_breach = true\nshow_structure = false\n",
    );
    let local = write(&dir, ".rslimit.toml", "fail_on_breach = false\n");

    // Act
    let settings = Settings::load_from(Some(&global), Some(&local)).expect("load settings");

    // Assert
    assert!(!settings.fail_on_breach, "local overrides global");
    assert!(!settings.show_structure, "global value survives when local is silent");
}

#[test]
fn given_project_dir_with_local_config_when_load_then_reads_dot_file() {
    // Arrange
    let project = TempDir::new().unwrap();
    fs::write(local_config_path(project.path()), "strict_paths = true\n").unwrap();

    // Act
    let settings = Settings::load(Some(project.path())).expect("load settings");

    // Assert
    assert!(settings.strict_paths);
}

#[test]
fn given_malformed_config_when_load_then_returns_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local = write(&dir, ".rslimit.toml", "fail_on_breach = \"maybe\"\n");

    // Act
    let result = Settings::load_from(None, Some(&local));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains(".rslimit.toml"), "message names the file: {message}");
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_loaded_settings_when_rendered_then_round_trips_through_toml() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local = write(&dir, ".rslimit.toml", "color = false\nstrict_paths = true\n");
    let settings = Settings::load_from(None, Some(&local)).expect("load settings");

    // Act
    let rendered = settings.to_toml().unwrap();
    let reparsed: Settings = toml::from_str(&rendered).unwrap();

    // Assert
    assert_eq!(reparsed, settings);
}
