//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rslimit/rslimit.toml`
//! 3. Local config: `<project_dir>/.rslimit.toml`
//! 4. Environment variables: `RSLIMIT_*` prefix
//!
//! Settings only shape how results are reported and when the run fails.
//! Limits and tenors are never read from configuration.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for rslimit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print the hierarchy before the validation results in `report`
    pub show_structure: bool,
    /// Exit with a data error when any breach is found
    pub fail_on_breach: bool,
    /// Exit with a data error when any transaction path does not resolve
    pub strict_paths: bool,
    /// Colored terminal output (NO_COLOR still wins)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_structure: true,
            fail_on_breach: false,
            strict_paths: false,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_structure: Option<bool>,
    pub fail_on_breach: Option<bool>,
    pub strict_paths: Option<bool>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for rslimit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rslimit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rslimit.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".rslimit.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_structure: overlay.show_structure.unwrap_or(self.show_structure),
            fail_on_breach: overlay.fail_on_breach.unwrap_or(self.fail_on_breach),
            strict_paths: overlay.strict_paths.unwrap_or(self.strict_paths),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.rslimit.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        let local = project_dir
            .map(local_config_path)
            .filter(|p| p.exists());
        Self::load_from(global.as_deref(), local.as_deref())
    }

    /// Load settings from explicit config files, then apply env overrides.
    ///
    /// Missing layers are skipped; a layer that exists but does not parse is an error.
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        for path in [global, local].into_iter().flatten() {
            debug!("config layer: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RSLIMIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RSLIMIT").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("show_structure") {
            settings.show_structure = val;
        }
        if let Ok(val) = config.get_bool("fail_on_breach") {
            settings.fail_on_breach = val;
        }
        if let Ok(val) = config.get_bool("strict_paths") {
            settings.strict_paths = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Render settings as TOML (for `rslimit config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_only_overrides_specified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            fail_on_breach: Some(true),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert!(merged.fail_on_breach);
        assert!(merged.show_structure);
        assert!(!merged.strict_paths);
        assert!(merged.color);
    }

    #[test]
    fn test_to_toml_lists_every_field() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("show_structure = true"));
        assert!(rendered.contains("fail_on_breach = false"));
        assert!(rendered.contains("strict_paths = false"));
        assert!(rendered.contains("color = true"));
    }
}
