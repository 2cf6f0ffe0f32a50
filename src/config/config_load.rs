// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use super::config_types::{AnimationConfig, StyleConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no config.toml found beside the executable or in the working directory")]
    NotFound,
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("invalid color {0:?}, expected #RRGGBB")]
    Color(String),
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try the executable's directory, then the current working directory
        let mut candidates: Vec<PathBuf> = Self::exe_dir_config_path().into_iter().collect();
        candidates.push(PathBuf::from(CONFIG_FILE));
        Self::load_first(&candidates)
    }

    // A file that fails to load falls through to the next candidate; the
    // error of the last existing file is returned when none load.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut last_error = None;
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_path(path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping config file");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(ConfigError::NotFound))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        if anim.nodes == 0 {
            return Err(invalid("animation.nodes", "must be at least 1"));
        }
        if anim.rects == 0 {
            return Err(invalid("animation.rects", "must be at least 1"));
        }
        if !(anim.step_gap > 0.0 && anim.step_gap <= 1.0) {
            return Err(invalid("animation.step_gap", "must be in (0, 1]"));
        }
        if anim.scale_divisor <= 0.0 || !anim.scale_divisor.is_finite() {
            return Err(invalid("animation.scale_divisor", "must be positive"));
        }
        if anim.tick_ms == 0 {
            return Err(invalid("animation.tick_ms", "must be positive"));
        }

        let style = &self.style;
        if style.size_factor <= 0.0 || !style.size_factor.is_finite() {
            return Err(invalid("style.size_factor", "must be positive"));
        }
        if style.stroke_factor <= 0.0 || !style.stroke_factor.is_finite() {
            return Err(invalid("style.stroke_factor", "must be positive"));
        }
        style.fore_rgb()?;
        style.back_rgb()?;

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
