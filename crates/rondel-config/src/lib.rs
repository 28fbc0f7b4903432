//! Startup configuration for the rondel clock.
//!
//! Reads an optional TOML file from the platform config directory to
//! seed the initial [`ClockConfig`]. A missing file means defaults;
//! nothing is ever written back, so edits made with the keys at runtime
//! last for the session only.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use rondel_core::{ActiveColor, ClockConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Active-color swatch as named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    White,
    Ember,
}

impl From<ColorName> for ActiveColor {
    fn from(name: ColorName) -> Self {
        match name {
            ColorName::White => ActiveColor::White,
            ColorName::Ember => ActiveColor::Ember,
        }
    }
}

/// The config file schema. Every field is optional and falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub min_size: f64,
    pub max_size: f64,
    /// Outer ring radius as a fraction of the canvas.
    pub orbit_frac: f64,
    pub ring_ratio_pct: u16,
    pub show_inner_ring: bool,
    pub active_color: ColorName,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            min_size: 18.0,
            max_size: 70.0,
            orbit_frac: 0.38,
            ring_ratio_pct: 58,
            show_inner_ring: true,
            active_color: ColorName::Ember,
        }
    }
}

impl FileConfig {
    /// Resolve the file into a [`ClockConfig`] for the given canvas size.
    pub fn clock_config(&self, canvas_size: f64) -> ClockConfig {
        ClockConfig {
            min_size: self.min_size,
            max_size: self.max_size,
            orbit: canvas_size * self.orbit_frac,
            ring_ratio_pct: self.ring_ratio_pct,
            show_inner_ring: self.show_inner_ring,
            active_color: self.active_color.into(),
        }
    }
}

/// Location of the config file, if a config directory exists at all.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rondel").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the config file, falling back to defaults when it is absent.
pub fn load() -> Result<FileConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}
