//! Runtime configuration
//!
//! Tunables loaded from RON: a user override under the platform config
//! directory first, then the bundled file, then compiled defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// All tunables for a night
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hour of day the night starts at
    pub start_hour: f32,
    /// Real seconds for one game hour to pass
    pub real_seconds_per_game_hour: f32,
    /// Scales how much game time each tick advances
    pub time_multiplier: f32,
    /// Real seconds between vignette polls
    pub vignette_poll_secs: f32,
    /// Probability a poll produces a vignette
    pub vignette_chance: f64,
    /// Joystick clamp radius in pixels
    pub joystick_max_radius: f32,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f64,
    /// Cue volume multiplier (0.0 - 1.0)
    pub sfx_volume: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_hour: 7.0,
            real_seconds_per_game_hour: 60.0,
            time_multiplier: 1.0,
            vignette_poll_secs: 10.0,
            vignette_chance: 0.1,
            joystick_max_radius: 50.0,
            master_volume: 1.0,
            sfx_volume: 0.7,
        }
    }
}

/// Why a config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl Config {
    /// Load the first config file found, falling back to defaults.
    /// A file that exists but fails to parse is logged and skipped.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("{}. Skipping.", e),
            }
        }
        log::info!("No config file found, using defaults");
        Self::default()
    }

    /// Parse a config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::de::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// User override first, bundled file second
    fn search_paths() -> Vec<PathBuf> {
        use directories::ProjectDirs;

        let mut paths = Vec::new();
        if let Some(proj_dirs) = ProjectDirs::from("com", "duskfall", "Duskfall") {
            paths.push(proj_dirs.config_dir().join("config.ron"));
        }
        paths.push(PathBuf::from("assets/config.ron"));
        paths
    }
}
