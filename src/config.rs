// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Read once at startup from `config.json` in the user's config directory.
//! A missing file means defaults; a malformed one is an error.

use crate::constants::APP_ID;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin the shell reports when the environment does not provide one
    pub origin: Option<String>,
    /// Photo library the host picker browses
    pub photo_library_dir: PathBuf,
    /// Directory the host camera drops fresh captures into
    pub capture_dir: PathBuf,
    /// Saved photo album
    pub album_dir: PathBuf,
    /// Intermediate capture files, removed by cleanup
    pub temp_dir: PathBuf,
    /// Key-value store backing file
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let pictures = dirs::picture_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
            .unwrap_or_else(|| PathBuf::from("."));
        let data = dirs::data_dir().unwrap_or_else(std::env::temp_dir);

        Self {
            origin: None,
            capture_dir: pictures.join("camera"),
            album_dir: pictures.join(APP_ID),
            photo_library_dir: pictures,
            temp_dir: std::env::temp_dir().join(APP_ID),
            storage_path: data.join(APP_ID).join("storage.json"),
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.json"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> AppResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let config = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("invalid {}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
