//! Cockpit configuration. Loaded from cockpit.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::camera_follow::{CameraView, FollowSettings};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Persistent single-pilot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CockpitConfig {
    /// Fly from the cockpit instead of the chase camera.
    pub first_person: bool,
    /// Allow the top-down debug view while its key is held.
    pub debug_overhead: bool,
    pub follow: FollowSettings,
    /// Heading change per helm turn hotkey, degrees.
    pub turn_step: f32,
    /// Bearing change per missile aim hotkey, degrees.
    pub aim_step: f32,
    /// Reach of a radar click when picking a target.
    pub radar_pick_radius: f32,
}

impl Default for CockpitConfig {
    fn default() -> Self {
        Self {
            first_person: false,
            debug_overhead: cfg!(debug_assertions),
            follow: FollowSettings::default(),
            turn_step: 5.0,
            aim_step: 5.0,
            radar_pick_radius: 250.0,
        }
    }
}

impl CockpitConfig {
    /// Load config from `cockpit.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Save current config to `cockpit.ron`.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let data = self.to_ron()?;
        std::fs::write(path, data).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn camera_view(&self) -> CameraView {
        CameraView::from_preference(self.first_person)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("cockpit.ron")
}
