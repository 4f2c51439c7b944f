//! Game settings and preferences
//!
//! World dimensions, the session seed, contact probing and audio levels.
//! Loaded from a JSON file on native builds; missing fields take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::GROUND_MARGIN;

/// Smallest world that still fits the widest pad with room either side
pub const MIN_WORLD_WIDTH: f32 = 200.0;
/// Smallest world where the spawn point clears the highest terrain
pub const MIN_WORLD_HEIGHT: f32 = 400.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Playfield width in pixels
    pub world_width: f32,
    /// Playfield height in pixels (ground baseline sits 50px above the bottom)
    pub world_height: f32,

    // === Session ===
    /// Fixed RNG seed; `None` picks one at launch
    pub seed: Option<u64>,
    /// Difficulty of the first episode
    pub starting_difficulty: u32,
    /// Test terrain under both bottom corners, not just the centre
    pub footprint_contact: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            world_height: 720.0,

            seed: None,
            starting_difficulty: 0,
            footprint_contact: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Ground baseline (terrain stays between 20 and 180px above it)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.world_height - GROUND_MARGIN
    }

    /// Effective cue volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Reject worlds the terrain generator and spawn logic cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.world_width.is_finite() || self.world_width < MIN_WORLD_WIDTH {
            return Err(SettingsError::Invalid(format!(
                "world_width must be at least {MIN_WORLD_WIDTH}, got {}",
                self.world_width
            )));
        }
        if !self.world_height.is_finite() || self.world_height < MIN_WORLD_HEIGHT {
            return Err(SettingsError::Invalid(format!(
                "world_height must be at least {MIN_WORLD_HEIGHT}, got {}",
                self.world_height
            )));
        }
        if !self.master_volume.is_finite() || !self.sfx_volume.is_finite() {
            return Err(SettingsError::Invalid("volumes must be finite".to_string()));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ground_y(), 670.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "world_width": 900, "seed": 42 }"#).unwrap();
        assert_eq!(settings.world_width, 900.0);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.world_height, 720.0);
        assert!(settings.footprint_contact);
    }

    #[test]
    fn test_rejects_tiny_world() {
        let err = Settings::from_json(r#"{ "world_width": 50 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "world_height": 300 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ world_width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/moon-lander-settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("moon-lander-settings-{}.json", std::process::id()));
        let settings = Settings {
            world_width: 1024.0,
            seed: Some(7),
            muted: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
