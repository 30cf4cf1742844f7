//! Game settings and preferences
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GameConfig, Layout};

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the paddle kick
    pub seed: u64,
    /// Brick arrangement
    pub layout: Layout,

    // === Gameplay ===
    /// Spare lives at start
    pub starting_lives: u8,
    /// Paddle pixels per tick while a key is held
    pub paddle_speed: i32,
    /// Points awarded per destroyed brick
    pub points_per_brick: u32,

    // === Timing ===
    /// Fixed tick period in milliseconds
    pub tick_millis: u64,

    // === Storage ===
    /// Where the best score lives
    pub high_score_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            layout: Layout::default(),

            starting_lives: STARTING_LIVES,
            paddle_speed: PADDLE_SPEED,
            points_per_brick: POINTS_PER_BRICK,

            tick_millis: TICK_MILLIS,

            high_score_path: PathBuf::from("scores.json"),
        }
    }
}

impl Settings {
    /// Simulation tuning derived from these settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            starting_lives: self.starting_lives,
            paddle_speed: self.paddle_speed.max(1),
            points_per_brick: self.points_per_brick,
            layout: self.layout,
            ..GameConfig::default()
        }
    }

    /// Load settings, using defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("parse settings {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write settings {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "seed": 77, "layout": "columns" }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.seed, 77);
        assert_eq!(settings.layout, Layout::Columns);
        assert_eq!(settings.starting_lives, STARTING_LIVES);
        assert_eq!(settings.tick_millis, TICK_MILLIS);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ seed: ").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            seed: 9,
            paddle_speed: 8,
            layout: Layout::Full,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_game_config() {
        let settings = Settings {
            starting_lives: 4,
            paddle_speed: 0,
            ..Default::default()
        };
        let config = settings.game_config();
        assert_eq!(config.starting_lives, 4);
        // A stalled paddle is never useful
        assert_eq!(config.paddle_speed, 1);
        assert_eq!(config.paddle_max_x, PADDLE_MAX_X);
    }
}
