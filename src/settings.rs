//! Game settings
//!
//! Loaded from an optional JSON file, then overridden from the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::game::GameConfig;
use crate::highscore::DEFAULT_SCORE_FILE;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "brickbreaker.json";

/// Which renderer draws the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// GPU-accelerated SDL2 canvas, rectangles drawn directly
    #[default]
    Accelerated,
    /// CPU pixel buffer streamed to the window each frame
    Software,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Accelerated => "accelerated",
            Backend::Software => "software",
        }
    }

}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accelerated" | "gpu" => Ok(Backend::Accelerated),
            "software" | "sw" => Ok(Backend::Software),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: u32,
    pub height: u32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per frame while a direction key is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Pixels per frame on each axis at serve time
    pub ball_speed: f32,

    // === Timing / display ===
    /// Sleep between frames
    pub frame_delay_ms: u64,
    pub backend: Backend,
    pub vsync: bool,
    pub show_fps: bool,

    // === Persistence ===
    pub score_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            width: game.width as u32,
            height: game.height as u32,

            paddle_width: game.paddle_width,
            paddle_height: game.paddle_height,
            paddle_speed: game.paddle_speed,

            ball_size: game.ball_size,
            ball_speed: game.ball_speed,

            // ~60 frames per second
            frame_delay_ms: 16,
            backend: Backend::Accelerated,
            vsync: false,
            show_fps: false,

            score_file: DEFAULT_SCORE_FILE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// malformed
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            },
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            },
        }
    }

    /// Gameplay geometry derived from these settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width as f32,
            height: self.height as f32,
            paddle_width: self.paddle_width.min(self.width as f32),
            paddle_height: self.paddle_height,
            paddle_speed: self.paddle_speed,
            ball_size: self.ball_size,
            ball_speed: self.ball_speed,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_game_config() {
        let settings = Settings::default();
        assert_eq!(settings.game_config(), GameConfig::default());
        assert_eq!(settings.frame_delay(), Duration::from_millis(16));
        assert_eq!(settings.score_file, "scores.txt");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "width": 800, "height": 600, "backend": "software" }"#)
                .unwrap();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.backend, Backend::Software);
        assert_eq!(settings.paddle_speed, 20.0);
    }

    #[test]
    fn test_round_trip_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            ball_speed: 4.0,
            show_fps: true,
            ..Settings::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ width: ").unwrap();

        assert!(Settings::load(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_paddle_never_wider_than_field() {
        let settings = Settings {
            width: 300,
            ..Settings::default()
        };
        assert_eq!(settings.game_config().paddle_width, 300.0);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!("Software".parse::<Backend>(), Ok(Backend::Software));
        assert_eq!("gpu".parse::<Backend>(), Ok(Backend::Accelerated));
        assert!("vulkan".parse::<Backend>().is_err());
        assert_eq!(Backend::Software.as_str(), "software");
    }
}
