use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use macroquad::logging::warn;
use serde::{Deserialize, Serialize};

/// File read from the working directory on native builds
pub const SETTINGS_FILE: &str = "snake_settings.json";

/// Tunables for the game and its presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of one grid cell in pixels
    pub cell_size: f32,
    /// Time between two ticks
    pub tick_interval_ms: u64,
    /// Start input is ignored for this long after the snake dies
    pub restart_cooldown_ms: u64,
    /// 0.0 mutes the cues
    pub sound_volume: f32,
    /// Below this window width the on-screen arrow pad is shown
    pub compact_width: f32,
    /// Height of the score strip above the canvas
    pub header_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            tick_interval_ms: 200,
            restart_cooldown_ms: 600,
            sound_volume: 1.0,
            compact_width: 660.0,
            header_height: 40.0,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }

    pub fn restart_cooldown(&self) -> f64 {
        self.restart_cooldown_ms as f64 / 1000.0
    }

    /// Parse settings from JSON text; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(text).context("Failed to parse settings JSON")?;
        Ok(settings.sanitized())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Settings for this platform. Native builds read `SETTINGS_FILE` if it
    /// exists; the browser build always uses the defaults.
    pub fn load_or_default() -> Self {
        if cfg!(target_arch = "wasm32") {
            return Self::default();
        }

        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("{:#}, using default settings", err);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_size.is_finite() && self.cell_size >= 1.0) {
            self.cell_size = defaults.cell_size;
        }
        if self.tick_interval_ms == 0 {
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        self.sound_volume = if self.sound_volume.is_finite() {
            self.sound_volume.clamp(0.0, 1.0)
        } else {
            defaults.sound_volume
        };
        self.header_height = self.header_height.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.cell_size, 30.0);
        assert_eq!(settings.tick_interval_ms, 200);
        assert!((settings.tick_interval() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "tick_interval_ms": 120 }"#).unwrap();
        assert_eq!(settings.tick_interval_ms, 120);
        assert_eq!(settings.cell_size, 30.0);
        assert_eq!(settings.compact_width, 660.0);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let settings =
            Settings::from_json(r#"{ "cell_size": 0.0, "tick_interval_ms": 0, "sound_volume": 4.0 }"#)
                .unwrap();
        assert_eq!(settings.cell_size, 30.0);
        assert_eq!(settings.tick_interval_ms, 200);
        assert_eq!(settings.sound_volume, 1.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Settings::from_json("{ cell_size: ").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse settings JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Path::new("definitely/not/here.json")).is_err());
    }
}
