//! Game settings and preferences
//!
//! Persisted as JSON next to the executable; game state itself is never
//! saved, only preferences.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "meteor-storm-settings.json";

    /// Load settings from a JSON file, falling back to defaults on any
    /// missing or unreadable file
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} is malformed ({err}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failure is logged, never fatal
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save settings to {}: {err}", path.display());
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}
