//! Session settings
//!
//! Loaded from a JSON file at startup. Missing keys fall back to defaults, so
//! a file may override just the values it cares about.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, STAR_COUNT, TARGET_FPS};
use crate::error::SimError;

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for every random choice in the session
    pub seed: u64,
    /// Logical frame rate the clock throttles to
    pub target_fps: u32,

    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Number of decorative stars
    pub star_count: usize,
    /// Spawn the free-flying meteor alongside the planets
    pub spawn_meteor: bool,

    // === Headless runs ===
    /// Stop after this many frames (None = run until quit)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5017_d21f,
            target_fps: TARGET_FPS,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            star_count: STAR_COUNT,
            spawn_meteor: false,

            max_frames: None,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "SOL_DRIFT_SETTINGS";

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let to_err = |reason: String| SimError::Settings {
            path: path.display().to_string(),
            reason,
        };

        let json = std::fs::read_to_string(path).map_err(|e| to_err(e.to_string()))?;
        let settings = Self::from_json(&json).map_err(|e| to_err(e.to_string()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults (with a warning) on failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        // Plain data with no maps keyed by non-strings, serialization is infallible
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
