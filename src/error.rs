//! Simulation error types
//!
//! The simulation itself is total; errors only arise while setting a session
//! up (bad planet parameters, missing sprites, unreadable settings).

use std::fmt;

#[derive(Debug)]
pub enum SimError {
    /// A planet's gravity field must extend beyond its body.
    InvalidPlanet {
        radius: f32,
        field_radius: f32,
    },

    /// A sprite could not be resolved.
    Asset { key: String, reason: String },

    /// Settings file could not be read or parsed.
    Settings {
        /// Path that was being loaded.
        path: String,
        /// Human-readable cause.
        reason: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidPlanet {
                radius,
                field_radius,
            } => write!(
                f,
                "planet field radius {field_radius} must exceed planet radius {radius}"
            ),
            SimError::Asset { key, reason } => write!(f, "failed to load sprite {key}: {reason}"),
            SimError::Settings { path, reason } => {
                write!(f, "failed to load settings from {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for SimError {}
