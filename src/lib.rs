//! Sol Drift - a tiny solar system arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, gravity fields, game state)
//! - `renderer`: Draw-order contract for an external rendering surface
//! - `platform`: Input, clock and sprite collaborators
//! - `game`: Outer frame loop tying the collaborators to the simulation
//! - `settings`: Data-driven session configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Target logical frame rate (the clock blocks to hold this)
    pub const TARGET_FPS: u32 = 50;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Background clear colour
    pub const BACKGROUND_COLOR: [u8; 3] = [15, 15, 20];

    /// Player defaults
    pub const PLAYER_RESPAWN: Vec2 = Vec2::new(20.0, 300.0);
    pub const PLAYER_START_YAW: i32 = 270;
    pub const PLAYER_START_BOOST: u32 = 30;
    /// Passive regeneration stops here
    pub const BOOST_REGEN_CAP: u32 = 10;
    /// Fraction of the facing vector added per boost
    pub const BOOST_IMPULSE: f32 = 0.1;
    /// Frames the post-boost damper stays active
    pub const DAMPER_FRAMES: u32 = 30;
    /// Degrees turned per frame while a turn key is held
    pub const YAW_STEP: i32 = 2;
    /// Extra distance added to a planet's radius for the hard collision test
    pub const COLLISION_PADDING: f32 = 25.0;
    /// Score awarded per frame spent inside a planet's field
    pub const FIELD_SCORE: u64 = 10;

    /// Sun radius (the sun sits at the screen centre)
    pub const SUN_RADIUS: f32 = 50.0;

    /// Planet defaults
    pub const PLANET_ORBITS: [f32; 5] = [80.0, 150.0, 220.0, 290.0, 370.0];
    pub const PLANET_RADIUS: f32 = 10.0;
    pub const PLANET_FIELD_RADIUS: f32 = 90.0;
    pub const PLANET_FIELD_QUADRATIC: f32 = 0.01;
    pub const PLANET_FIELD_LINEAR: f32 = 0.0005;
    /// Pre-rotated sprite frames per planet
    pub const PLANET_SPRITE_FRAMES: u32 = 360;

    /// Meteor defaults (not spawned unless enabled in settings)
    pub const METEOR_START: Vec2 = Vec2::new(0.0, 300.0);
    pub const METEOR_VELOCITY: Vec2 = Vec2::new(1.8, -0.4);

    /// Starfield size
    pub const STAR_COUNT: usize = 499;

    /// Sprite sizes in pixels
    pub const ELEMENT_SPRITE_SIZE: f32 = 50.0;
    pub const METEOR_SPRITE_SIZE: f32 = 15.0;
    pub const STAR_SPRITE_SIZE: f32 = 3.0;

    /// Score readout placement
    pub const SCORE_POSITION: Vec2 = Vec2::new(900.0, 50.0);
    pub const SCORE_SIZE: Vec2 = Vec2::new(100.0, 100.0);
    pub const SCORE_COLOR: [u8; 3] = [255, 0, 0];
}

/// Convert degrees to radians.
///
/// Uses the exact value of π rather than a rounded `3.14`, so a full turn of
/// yaw lands back on the starting facing.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Offset of a point on a circle of radius `r` at `angle` degrees
#[inline]
pub fn orbit_offset(r: f32, angle: f32) -> Vec2 {
    let theta = degrees_to_radians(angle);
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians_is_exact() {
        // A rounded 3.14 would be off by more than 1e-3 here
        assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((degrees_to_radians(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_offset_quadrants() {
        let right = orbit_offset(10.0, 0.0);
        assert!((right.x - 10.0).abs() < 1e-4 && right.y.abs() < 1e-4);

        let down = orbit_offset(10.0, 90.0);
        assert!(down.x.abs() < 1e-4 && (down.y - 10.0).abs() < 1e-4);
    }
}
