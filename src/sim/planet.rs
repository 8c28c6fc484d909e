//! Planets
//!
//! A planet's position is not integrated: it is recomputed every frame as a
//! point on a circle around its anchor. Each planet carries a gravity field
//! that grows stronger with distance from the core, up to the field edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::field::GravityField;
use super::world::EntityId;
use crate::consts::PLANET_SPRITE_FRAMES;
use crate::error::SimError;
use crate::orbit_offset;

/// Circular orbit around another entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub anchor: EntityId,
    pub radius: f32,
    /// Degrees per frame
    pub speed: f32,
    /// Current angle in degrees, [0, 360)
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Radius of the solid core
    pub radius: f32,
    pub field_radius: f32,
    pub field_quadratic: f32,
    pub field_linear: f32,
    pub orbit: Orbit,
    /// Index into the pre-rotated sprite frames
    pub frame: u32,
}

impl Planet {
    /// Build a planet; the field must reach past the core.
    pub fn new(
        radius: f32,
        field_radius: f32,
        field_quadratic: f32,
        field_linear: f32,
        orbit: Orbit,
    ) -> Result<Self, SimError> {
        // Negated so NaN radii are rejected too
        if !(field_radius > radius) {
            return Err(SimError::InvalidPlanet {
                radius,
                field_radius,
            });
        }

        Ok(Self {
            radius,
            field_radius,
            field_quadratic,
            field_linear,
            orbit,
            frame: 0,
        })
    }

    /// This planet's field centred on `pos`
    pub fn field_at(&self, pos: Vec2) -> GravityField {
        GravityField {
            centre: pos,
            core_radius: self.radius,
            radius: self.field_radius,
            quadratic: self.field_quadratic,
            linear: self.field_linear,
        }
    }

    /// Place the planet on its orbit around `anchor_pos`, then advance the
    /// orbit angle and sprite frame
    pub fn prepare(&mut self, body: &mut Body, anchor_pos: Option<Vec2>) {
        match anchor_pos {
            Some(centre) => {
                body.pos = centre + orbit_offset(self.orbit.radius, self.orbit.angle);
            }
            None => log::warn!("Planet anchor {:?} missing, holding position", self.orbit.anchor),
        }
        self.orbit.angle = (self.orbit.angle + self.orbit.speed).rem_euclid(360.0);
        self.frame = (self.frame + 1) % PLANET_SPRITE_FRAMES;
    }
}
