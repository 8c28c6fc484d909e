//! The player's craft
//!
//! Steered by yaw, propelled by a limited boost charge, and dragged back
//! toward rest by a short damper after every boost.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::field::{self, FieldSubject};
use super::state::GameEvent;
use super::vector;
use super::world::Neighbours;
use crate::consts::*;
use crate::degrees_to_radians;

/// Player-specific state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Orientation in whole degrees, [0, 359]
    pub yaw: i32,
    /// Remaining boosts
    pub boost_level: u32,
    /// Unit vector the craft points along, derived from `yaw`
    pub facing: Vec2,
    /// Set by `boost`, cleared at the end of `prepare`
    pub is_boosting: bool,
    /// Per-frame deceleration captured at the last boost
    pub damper: Vec2,
    /// Frames of damping left
    pub damper_frames: u32,
    pub score: u64,
    /// Whether the craft ended the last frame inside any field
    #[serde(default)]
    pub in_field: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            yaw: PLAYER_START_YAW,
            boost_level: PLAYER_START_BOOST,
            facing: Vec2::ZERO,
            is_boosting: false,
            damper: Vec2::ZERO,
            damper_frames: 0,
            score: 0,
            in_field: false,
        };
        player.update_facing();
        player
    }

    /// Turn by `delta` degrees.
    ///
    /// Going below 0 lands on 359 and going above 359 lands on 0, whatever
    /// the size of the overshoot.
    pub fn adjust_yaw(&mut self, delta: i32) {
        self.yaw += delta;
        if self.yaw < 0 {
            self.yaw = 359;
        } else if self.yaw > 359 {
            self.yaw = 0;
        }
    }

    /// Recompute the facing vector from yaw
    pub fn update_facing(&mut self) {
        let theta = degrees_to_radians(self.yaw as f32);
        self.facing = Vec2::new(-theta.sin(), -theta.cos());
        vector::normalise(&mut self.facing);
    }
}

/// Mutable view of the player entity: its body plus its player state
pub struct Pilot<'a> {
    pub body: &'a mut Body,
    pub player: &'a mut Player,
}

impl Pilot<'_> {
    pub fn adjust_yaw(&mut self, delta: i32) {
        self.player.adjust_yaw(delta);
    }

    /// Fire one boost along the facing vector.
    ///
    /// Returns false (and does nothing) with an empty boost charge.
    pub fn boost(&mut self) -> bool {
        let player = &mut *self.player;
        if player.boost_level == 0 {
            return false;
        }

        player.is_boosting = true;
        self.body.vel += player.facing * BOOST_IMPULSE;
        player.damper = -self.body.vel / DAMPER_FRAMES as f32;
        player.damper_frames = DAMPER_FRAMES;
        player.boost_level -= 1;
        true
    }

    /// Back to the respawn point, at rest, with no score
    pub fn reset(&mut self) {
        self.body.pos = PLAYER_RESPAWN;
        self.body.vel = Vec2::ZERO;
        self.body.acc = Vec2::ZERO;
        self.player.score = 0;
    }

    /// Advance the craft by one frame
    pub fn prepare(&mut self, neighbours: &Neighbours<'_>, events: &mut Vec<GameEvent>) {
        self.body.integrate();
        self.player.update_facing();

        let mut in_field = false;
        for source in neighbours.fields() {
            let score_before = self.player.score;
            let contact = field::resolve(self, &source);
            if contact.crashed {
                events.push(GameEvent::PlayerReset {
                    score_lost: score_before,
                });
            }
            in_field |= contact.in_field;
        }
        if in_field && !self.player.in_field {
            events.push(GameEvent::FieldEntered);
        }
        self.player.in_field = in_field;

        let player = &mut *self.player;
        if !player.is_boosting {
            if player.boost_level < BOOST_REGEN_CAP {
                player.boost_level += 1;
            }
            if player.damper_frames > 0 {
                self.body.vel += player.damper;
                player.damper_frames -= 1;
            }
        }
        player.is_boosting = false;
    }
}

impl FieldSubject for Pilot<'_> {
    fn position(&self) -> Vec2 {
        self.body.pos
    }

    fn pull(&mut self, dv: Vec2) {
        self.body.vel += dv;
    }

    fn collides_with_cores(&self) -> bool {
        true
    }

    fn crash(&mut self) {
        self.reset();
    }

    fn score_field(&mut self) {
        self.player.score += FIELD_SCORE;
    }
}
