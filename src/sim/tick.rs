//! Per-frame simulation step
//!
//! Order within a frame: player controls, starfield aging, the entity update
//! pass, then end-of-frame compaction and bookkeeping.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Sprite};
use super::planet::{Orbit, Planet};
use super::starfield::Starfield;
use super::state::{GameEvent, GameState};
use super::world::{EntityId, World};
use crate::consts::*;
use crate::error::SimError;
use crate::orbit_offset;
use crate::settings::Settings;

/// Held controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust along the facing vector
    pub boost: bool,
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
}

/// Advance the session by one frame.
///
/// `elapsed_ms` is real time since the previous frame. Only the starfield
/// uses it, everything else moves in whole frames.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) {
    state.events.clear();

    if let Some(mut pilot) = state.world.pilot() {
        if input.boost && pilot.boost() {
            state.events.push(GameEvent::Boosted {
                remaining: pilot.player.boost_level,
            });
        }
        if input.turn_left {
            pilot.adjust_yaw(YAW_STEP);
        }
        if input.turn_right {
            pilot.adjust_yaw(-YAW_STEP);
        }
    }

    state.starfield.advance(elapsed_ms);
    state.world.step(&mut state.events);
    state.starfield.compact();

    for event in &state.events {
        if let GameEvent::PlayerReset { score_lost } = *event {
            state.attempts += 1;
            state.best_score = state.best_score.max(score_lost);
        }
    }
    state.best_score = state.best_score.max(state.score());
    state.frame += 1;
}

/// Build the sun, the player, five orbiting planets (and optionally the
/// meteor), plus the starfield.
///
/// Spawn order is update order: meteor, sun, player, planets.
///
/// Planets start on their orbit at their random starting angle rather than
/// at a placeholder spot. A placeholder would leave the player inside a
/// field that no planet occupies during the very first frame.
pub fn generate_solar_system<R: Rng>(
    rng: &mut R,
    settings: &Settings,
) -> Result<(World, Starfield, EntityId), SimError> {
    let starfield = Starfield::scatter(
        rng,
        settings.star_count,
        settings.screen_width,
        settings.screen_height,
        Sprite::new("sparkle01", STAR_SPRITE_SIZE, STAR_SPRITE_SIZE),
    );

    let mut world = World::new();

    if settings.spawn_meteor {
        world.spawn(Entity::meteor(
            METEOR_START,
            METEOR_VELOCITY,
            Sprite::new("asteroid-001", METEOR_SPRITE_SIZE, METEOR_SPRITE_SIZE),
        ));
    }

    let centre = Vec2::new(settings.screen_width, settings.screen_height) / 2.0;
    let sun = world.spawn(Entity::sun(centre, SUN_RADIUS, element_sprite("planet-004")));

    let player = world.spawn(Entity::player(PLAYER_RESPAWN, element_sprite("Su-55")));

    for orbital_radius in PLANET_ORBITS {
        let sprite = element_sprite(&format!("planet-{:03}", rng.random_range(1..=4u32)));
        let speed = (rng.random::<f32>() + 0.8) % 1.0;
        let angle = rng.random_range(0..360u32) as f32;

        let planet = Planet::new(
            PLANET_RADIUS,
            PLANET_FIELD_RADIUS,
            PLANET_FIELD_QUADRATIC,
            PLANET_FIELD_LINEAR,
            Orbit {
                anchor: sun,
                radius: orbital_radius,
                speed,
                angle,
            },
        )?;
        log::debug!("Planet at orbit {orbital_radius}: speed={speed:.3} deg/frame, angle={angle}");
        let pos = centre + orbit_offset(orbital_radius, angle);
        world.spawn(Entity::planet(pos, planet, sprite));
    }

    Ok((world, starfield, player))
}

fn element_sprite(key: &str) -> Sprite {
    Sprite::new(key, ELEMENT_SPRITE_SIZE, ELEMENT_SPRITE_SIZE)
}
