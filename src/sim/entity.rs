//! Entity model
//!
//! Every game object is an [`Entity`]: shared kinematic state in a [`Body`],
//! a sprite, and a variant payload. Update and interaction code asks an entity
//! what it *can* do (carry a gravity field, collide with planet cores, orbit
//! an anchor) instead of switching on what it *is*.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::{self, GravityField};
use super::planet::Planet;
use super::player::{Pilot, Player};
use super::state::GameEvent;
use super::world::{EntityId, Neighbours};

/// Kinematic state shared by all entities and particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Cleared only by expiring particles
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            alive: true,
        }
    }

    /// Stationary body at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self::new(pos, Vec2::ZERO)
    }

    /// Base kinematic rule: velocity += acceleration, position += velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.vel += self.acc;
        self.pos += self.vel;
    }
}

/// Visual handle, opaque to the simulation apart from its pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Asset name (e.g. `planet-002`)
    pub key: String,
    /// Width and height in pixels
    pub size: Vec2,
}

impl Sprite {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            size: Vec2::new(width, height),
        }
    }

    /// Top-left draw position for a sprite centred on `centre`
    #[inline]
    pub fn top_left(&self, centre: Vec2) -> Vec2 {
        centre - self.size / 2.0
    }
}

/// The sun: stationary orbital anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sun {
    pub radius: f32,
}

/// Free-flying rock pulled by planets, never collides with anything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meteor;

/// Variant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityKind {
    Player(Player),
    Planet(Planet),
    Sun(Sun),
    Meteor(Meteor),
}

/// How an entity reacts to other entities' gravity fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pulled by fields, scores inside them, and crashes into planet cores
    Collide,
    /// Pulled by fields only
    PullOnly,
    /// Unaffected
    Inert,
}

/// A game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub body: Body,
    pub sprite: Sprite,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player(pos: Vec2, sprite: Sprite) -> Self {
        Self {
            body: Body::at(pos),
            sprite,
            kind: EntityKind::Player(Player::new()),
        }
    }

    pub fn sun(pos: Vec2, radius: f32, sprite: Sprite) -> Self {
        Self {
            body: Body::at(pos),
            sprite,
            kind: EntityKind::Sun(Sun { radius }),
        }
    }

    pub fn planet(pos: Vec2, planet: Planet, sprite: Sprite) -> Self {
        Self {
            body: Body::at(pos),
            sprite,
            kind: EntityKind::Planet(planet),
        }
    }

    pub fn meteor(pos: Vec2, vel: Vec2, sprite: Sprite) -> Self {
        Self {
            body: Body::new(pos, vel),
            sprite,
            kind: EntityKind::Meteor(Meteor),
        }
    }

    /// Gravity field this entity projects, if any
    pub fn gravity_field(&self) -> Option<GravityField> {
        match &self.kind {
            EntityKind::Planet(planet) => Some(planet.field_at(self.body.pos)),
            _ => None,
        }
    }

    /// How this entity responds to fields around it
    pub fn interaction(&self) -> Interaction {
        match self.kind {
            EntityKind::Player(_) => Interaction::Collide,
            EntityKind::Meteor(_) => Interaction::PullOnly,
            EntityKind::Planet(_) | EntityKind::Sun(_) => Interaction::Inert,
        }
    }

    /// Entity this one orbits, if any
    pub fn orbit_anchor(&self) -> Option<EntityId> {
        match &self.kind {
            EntityKind::Planet(planet) => Some(planet.orbit.anchor),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Player controls, if this entity is the player
    pub fn pilot(&mut self) -> Option<Pilot<'_>> {
        match &mut self.kind {
            EntityKind::Player(player) => Some(Pilot {
                body: &mut self.body,
                player,
            }),
            _ => None,
        }
    }

    /// Sprite rotation in degrees for the renderer
    pub fn rotation(&self) -> f32 {
        match &self.kind {
            EntityKind::Player(player) => player.yaw as f32,
            EntityKind::Planet(planet) => planet.frame as f32,
            _ => 0.0,
        }
    }

    /// Top-left draw position
    pub fn draw_position(&self) -> Vec2 {
        self.sprite.top_left(self.body.pos)
    }

    /// Advance this entity by one frame.
    ///
    /// `neighbours` is every other entity in the world as it stands right now;
    /// entities earlier in the list have already been advanced this frame.
    pub fn prepare(&mut self, neighbours: &Neighbours<'_>, events: &mut Vec<GameEvent>) {
        // Orbiting entities are placed analytically instead of integrated
        if let Some(anchor) = self.orbit_anchor() {
            let anchor_pos = neighbours.get(anchor).map(|e| e.body.pos);
            if let EntityKind::Planet(planet) = &mut self.kind {
                planet.prepare(&mut self.body, anchor_pos);
            }
            return;
        }

        match self.interaction() {
            Interaction::Collide => {
                if let Some(mut pilot) = self.pilot() {
                    pilot.prepare(neighbours, events);
                }
            }
            Interaction::PullOnly => {
                self.body.integrate();
                for source in neighbours.fields() {
                    field::resolve(&mut self.body, &source);
                }
            }
            Interaction::Inert => self.body.integrate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_applies_acceleration_first() {
        let mut body = Body::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0));
        body.acc = Vec2::new(0.5, 0.5);
        body.integrate();
        assert_eq!(body.vel, Vec2::new(1.5, 0.5));
        assert_eq!(body.pos, Vec2::new(2.5, 1.5));
    }

    #[test]
    fn test_draw_position_is_centre_minus_half_size() {
        let sun = Entity::sun(Vec2::new(512.0, 384.0), 50.0, Sprite::new("sun", 50.0, 40.0));
        assert_eq!(sun.draw_position(), Vec2::new(487.0, 364.0));
    }

    #[test]
    fn test_capabilities() {
        let player = Entity::player(Vec2::ZERO, Sprite::new("ship", 50.0, 50.0));
        let meteor = Entity::meteor(Vec2::ZERO, Vec2::X, Sprite::new("rock", 15.0, 15.0));
        let sun = Entity::sun(Vec2::ZERO, 50.0, Sprite::new("sun", 50.0, 50.0));

        assert_eq!(player.interaction(), Interaction::Collide);
        assert_eq!(meteor.interaction(), Interaction::PullOnly);
        assert_eq!(sun.interaction(), Interaction::Inert);
        assert!(player.gravity_field().is_none());
        assert!(sun.gravity_field().is_none());
        assert!(sun.orbit_anchor().is_none());
    }

    #[test]
    fn test_update_follows_capabilities() {
        use crate::sim::planet::{Orbit, Planet};
        use crate::sim::world::{EntityId, World};

        let mut world = World::new();
        let sun = world.spawn(Entity::sun(Vec2::new(300.0, 300.0), 50.0, Sprite::new("sun", 50.0, 50.0)));
        let planet = Planet::new(
            10.0,
            90.0,
            0.01,
            0.0005,
            Orbit {
                anchor: sun,
                radius: 100.0,
                speed: 0.0,
                angle: 0.0,
            },
        )
        .unwrap();
        let planet = world.spawn(Entity::planet(Vec2::ZERO, planet, Sprite::new("p", 50.0, 50.0)));
        // Inside the field and inside the core padding
        let rock = world.spawn(Entity::meteor(
            Vec2::new(420.0, 300.0),
            Vec2::ZERO,
            Sprite::new("rock", 15.0, 15.0),
        ));
        let ship = world.spawn(Entity::player(Vec2::new(380.0, 300.0), Sprite::new("ship", 50.0, 50.0)));

        assert_eq!(world.get(planet).unwrap().orbit_anchor(), Some(sun));

        let mut events = Vec::new();
        world.step(&mut events);

        // Orbit override: placed on the circle, not integrated
        assert_eq!(world.get(planet).unwrap().body.pos, Vec2::new(400.0, 300.0));
        // Sun is inert
        assert_eq!(world.get(sun).unwrap().body.pos, Vec2::new(300.0, 300.0));
        assert_eq!(world.get(EntityId(0)).unwrap().body.vel, Vec2::ZERO);

        // PullOnly: pulled toward the planet, never reset
        let rock = world.get(rock).unwrap();
        assert_eq!(rock.body.pos, Vec2::new(420.0, 300.0));
        assert!(rock.body.vel.x < 0.0);

        // Collide: crashed into the core and respawned
        assert_eq!(world.get(ship).unwrap().body.pos, crate::consts::PLAYER_RESPAWN);
        assert!(matches!(events.as_slice(), [GameEvent::PlayerReset { score_lost: 0 }]));
    }

    #[test]
    fn test_fresh_bodies_do_not_share_state() {
        let mut a = Entity::meteor(Vec2::ZERO, Vec2::ZERO, Sprite::new("rock", 15.0, 15.0));
        let b = Entity::meteor(Vec2::ZERO, Vec2::ZERO, Sprite::new("rock", 15.0, 15.0));
        a.body.acc.x = 3.0;
        assert_eq!(b.body.acc, Vec2::ZERO);
    }
}
