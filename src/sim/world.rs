//! Entity arena
//!
//! Entities are stored in spawn order and addressed by [`EntityId`], their
//! index. Nothing is removed mid-session, so ids stay valid for the whole run.
//!
//! The frame update is a single pass in spawn order. While entity `i` is being
//! prepared it sees every other entity through [`Neighbours`]; those before `i`
//! have already moved this frame, those after have not.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::field::GravityField;
use super::player::{Pilot, Player};
use super::state::GameEvent;

/// Stable handle to an entity in a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub usize);

/// Everything in the world except the entity currently being prepared
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a> {
    index: usize,
    before: &'a [Entity],
    after: &'a [Entity],
}

impl<'a> Neighbours<'a> {
    /// No neighbours at all
    pub fn empty() -> Self {
        Self {
            index: 0,
            before: &[],
            after: &[],
        }
    }

    /// Look up another entity; the current entity itself is not visible
    pub fn get(&self, id: EntityId) -> Option<&'a Entity> {
        let EntityId(i) = id;
        if i < self.index {
            self.before.get(i)
        } else if i > self.index {
            self.after.get(i - self.index - 1)
        } else {
            None
        }
    }

    pub fn iter(self) -> impl Iterator<Item = &'a Entity> {
        self.before.iter().chain(self.after.iter())
    }

    /// Gravity fields projected by neighbours, in spawn order
    pub fn fields(self) -> impl Iterator<Item = GravityField> {
        self.iter().filter_map(Entity::gravity_field)
    }
}

/// All game entities of a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    entities: Vec<Entity>,
    player: Option<EntityId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, returning its handle
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len());
        if entity.as_player().is_some() && self.player.is_none() {
            self.player = Some(id);
        }
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Handle of the first player spawned
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Player> {
        self.player
            .and_then(|id| self.get(id))
            .and_then(Entity::as_player)
    }

    /// Controls for the player entity
    pub fn pilot(&mut self) -> Option<Pilot<'_>> {
        let id = self.player?;
        self.entities.get_mut(id.0)?.pilot()
    }

    /// Run one frame's update pass over every entity
    pub fn step(&mut self, events: &mut Vec<GameEvent>) {
        for index in 0..self.entities.len() {
            let (before, rest) = self.entities.split_at_mut(index);
            let Some((current, after)) = rest.split_first_mut() else {
                break;
            };
            let neighbours = Neighbours {
                index,
                before: &*before,
                after: &*after,
            };
            current.prepare(&neighbours, events);
        }
    }
}
