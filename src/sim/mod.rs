//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Whole-frame steps (only the cosmetic starfield sees wall-clock time)
//! - Seeded RNG only
//! - Stable iteration order (by entity spawn order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod field;
pub mod planet;
pub mod player;
pub mod starfield;
pub mod state;
pub mod tick;
pub mod vector;
pub mod world;

pub use entity::{Body, Entity, EntityKind, Interaction, Meteor, Sprite, Sun};
pub use field::{Contact, FieldSubject, GravityField, resolve};
pub use planet::{Orbit, Planet};
pub use player::{Pilot, Player};
pub use starfield::{Particle, Starfield};
pub use state::{GameEvent, GameState, RngState};
pub use tick::{TickInput, generate_solar_system, tick};
pub use vector::Vector2;
pub use world::{EntityId, Neighbours, World};
