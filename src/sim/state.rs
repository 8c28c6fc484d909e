//! Game state and session bookkeeping
//!
//! One continuous session: the world of entities, the starfield, and a few
//! counters. Crashing into a planet resets the player in place; nothing else
//! changes phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::{Pilot, Player};
use super::starfield::Starfield;
use super::tick::generate_solar_system;
use super::world::{EntityId, World};
use crate::error::SimError;
use crate::settings::Settings;

/// Something notable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player hit a planet core and respawned
    PlayerReset { score_lost: u64 },
    /// A boost fired, leaving `remaining` charges
    Boosted { remaining: u32 },
    /// The player moved into a gravity field after being outside all of them
    FieldEntered,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub rng_state: RngState,
    /// Frames simulated so far
    pub frame: u64,
    pub world: World,
    pub starfield: Starfield,
    /// Player handle in `world`
    pub player: EntityId,
    /// Number of crashes so far
    pub attempts: u32,
    /// Highest score reached this session (memory only)
    pub best_score: u64,
    /// Events raised during the latest frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a fresh solar system from `settings`
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        let rng_state = RngState::new(settings.seed);
        let mut rng = rng_state.to_rng();
        let (world, starfield, player) = generate_solar_system(&mut rng, settings)?;

        log::info!(
            "Session ready: seed={}, entities={}, stars={}",
            settings.seed,
            world.len(),
            starfield.len()
        );

        Ok(Self {
            rng_state,
            frame: 0,
            world,
            starfield,
            player,
            attempts: 0,
            best_score: 0,
            events: Vec::new(),
        })
    }

    pub fn player(&self) -> Option<&Player> {
        self.world.player()
    }

    /// Current score (zero if the player is somehow missing)
    pub fn score(&self) -> u64 {
        self.player().map_or(0, |p| p.score)
    }

    pub fn pilot(&mut self) -> Option<Pilot<'_>> {
        self.world.pilot()
    }

    /// Take the events raised during the latest frame
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_same_seed_same_layout() {
        let settings = Settings::default();
        let a = GameState::new(&settings).unwrap();
        let b = GameState::new(&settings).unwrap();

        let pos_a: Vec<Vec2> = a.world.iter().map(|e| e.body.pos).collect();
        let pos_b: Vec<Vec2> = b.world.iter().map(|e| e.body.pos).collect();
        assert_eq!(pos_a, pos_b);
        assert_eq!(a.starfield.particles, b.starfield.particles);
    }

    #[test]
    fn test_new_session_starts_clean() {
        let state = GameState::new(&Settings::default()).unwrap();
        assert_eq!(state.frame, 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.attempts, 0);
        assert_eq!(state.world.player_id(), Some(state.player));
        assert!(state.events.is_empty());
    }
}
