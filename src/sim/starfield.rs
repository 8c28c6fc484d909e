//! Decorative starfield
//!
//! Stars never take part in gameplay physics. They only age with real
//! elapsed time and, if given a finite lifetime, expire.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Sprite};

/// A single star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    /// Time to live; zero means immortal
    pub lifetime: f32,
    pub time_alive: f32,
}

impl Particle {
    pub fn new(pos: Vec2, lifetime: f32) -> Self {
        Self {
            body: Body::at(pos),
            lifetime,
            time_alive: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.body.alive
    }

    /// Age the particle by `elapsed` (same unit as `lifetime`).
    ///
    /// Returns true on the one call that kills it.
    pub fn prepare(&mut self, elapsed: f32) -> bool {
        if self.lifetime == 0.0 {
            return false;
        }

        self.time_alive += elapsed;
        if self.body.alive && self.time_alive > self.lifetime {
            self.body.alive = false;
            return true;
        }
        false
    }
}

/// All stars plus the sprite they share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Starfield {
    pub particles: Vec<Particle>,
    pub sprite: Sprite,
}

impl Starfield {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            particles: Vec::new(),
            sprite,
        }
    }

    /// Scatter `count` immortal stars at whole-pixel positions in [1, width] x [1, height]
    pub fn scatter<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32, sprite: Sprite) -> Self {
        let max_x = (width as u32).max(1);
        let max_y = (height as u32).max(1);
        let particles = (0..count)
            .map(|_| {
                let x = rng.random_range(1..=max_x) as f32;
                let y = rng.random_range(1..=max_y) as f32;
                Particle::new(Vec2::new(x, y), 0.0)
            })
            .collect();

        Self { particles, sprite }
    }

    /// Age every particle, returning how many expired this call
    pub fn advance(&mut self, elapsed: f32) -> usize {
        self.particles
            .iter_mut()
            .map(|p| p.prepare(elapsed))
            .filter(|&died| died)
            .count()
    }

    /// Drop expired particles; call once all of the frame's updates are done
    pub fn compact(&mut self) {
        self.particles.retain(Particle::is_alive);
    }

    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_finite_particle_dies_exactly_once() {
        let mut particle = Particle::new(Vec2::ZERO, 2.0);
        assert!(!particle.prepare(1.5));
        assert!(particle.is_alive());
        assert!(particle.prepare(1.0));
        assert!(!particle.is_alive());
        // Further aging does not report a second death
        assert!(!particle.prepare(5.0));
        assert!(!particle.is_alive());
    }

    #[test]
    fn test_reaching_lifetime_is_not_exceeding_it() {
        let mut particle = Particle::new(Vec2::ZERO, 2.0);
        assert!(!particle.prepare(2.0));
        assert!(particle.is_alive());
    }

    #[test]
    fn test_immortal_particle_never_dies() {
        let mut particle = Particle::new(Vec2::ZERO, 0.0);
        for _ in 0..1000 {
            assert!(!particle.prepare(1.0e6));
        }
        assert!(particle.is_alive());
    }

    #[test]
    fn test_compact_removes_only_dead() {
        let mut field = Starfield::new(Sprite::new("sparkle", 3.0, 3.0));
        field.particles.push(Particle::new(Vec2::new(1.0, 1.0), 0.0));
        field.particles.push(Particle::new(Vec2::new(2.0, 2.0), 10.0));
        field.particles.push(Particle::new(Vec2::new(3.0, 3.0), 50.0));

        assert_eq!(field.advance(20.0), 1);
        // Dead stars linger until compaction
        assert_eq!(field.len(), 3);
        assert_eq!(field.alive().count(), 2);

        field.compact();
        let xs: Vec<f32> = field.particles.iter().map(|p| p.body.pos.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }

    #[test]
    fn test_scatter_stays_on_screen() {
        let mut rng = Pcg32::seed_from_u64(42);
        let field = Starfield::scatter(&mut rng, 499, 1024.0, 768.0, Sprite::new("sparkle", 3.0, 3.0));
        assert_eq!(field.len(), 499);
        for p in &field.particles {
            assert!((1.0..=1024.0).contains(&p.body.pos.x));
            assert!((1.0..=768.0).contains(&p.body.pos.y));
            assert_eq!(p.lifetime, 0.0);
        }
    }
}
