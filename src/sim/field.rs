//! Gravity field interaction
//!
//! Pairwise rule between a subject and a planet's field. The hard collision
//! with the planet core is checked first; a crash may move the subject, and
//! the field test then runs against wherever the subject ended up.

use glam::Vec2;

use super::entity::Body;
use super::vector::{self, Vector2};
use crate::consts::COLLISION_PADDING;

/// Gravity field projected by a planet, captured at its current position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub centre: Vec2,
    /// Radius of the solid body
    pub core_radius: f32,
    /// Reach of the field (always greater than `core_radius`)
    pub radius: f32,
    pub quadratic: f32,
    pub linear: f32,
}

impl GravityField {
    /// Whether `point` is close enough to the core to crash
    #[inline]
    pub fn hits_core(&self, point: Vec2) -> bool {
        (self.centre - point).length() < self.core_radius + COLLISION_PADDING
    }

    /// Whether `point` is inside the field (boundary inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        vector::point_in_circle(point, self.centre, self.radius)
    }

    /// Velocity change the field applies to a body at `point`
    pub fn pull_on(&self, point: Vec2) -> Vec2 {
        let mut direction: Vector2 = self.centre - point;
        let distance = direction.length();
        vector::normalise(&mut direction);
        let strength = distance * self.quadratic.powi(2) + distance * self.linear;
        direction * strength
    }
}

/// Something a gravity field can act on
pub trait FieldSubject {
    fn position(&self) -> Vec2;

    /// Add `dv` to the subject's velocity
    fn pull(&mut self, dv: Vec2);

    /// Whether the subject can crash into planet cores
    fn collides_with_cores(&self) -> bool {
        false
    }

    /// Called on a hard collision with a planet core
    fn crash(&mut self) {}

    /// Called once per resolution while the subject sits inside a field
    fn score_field(&mut self) {}
}

/// Plain bodies drift: pulled, never crash or score
impl FieldSubject for Body {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn pull(&mut self, dv: Vec2) {
        self.vel += dv;
    }
}

/// Outcome of one resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub crashed: bool,
    pub in_field: bool,
}

/// Resolve `subject` against one gravity field.
///
/// Distances for the crash test and the field test are computed separately.
pub fn resolve<S: FieldSubject + ?Sized>(subject: &mut S, field: &GravityField) -> Contact {
    let mut contact = Contact::default();

    if subject.collides_with_cores() && field.hits_core(subject.position()) {
        subject.crash();
        contact.crashed = true;
    }

    let pos = subject.position();
    if field.contains(pos) {
        subject.score_field();
        subject.pull(field.pull_on(pos));
        contact.in_field = true;
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_at(centre: Vec2) -> GravityField {
        GravityField {
            centre,
            core_radius: 10.0,
            radius: 90.0,
            quadratic: 0.01,
            linear: 0.0005,
        }
    }

    #[test]
    fn test_pull_points_at_centre_with_quadratic_strength() {
        let field = field_at(Vec2::new(100.0, 0.0));
        let pull = field.pull_on(Vec2::new(50.0, 0.0));
        // d = 50: 50 * 0.01^2 + 50 * 0.0005 = 0.005 + 0.025
        assert!((pull.x - 0.03).abs() < 1e-6);
        assert!(pull.y.abs() < 1e-6);
    }

    #[test]
    fn test_body_inside_field_is_pulled() {
        let field = field_at(Vec2::new(100.0, 0.0));
        let mut body = Body::at(Vec2::new(40.0, 0.0));

        let contact = resolve(&mut body, &field);
        assert_eq!(
            contact,
            Contact {
                crashed: false,
                in_field: true
            }
        );
        assert!(body.vel.x > 0.0);
    }

    #[test]
    fn test_body_never_crashes_even_inside_core() {
        let field = field_at(Vec2::new(100.0, 0.0));
        let start = Vec2::new(95.0, 0.0);
        let mut body = Body::at(start);

        let contact = resolve(&mut body, &field);
        assert!(!contact.crashed);
        assert_eq!(body.pos, start);
    }

    #[test]
    fn test_body_outside_field_untouched() {
        let field = field_at(Vec2::new(100.0, 0.0));
        let mut body = Body::at(Vec2::new(9.0, 0.0));

        let contact = resolve(&mut body, &field);
        assert!(!contact.in_field);
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_crash_resolves_before_field_test() {
        use crate::consts::PLAYER_RESPAWN;
        use crate::sim::player::{Pilot, Player};

        // Respawn point sits 40 from the centre: inside the field, clear of the core
        let field = field_at(PLAYER_RESPAWN + Vec2::new(40.0, 0.0));
        let mut body = Body::at(field.centre + Vec2::new(20.0, 0.0));
        body.vel = Vec2::new(-2.0, 0.0);
        let mut player = Player::new();
        player.score = 70;

        let contact = resolve(
            &mut Pilot {
                body: &mut body,
                player: &mut player,
            },
            &field,
        );

        assert_eq!(
            contact,
            Contact {
                crashed: true,
                in_field: true
            }
        );
        // Reset wiped the score, then the field scored once from the respawn point
        assert_eq!(player.score, 10);
        assert_eq!(body.pos, PLAYER_RESPAWN);
        assert_eq!(body.vel, field.pull_on(PLAYER_RESPAWN));
        assert!(body.vel.x > 0.0);
    }

    #[test]
    fn test_subject_at_field_centre_gets_no_nan() {
        let field = field_at(Vec2::new(100.0, 0.0));
        let mut body = Body::at(Vec2::new(100.0, 0.0));

        resolve(&mut body, &field);
        assert_eq!(body.vel, Vec2::ZERO);
    }
}
