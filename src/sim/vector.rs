//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`; arithmetic and `length` come from glam. The
//! helpers here cover the in-place normalisation and circle containment the
//! simulation relies on.

use glam::Vec2;

/// 2D vector value type used throughout the simulation
pub type Vector2 = Vec2;

/// Normalise `v` in place to unit length.
///
/// A zero-length vector has no direction and is left as zero.
#[inline]
pub fn normalise(v: &mut Vector2) {
    *v = v.normalize_or_zero();
}

/// Whether `point` lies within `radius` of `centre` (boundary inclusive).
///
/// Compares squared distances, no square root.
#[inline]
pub fn point_in_circle(point: Vector2, centre: Vector2, radius: f32) -> bool {
    point.distance_squared(centre) <= radius * radius
}
