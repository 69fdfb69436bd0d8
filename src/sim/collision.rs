//! Collision and boundary predicates
//!
//! Two checks end a shot: overlapping the target circle, or leaving the
//! playfield past the bottom or right edge.

use glam::Vec2;

use super::state::{Playfield, Target};

/// Projectile/target overlap test.
///
/// Strict inequality: a center distance of exactly the combined radii does
/// not count as a hit.
pub fn projectile_hits_target(pos: Vec2, radius: f32, target: &Target) -> bool {
    pos.distance(target.pos) < radius + target.radius
}

/// Whether the projectile has left the playfield.
///
/// Only the bottom and right edges are checked. A shot can rise above the
/// top edge and fall back in; with the cannon on the left and a 45° launch
/// it never travels left.
pub fn left_playfield(pos: Vec2, field: &Playfield) -> bool {
    pos.y > field.height || pos.x > field.width
}
