//! Collision detection between projectiles, targets and the player
//!
//! Detection is pure: it reads the live entity lists and reports what was hit.
//! The tick applies the report (scores, marks) and compacts the lists
//! afterwards, so nothing is removed while it is being iterated.

use glam::Vec2;

use super::body::MovingBody;
use super::geometry::Aabb;
use super::target::Target;
use crate::distance;

/// Shape a target presents to incoming shells
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionShape {
    Circle { center: Vec2, radius: f32 },
    Box(Aabb),
}

impl CollisionShape {
    /// Check if a projectile touches this shape.
    ///
    /// Circles use center distance (touching counts). Boxes use strict overlap
    /// with the projectile's bounding square.
    pub fn hit_by(&self, body: &MovingBody) -> bool {
        match *self {
            CollisionShape::Circle { center, radius } => {
                circles_touch(center, radius, body.pos, body.radius)
            }
            CollisionShape::Box(aabb) => aabb.overlaps(&body.bounds()),
        }
    }
}

/// Two circles collide when their centers are within the sum of radii
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) <= ra + rb
}

/// Check if an ordnance piece has reached a platform at `platform_pos`.
///
/// Platforms have no body of their own: the ordnance must cover the
/// platform's anchor point.
#[inline]
pub fn ordnance_hits_platform(platform_pos: Vec2, ordnance: &MovingBody) -> bool {
    distance(platform_pos, ordnance.pos) <= ordnance.radius
}

/// Everything that collided during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Indices into the target list, unique and sorted highest first
    pub struck_targets: Vec<usize>,
    /// A shell hit the drone
    pub drone_shot: bool,
    /// Indices into the ordnance list of pieces touching the player
    pub ordnance_hits: Vec<usize>,
    /// The drone flew into the player
    pub drone_rammed: bool,
}

impl CollisionReport {
    /// Hits taken by the player this tick
    pub fn hits_taken(&self) -> u32 {
        self.ordnance_hits.len() as u32 + u32::from(self.drone_rammed)
    }

    /// Targets destroyed this tick (each counted once)
    pub fn destroyed(&self) -> u32 {
        self.struck_targets.len() as u32 + u32::from(self.drone_shot)
    }

    pub fn is_empty(&self) -> bool {
        self.struck_targets.is_empty()
            && self.ordnance_hits.is_empty()
            && !self.drone_shot
            && !self.drone_rammed
    }
}

/// Indices of targets hit by at least one live shell, highest first.
///
/// Every shell is tested against every target; a target struck by several
/// shells appears once.
pub fn struck_targets(shells: &[MovingBody], targets: &[Target]) -> Vec<usize> {
    let mut struck = Vec::new();
    for shell in shells.iter().filter(|s| s.alive) {
        for (j, target) in targets.iter().enumerate() {
            if target.collision_shape().hit_by(shell) {
                struck.push(j);
            }
        }
    }
    struck.sort_unstable_by(|a, b| b.cmp(a));
    struck.dedup();
    struck
}

/// Run every hit test for one tick
pub fn detect(
    shells: &[MovingBody],
    targets: &[Target],
    drone: Option<&Target>,
    ordnance: &[MovingBody],
    player_pos: Vec2,
) -> CollisionReport {
    let struck_targets = struck_targets(shells, targets);

    let drone_shot = drone.is_some_and(|d| {
        let shape = d.collision_shape();
        shells.iter().filter(|s| s.alive).any(|s| shape.hit_by(s))
    });

    let ordnance_hits = ordnance
        .iter()
        .enumerate()
        .filter(|(_, o)| o.alive && o.kind.is_ordnance() && ordnance_hits_platform(player_pos, o))
        .map(|(i, _)| i)
        .collect();

    // A drone that was shot down this tick cannot also ram
    let drone_rammed = !drone_shot
        && drone.is_some_and(|d| {
            d.radius()
                .is_some_and(|r| distance(player_pos, d.pos) <= r)
        });

    CollisionReport {
        struck_targets,
        drone_shot,
        ordnance_hits,
        drone_rammed,
    }
}
