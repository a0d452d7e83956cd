//! Moving bodies: shells, bombs and bullets
//!
//! Shells and bombs fall under gravity and rebound off the playfield edges,
//! losing speed on each bounce. A body that has come to rest on the floor is
//! buried. Bullets fly flat and are spent once they leave the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, Playfield};
use crate::consts::*;
use crate::render::{Rgb, WHITE};

/// What fired a body and how it flies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Player shell: gravity, rebound, burial
    Shell,
    /// Target counter-fire: same flight as a shell
    Bomb,
    /// Rival fire: straight line, no gravity, no rebound
    Bullet,
}

impl BodyKind {
    /// Bombs and bullets are aimed at the player
    pub fn is_ordnance(&self) -> bool {
        !matches!(self, BodyKind::Shell)
    }
}

/// Velocity multipliers applied on a boundary bounce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Restitution {
    /// Kept along the wall normal (sign flipped)
    pub normal: f32,
    /// Kept along the wall
    pub tangent: f32,
}

impl Default for Restitution {
    fn default() -> Self {
        Self {
            normal: RESTITUTION_NORMAL,
            tangent: RESTITUTION_TANGENT,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingBody {
    pub id: u32,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Cleared on burial or impact; dead bodies are compacted away by the tick
    pub alive: bool,
}

impl MovingBody {
    pub fn shell(id: u32, pos: Vec2, vel: Vec2, color: Rgb) -> Self {
        Self {
            id,
            kind: BodyKind::Shell,
            pos,
            vel,
            radius: SHELL_RADIUS,
            color,
            alive: true,
        }
    }

    pub fn bomb(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind: BodyKind::Bomb,
            pos,
            vel,
            radius: BOMB_RADIUS,
            color: WHITE,
            alive: true,
        }
    }

    /// Bullets always travel right-to-left toward the player side
    pub fn bullet(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind: BodyKind::Bullet,
            pos,
            vel: Vec2::new(-BULLET_SPEED, 0.0),
            radius: BULLET_RADIUS,
            color: WHITE,
            alive: true,
        }
    }

    /// Bounding square, for rectangle hit tests
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    /// Integrate one step: gravity, motion, rebound, then the burial check
    pub fn advance(&mut self, dt: f32, gravity: f32, field: &Playfield, restitution: Restitution) {
        if !self.alive {
            return;
        }

        match self.kind {
            BodyKind::Bullet => {
                self.pos += self.vel * dt;
                if field.is_clear_of(self.pos, self.radius) {
                    self.alive = false;
                }
            }
            BodyKind::Shell | BodyKind::Bomb => {
                self.vel.y += gravity;
                self.pos += self.vel * dt;
                self.reflect_at_boundaries(field, restitution);

                let resting = self.vel.length_squared() < BURY_SPEED_SQ;
                let on_floor = self.pos.y > field.height - 2.0 * self.radius;
                if resting && on_floor {
                    self.alive = false;
                }
            }
        }
    }

    /// Clamp to the playfield and bounce, one axis at a time.
    ///
    /// A corner hit bounces on both axes, so each velocity component is scaled
    /// by the tangent factor once for the other axis's wall as well.
    /// Returns true if any wall was hit.
    pub fn reflect_at_boundaries(&mut self, field: &Playfield, restitution: Restitution) -> bool {
        let dims = field.size();
        let mut bounced = false;

        for axis in 0..2 {
            let near = self.radius;
            let far = dims[axis] - self.radius;

            let wall = if self.pos[axis] < near {
                near
            } else if self.pos[axis] > far {
                far
            } else {
                continue;
            };

            let other = 1 - axis;
            self.pos[axis] = wall;
            self.vel[axis] = -(self.vel[axis] * restitution.normal).trunc();
            self.vel[other] = (self.vel[other] * restitution.tangent).trunc();
            bounced = true;
        }

        bounced
    }
}
