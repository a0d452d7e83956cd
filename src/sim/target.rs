//! Targets: stationary and drifting circles, oscillating rectangles and the
//! diagonal drone
//!
//! All variants share one struct; per-variant state lives in [`TargetKind`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::MovingBody;
use super::collision::CollisionShape;
use super::geometry::{Aabb, Playfield};
use crate::consts::*;
use crate::render::{RED, Rgb, WHITE};
use crate::{random_color, velocity_from_angle};

/// Target variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Circle that never moves
    Stationary { radius: f32 },
    /// Circle that drifts by a fixed whole-unit velocity each tick
    Drifting { radius: f32, drift: Vec2 },
    /// Rectangle sliding up and down between the top and bottom edges
    Oscillating {
        size: Vec2,
        speed: f32,
        /// +1 moving down, -1 moving up
        direction: f32,
    },
    /// Drone sweeping corner to corner along the playfield diagonal
    Diagonal {
        /// Launch corner (see [`Playfield::corner`])
        corner: usize,
        radius: f32,
    },
}

/// A target entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub kind: TargetKind,
    /// Center for circles and the drone, top-left corner for rectangles
    pub pos: Vec2,
    pub color: Rgb,
}

impl Target {
    pub fn stationary(id: u32, pos: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            kind: TargetKind::Stationary { radius },
            pos,
            color,
        }
    }

    pub fn drifting(id: u32, pos: Vec2, radius: f32, drift: Vec2, color: Rgb) -> Self {
        Self {
            id,
            kind: TargetKind::Drifting { radius, drift },
            pos,
            color,
        }
    }

    pub fn oscillating(id: u32, top_left: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind: TargetKind::Oscillating {
                size,
                speed,
                direction: 1.0,
            },
            pos: top_left,
            color: RED,
        }
    }

    pub fn drone(id: u32, corner: usize, field: &Playfield) -> Self {
        Self {
            id,
            kind: TargetKind::Diagonal {
                corner,
                radius: DRONE_RADIUS,
            },
            pos: field.corner(corner),
            color: WHITE,
        }
    }

    /// Circle of whole-unit radius at a random spot fully on the playfield
    pub fn random_circle<R: Rng + ?Sized>(
        id: u32,
        radius: i32,
        drifting: bool,
        field: &Playfield,
        rng: &mut R,
    ) -> Self {
        let x = rng.random_range(radius..=field.width as i32 - radius) as f32;
        let y = rng.random_range(radius..=field.height as i32 - radius) as f32;
        let color = random_color(rng);
        let r = radius as f32;

        if drifting {
            let drift = Vec2::new(
                rng.random_range(-DRIFT_MAX..=DRIFT_MAX) as f32,
                rng.random_range(-DRIFT_MAX..=DRIFT_MAX) as f32,
            );
            Self::drifting(id, Vec2::new(x, y), r, drift, color)
        } else {
            Self::stationary(id, Vec2::new(x, y), r, color)
        }
    }

    /// Default-size rectangle at a random spot fully on the playfield
    pub fn random_rect<R: Rng + ?Sized>(id: u32, field: &Playfield, rng: &mut R) -> Self {
        let x = rng.random_range(0..=(field.width - RECT_WIDTH) as i32) as f32;
        let y = rng.random_range(0..=(field.height - RECT_HEIGHT) as i32) as f32;
        Self::oscillating(
            id,
            Vec2::new(x, y),
            Vec2::new(RECT_WIDTH, RECT_HEIGHT),
            RECT_SPEED,
        )
    }

    /// Drone launched from a uniformly random corner
    pub fn random_drone<R: Rng + ?Sized>(id: u32, field: &Playfield, rng: &mut R) -> Self {
        Self::drone(id, rng.random_range(0..4), field)
    }

    /// Radius for round targets, None for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            TargetKind::Stationary { radius }
            | TargetKind::Drifting { radius, .. }
            | TargetKind::Diagonal { radius, .. } => Some(radius),
            TargetKind::Oscillating { .. } => None,
        }
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        match self.kind {
            TargetKind::Oscillating { size, .. } => self.pos + size / 2.0,
            _ => self.pos,
        }
    }

    /// Shape used for hit tests
    pub fn collision_shape(&self) -> CollisionShape {
        match self.kind {
            TargetKind::Oscillating { size, .. } => CollisionShape::Box(Aabb::new(self.pos, size)),
            TargetKind::Stationary { radius }
            | TargetKind::Drifting { radius, .. }
            | TargetKind::Diagonal { radius, .. } => CollisionShape::Circle {
                center: self.pos,
                radius,
            },
        }
    }

    /// Rectangles cannot drop bombs
    pub fn can_counter_fire(&self) -> bool {
        !matches!(self.kind, TargetKind::Oscillating { .. })
    }

    /// Move one tick
    pub fn advance(&mut self, field: &Playfield) {
        match &mut self.kind {
            TargetKind::Stationary { .. } => {}

            TargetKind::Drifting { radius, drift } => {
                self.pos += *drift;
                // Reflect at the edges so drifters stay reachable
                let dims = field.size();
                for axis in 0..2 {
                    if self.pos[axis] < *radius {
                        self.pos[axis] = *radius;
                        drift[axis] = -drift[axis];
                    } else if self.pos[axis] > dims[axis] - *radius {
                        self.pos[axis] = dims[axis] - *radius;
                        drift[axis] = -drift[axis];
                    }
                }
            }

            TargetKind::Oscillating {
                size,
                speed,
                direction,
            } => {
                self.pos.y += *speed * *direction;
                let bottom = field.height - size.y;
                if (self.pos.y <= 0.0 && *direction < 0.0) || (self.pos.y >= bottom && *direction > 0.0) {
                    *direction = -*direction;
                }
            }

            TargetKind::Diagonal { corner, .. } => {
                // Left corners sweep right, right corners sweep left
                let step = if *corner % 2 == 0 { DRONE_STEP } else { -DRONE_STEP };
                let next_x = self.pos.x + step;
                if next_x < 0.0 || next_x > field.width {
                    return;
                }
                let slope = field.diagonal_slope();
                let y = match *corner {
                    0 | 3 => next_x * slope,
                    _ => field.height - next_x * slope,
                };
                self.pos = Vec2::new(next_x, y);
            }
        }
    }

    /// Drop a bomb with a random speed and heading, if this target can
    pub fn counter_fire<R: Rng + ?Sized>(&self, id: u32, rng: &mut R) -> Option<MovingBody> {
        if !self.can_counter_fire() {
            return None;
        }
        let speed = rng.random_range(BOMB_MIN_SPEED..=BOMB_MAX_SPEED) as f32;
        let heading_deg = rng.random_range(0..=360) as f32;
        Some(MovingBody::bomb(
            id,
            self.center(),
            counter_fire_velocity(speed, heading_deg),
        ))
    }
}

/// Bomb launch velocity for a heading given in degrees
pub fn counter_fire_velocity(speed: f32, heading_deg: f32) -> Vec2 {
    velocity_from_angle(speed, heading_deg.to_radians())
}
