//! Artillery - a 2D cannon duel arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shell physics, targets, collisions, waves)
//! - `render`: Draw hand-off to an external rendering surface
//! - `config`: Construction-time tunables and game variant presets
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::{PlatformKind, SimConfig};
pub use error::{ConfigError, SimResult};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Driver cadence (ticks per second)
    pub const TICK_RATE_HZ: u32 = 15;
    /// One simulation step, in ticks
    pub const SIM_DT: f32 = 1.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick applied to shells and bombs
    pub const GRAVITY: f32 = 2.0;
    /// Velocity kept along the bounce normal
    pub const RESTITUTION_NORMAL: f32 = 0.8;
    /// Velocity kept along the wall on a bounce
    pub const RESTITUTION_TANGENT: f32 = 0.9;
    /// A body slower than this (squared) near the floor is buried
    pub const BURY_SPEED_SQ: f32 = 4.0;

    /// Charge gained per tick while the trigger is held
    pub const CHARGE_INCREMENT: f32 = 2.0;
    /// Platforms cannot be driven closer than this to the edges
    pub const EDGE_GUARD: f32 = 30.0;
    /// Distance moved per reposition key press
    pub const KEY_STEP: f32 = 5.0;
    /// Rival vertical tracking speed per tick
    pub const RIVAL_TRACK_STEP: f32 = 3.0;

    /// Shell defaults
    pub const SHELL_RADIUS: f32 = 20.0;
    /// Bomb defaults (counter-fire from targets)
    pub const BOMB_RADIUS: f32 = 15.0;
    pub const BOMB_MIN_SPEED: i32 = 1;
    pub const BOMB_MAX_SPEED: i32 = 5;
    /// Bullet defaults (rival fire)
    pub const BULLET_RADIUS: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 20.0;
    /// Bomb and bullet sprites are square
    pub const ORDNANCE_SPRITE_SIZE: f32 = 15.0;

    /// Circle targets start at this radius and shrink as the score grows
    pub const TARGET_MAX_RADIUS: i32 = 30;
    /// Drift velocity range per axis for drifting circles
    pub const DRIFT_MAX: i32 = 2;
    /// Oscillating rectangle defaults
    pub const RECT_WIDTH: f32 = 50.0;
    pub const RECT_HEIGHT: f32 = 25.0;
    pub const RECT_SPEED: f32 = 1.0;

    /// Drone (diagonal plane) defaults
    pub const DRONE_RADIUS: f32 = 30.0;
    pub const DRONE_STEP: f32 = 10.0;
    pub const DRONE_SPRITE_SIZE: f32 = 30.0;
}

/// Velocity vector for a launch of `speed` at `angle` radians.
///
/// Components are truncated toward zero; velocities in this game are whole
/// units per tick.
#[inline]
pub fn velocity_from_angle(speed: f32, angle: f32) -> Vec2 {
    Vec2::new((speed * angle.cos()).trunc(), (speed * angle.sin()).trunc())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Random RGB color
pub fn random_color<R: rand::Rng + ?Sized>(rng: &mut R) -> render::Rgb {
    [rng.random(), rng.random(), rng.random()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_velocity_from_angle_truncates() {
        let v = velocity_from_angle(10.0, 0.0);
        assert_eq!(v, Vec2::new(10.0, 0.0));

        // 10 * cos(45°) = 7.07 -> 7
        let v = velocity_from_angle(10.0, PI / 4.0);
        assert_eq!(v, Vec2::new(7.0, 7.0));

        // Negative components truncate toward zero, not down
        let v = velocity_from_angle(10.0, PI + PI / 4.0);
        assert_eq!(v, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }
}
