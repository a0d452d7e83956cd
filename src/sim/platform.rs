//! Firing platforms: the player's cannon or tank, and the rival cannon
//!
//! Charging: `activate` on trigger press, `gain_charge` every tick while held,
//! `fire` on release. Firing always launches a shell and always resets the
//! charge, even if the trigger was never pressed.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::MovingBody;
use super::geometry::Playfield;
use crate::config::{PlatformKind, SimConfig};
use crate::consts::*;
use crate::render::{RED, Rgb, TEAL, WHITE};
use crate::velocity_from_angle;

/// Half width of the drawn barrel
const BARREL_HALF_WIDTH: f32 = 5.0;

/// A cannon or tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub kind: PlatformKind,
    pub pos: Vec2,
    /// Barrel direction (radians, screen coordinates)
    pub angle: f32,
    /// Current charge, in [min_pow, max_pow]
    pub pow: f32,
    pub min_pow: f32,
    pub max_pow: f32,
    /// Trigger held
    pub active: bool,
    pub color: Rgb,
}

impl Platform {
    /// The player's platform, placed for its body type
    pub fn player(config: &SimConfig) -> Self {
        let (w, h) = (config.screen_width, config.screen_height);
        let (pos, color) = match config.player {
            PlatformKind::Cannon => (Vec2::new(EDGE_GUARD, (h / 2.0).floor()), RED),
            PlatformKind::Tank => (Vec2::new((w / 2.0).floor(), h - EDGE_GUARD), TEAL),
        };
        Self {
            kind: config.player,
            pos,
            angle: 0.0,
            pow: config.min_pow,
            min_pow: config.min_pow,
            max_pow: config.max_pow,
            active: false,
            color,
        }
    }

    /// Rival cannon on the right edge. Starts with the barrel pointing left
    /// (angle PI); the tick re-aims it at the player every step.
    pub fn rival(field: &Playfield) -> Self {
        let (min_pow, max_pow) = PlatformKind::Cannon.power_range();
        Self {
            kind: PlatformKind::Cannon,
            pos: Vec2::new(field.width - EDGE_GUARD, (field.height / 2.0).floor()),
            angle: PI,
            pow: min_pow,
            min_pow,
            max_pow,
            active: false,
            color: WHITE,
        }
    }

    /// Start charging
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Add charge while the trigger is held; holds at `max_pow`
    pub fn gain_charge(&mut self, increment: f32) {
        if self.active && self.pow < self.max_pow {
            self.pow = (self.pow + increment).min(self.max_pow);
        }
    }

    /// Launch a shell along the barrel at the current charge, then reset
    pub fn fire(&mut self, id: u32, color: Rgb) -> MovingBody {
        let vel = velocity_from_angle(self.pow, self.angle);
        let shell = MovingBody::shell(id, self.pos, vel, color);
        self.pow = self.min_pow;
        self.active = false;
        shell
    }

    /// Rival fire: a flat bullet from the barrel
    pub fn fire_bullet(&self, id: u32) -> MovingBody {
        MovingBody::bullet(id, self.pos)
    }

    /// Point the barrel at `target`
    pub fn set_aim(&mut self, target: Vec2) {
        let d = target - self.pos;
        self.angle = d.y.atan2(d.x);
    }

    /// Move by `delta`, refusing to step further toward an edge once within
    /// the guard distance. Cannons ignore horizontal movement.
    ///
    /// The guard is checked before moving, so a single step may end up to one
    /// step inside the guard band.
    pub fn reposition(&mut self, delta: Vec2, field: &Playfield) {
        let dims = field.size();
        for axis in 0..2 {
            if axis == 0 && !self.kind.moves_horizontally() {
                continue;
            }
            let d = delta[axis];
            let p = self.pos[axis];
            let clear_of_near = p > EDGE_GUARD || d > 0.0;
            let clear_of_far = p < dims[axis] - EDGE_GUARD || d < 0.0;
            if clear_of_near && clear_of_far {
                self.pos[axis] += d;
            }
        }
    }

    /// Step vertically toward `target_y` at the rival tracking speed
    pub fn track(&mut self, target_y: f32) {
        if self.pos.y < target_y {
            self.pos.y += RIVAL_TRACK_STEP;
        } else if self.pos.y > target_y {
            self.pos.y -= RIVAL_TRACK_STEP;
        }
    }

    /// Barrel outline: a quad along the aim direction, as long as the charge
    pub fn barrel(&self) -> [Vec2; 4] {
        let side = velocity_from_angle(BARREL_HALF_WIDTH, self.angle - FRAC_PI_2);
        let length = velocity_from_angle(self.pow, self.angle);
        let p = self.pos;
        [p + side, p + side + length, p + length - side, p - side]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn cannon() -> Platform {
        Platform::player(&SimConfig::default())
    }

    fn tank() -> Platform {
        Platform::player(&SimConfig::tank_range())
    }

    #[test]
    fn test_placement() {
        assert_eq!(cannon().pos, Vec2::new(30.0, 300.0));
        assert_eq!(tank().pos, Vec2::new(400.0, 570.0));
        assert_eq!(Platform::rival(&field()).pos, Vec2::new(770.0, 300.0));
    }

    #[test]
    fn test_fire_without_charging() {
        let mut gun = cannon();
        let shell = gun.fire(1, WHITE);
        assert_eq!(shell.vel.length(), gun.min_pow);
        assert_eq!(shell.pos, gun.pos);
        assert_eq!(gun.pow, gun.min_pow);
        assert!(!gun.active);
    }

    #[test]
    fn test_charge_then_fire_resets() {
        let mut gun = cannon();
        gun.activate();
        for _ in 0..5 {
            gun.gain_charge(CHARGE_INCREMENT);
        }
        assert_eq!(gun.pow, 20.0);

        let shell = gun.fire(1, WHITE);
        assert_eq!(shell.vel, Vec2::new(20.0, 0.0));
        assert_eq!(gun.pow, gun.min_pow);
        assert!(!gun.active);
    }

    #[test]
    fn test_charge_holds_at_max() {
        let mut t = tank();
        t.activate();
        for _ in 0..100 {
            t.gain_charge(CHARGE_INCREMENT);
        }
        // 10 + 2k never lands on 75; capped rather than overshooting
        assert_eq!(t.pow, 75.0);
    }

    #[test]
    fn test_idle_does_not_charge() {
        let mut gun = cannon();
        gun.gain_charge(CHARGE_INCREMENT);
        assert_eq!(gun.pow, gun.min_pow);
    }

    #[test]
    fn test_set_aim() {
        let mut gun = cannon();
        gun.set_aim(gun.pos + Vec2::new(100.0, 0.0));
        assert_eq!(gun.angle, 0.0);
        gun.set_aim(gun.pos + Vec2::new(0.0, 100.0));
        assert!((gun.angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_cannon_moves_vertically_only() {
        let mut gun = cannon();
        gun.reposition(Vec2::new(KEY_STEP, -KEY_STEP), &field());
        assert_eq!(gun.pos, Vec2::new(30.0, 295.0));
    }

    #[test]
    fn test_guard_blocks_moving_toward_edge() {
        let mut gun = cannon();
        gun.pos.y = 31.0;
        gun.reposition(Vec2::new(0.0, -KEY_STEP), &field());
        // Guard checked before the step: lands inside the band
        assert_eq!(gun.pos.y, 26.0);
        gun.reposition(Vec2::new(0.0, -KEY_STEP), &field());
        assert_eq!(gun.pos.y, 26.0);
        // Moving away is always allowed
        gun.reposition(Vec2::new(0.0, KEY_STEP), &field());
        assert_eq!(gun.pos.y, 31.0);
    }

    #[test]
    fn test_tank_starts_against_floor_guard() {
        let mut t = tank();
        t.reposition(Vec2::new(0.0, KEY_STEP), &field());
        assert_eq!(t.pos, Vec2::new(400.0, 570.0));
        t.reposition(Vec2::new(-KEY_STEP, 0.0), &field());
        assert_eq!(t.pos, Vec2::new(395.0, 570.0));
        t.reposition(Vec2::new(0.0, -KEY_STEP), &field());
        assert_eq!(t.pos, Vec2::new(395.0, 565.0));
    }

    #[test]
    fn test_rival_tracks_with_jitter() {
        let mut rival = Platform::rival(&field());
        rival.pos.y = 290.0;
        rival.track(300.0);
        assert_eq!(rival.pos.y, 293.0);

        rival.pos.y = 301.0;
        rival.track(300.0);
        assert_eq!(rival.pos.y, 298.0);
        rival.track(300.0);
        assert_eq!(rival.pos.y, 301.0);

        rival.pos.y = 300.0;
        rival.track(300.0);
        assert_eq!(rival.pos.y, 300.0);
    }

    #[test]
    fn test_rival_starts_facing_player_side() {
        let mut rival = Platform::rival(&field());
        assert_eq!(rival.angle, PI);
        assert_eq!(rival.barrel()[1].x, rival.pos.x - rival.pow);

        rival.set_aim(cannon().pos);
        assert!((rival.angle.abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_rival_bullet() {
        let rival = Platform::rival(&field());
        let bullet = rival.fire_bullet(4);
        assert_eq!(bullet.pos, rival.pos);
        assert_eq!(bullet.vel, Vec2::new(-BULLET_SPEED, 0.0));
    }

    #[test]
    fn test_barrel_shape() {
        let gun = cannon();
        let [a, b, c, d] = gun.barrel();
        // Pointing right, 10 long, 10 wide
        assert_eq!(a, gun.pos + Vec2::new(0.0, -5.0));
        assert_eq!(b, gun.pos + Vec2::new(10.0, -5.0));
        assert_eq!(c, gun.pos + Vec2::new(10.0, 5.0));
        assert_eq!(d, gun.pos + Vec2::new(0.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_charge_stays_in_range(presses in 0usize..200, inc in 0.5f32..10.0) {
            let mut t = tank();
            t.activate();
            for _ in 0..presses {
                t.gain_charge(inc);
                prop_assert!(t.pow >= t.min_pow && t.pow <= t.max_pow);
            }
        }

        #[test]
        fn prop_player_never_escapes_playfield(steps in proptest::collection::vec(0u8..4, 0..400)) {
            let mut t = tank();
            for s in steps {
                let delta = match s {
                    0 => Vec2::new(0.0, -KEY_STEP),
                    1 => Vec2::new(0.0, KEY_STEP),
                    2 => Vec2::new(-KEY_STEP, 0.0),
                    _ => Vec2::new(KEY_STEP, 0.0),
                };
                t.reposition(delta, &field());
                prop_assert!(t.pos.x >= EDGE_GUARD - KEY_STEP && t.pos.x <= SCREEN_WIDTH - EDGE_GUARD + KEY_STEP);
                prop_assert!(t.pos.y >= EDGE_GUARD - KEY_STEP && t.pos.y <= SCREEN_HEIGHT - EDGE_GUARD + KEY_STEP);
            }
        }
    }
}
