//! Simulation configuration and game variant presets
//!
//! Every tunable is fixed when a [`crate::sim::GameState`] is built; nothing is
//! read from disk and nothing changes mid-session.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SimResult};

/// Smallest playfield side that still fits a full-size target
const MIN_SCREEN_SIDE: f32 = 2.0 * TARGET_MAX_RADIUS as f32;

/// Player platform body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlatformKind {
    /// Fixed to the left edge, moves vertically only
    #[default]
    Cannon,
    /// Sits near the floor and drives in all four directions
    Tank,
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Cannon => "Cannon",
            PlatformKind::Tank => "Tank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cannon" | "gun" => Some(PlatformKind::Cannon),
            "tank" => Some(PlatformKind::Tank),
            _ => None,
        }
    }

    /// Default (min, max) charge power for this body
    pub fn power_range(&self) -> (f32, f32) {
        match self {
            PlatformKind::Cannon => (10.0, 50.0),
            PlatformKind::Tank => (10.0, 75.0),
        }
    }

    /// Whether left/right reposition keys move this body
    pub fn moves_horizontally(&self) -> bool {
        matches!(self, PlatformKind::Tank)
    }
}

/// Construction-time simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics ===
    /// Added to vertical velocity each tick (shells and bombs)
    pub gravity: f32,
    pub restitution_normal: f32,
    pub restitution_tangent: f32,

    // === Player platform ===
    pub player: PlatformKind,
    pub min_pow: f32,
    pub max_pow: f32,
    pub charge_increment: f32,

    // === Waves ===
    /// N: each wave spawns N drifting and N stationary circles
    pub wave_targets: u32,
    /// Oscillating rectangles per wave
    pub rect_targets: u32,

    // === Hostiles ===
    /// Rival cannon on the right edge that tracks the player and fires bullets
    pub rival: bool,
    /// Diagonal drone relaunched every wave
    pub drone: bool,
    /// Targets (and the drone) drop bombs whenever the player fires
    pub retaliation: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        let (min_pow, max_pow) = PlatformKind::Cannon.power_range();
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            restitution_normal: RESTITUTION_NORMAL,
            restitution_tangent: RESTITUTION_TANGENT,

            player: PlatformKind::Cannon,
            min_pow,
            max_pow,
            charge_increment: CHARGE_INCREMENT,

            wave_targets: 3,
            rect_targets: 5,

            rival: true,
            drone: true,
            retaliation: true,
        }
    }
}

impl SimConfig {
    /// Cannon against rival, drone and retaliating circles; no rectangles
    pub fn duel() -> Self {
        Self {
            rect_targets: 0,
            ..Self::default()
        }
    }

    /// Tank on a quiet range: circles and rectangles, nothing shoots back
    pub fn tank_range() -> Self {
        Self::default().with_player(PlatformKind::Tank).without_hostiles()
    }

    /// Switch the player body, resetting the power range to its defaults
    pub fn with_player(mut self, player: PlatformKind) -> Self {
        let (min_pow, max_pow) = player.power_range();
        self.player = player;
        self.min_pow = min_pow;
        self.max_pow = max_pow;
        self
    }

    /// Disable the rival, the drone and counter-fire
    pub fn without_hostiles(mut self) -> Self {
        self.rival = false;
        self.drone = false;
        self.retaliation = false;
        self
    }

    /// Whether anything can hit the player (controls the "Got hit" HUD line)
    pub fn has_hostiles(&self) -> bool {
        self.rival || self.drone || self.retaliation
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> SimResult<()> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !w.is_finite() || !h.is_finite() || w < MIN_SCREEN_SIDE || h < MIN_SCREEN_SIDE {
            return Err(ConfigError::InvalidScreen {
                width: w,
                height: h,
            });
        }

        check_range("gravity", self.gravity, 0.0, 20.0, "[0, 20]")?;
        // A lossless bounce never lets a shell come to rest, so the wave never clears
        check_below(
            "restitution_normal",
            self.restitution_normal,
            0.0,
            1.0,
            "[0, 1)",
        )?;
        check_range(
            "restitution_tangent",
            self.restitution_tangent,
            0.0,
            1.0,
            "[0, 1]",
        )?;

        if !(self.charge_increment.is_finite() && self.charge_increment > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "charge_increment",
                value: self.charge_increment,
                range: "(0, inf)",
            });
        }
        if !(self.min_pow.is_finite() && self.min_pow > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "min_pow",
                value: self.min_pow,
                range: "(0, inf)",
            });
        }
        if !self.max_pow.is_finite() || self.min_pow > self.max_pow {
            return Err(ConfigError::InvertedPowerRange {
                min_pow: self.min_pow,
                max_pow: self.max_pow,
            });
        }

        if self.wave_targets == 0 && self.rect_targets == 0 {
            return Err(ConfigError::EmptyWave);
        }

        Ok(())
    }
}

fn check_range(name: &'static str, value: f32, lo: f32, hi: f32, range: &'static str) -> SimResult<()> {
    // NaN fails both comparisons and is rejected here too
    if value >= lo && value <= hi {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, range })
    }
}

fn check_below(name: &'static str, value: f32, lo: f32, hi: f32, range: &'static str) -> SimResult<()> {
    if value >= lo && value < hi {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::duel().validate().is_ok());
        assert!(SimConfig::tank_range().validate().is_ok());
    }

    #[test]
    fn test_tank_range_preset() {
        let config = SimConfig::tank_range();
        assert_eq!(config.player, PlatformKind::Tank);
        assert_eq!(config.max_pow, 75.0);
        assert!(!config.has_hostiles());
        assert_eq!(config.rect_targets, 5);
    }

    #[test]
    fn test_rejects_inverted_power() {
        let config = SimConfig {
            min_pow: 60.0,
            max_pow: 50.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedPowerRange {
                min_pow: 60.0,
                max_pow: 50.0
            })
        );
    }

    #[test]
    fn test_rejects_bad_restitution() {
        let config = SimConfig {
            restitution_normal: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "restitution_normal",
                ..
            })
        ));

        let config = SimConfig {
            restitution_tangent: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_lossless_bounce() {
        let config = SimConfig {
            restitution_normal: 1.0,
            restitution_tangent: 1.0,
            ..SimConfig::tank_range()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "restitution_normal",
                value: 1.0,
                range: "[0, 1)"
            })
        );

        // Keeping all tangential speed is fine while wall hits still lose some
        let config = SimConfig {
            restitution_normal: 0.99,
            restitution_tangent: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_wave() {
        let config = SimConfig {
            wave_targets: 0,
            rect_targets: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyWave));
    }

    #[test]
    fn test_rejects_tiny_screen() {
        let config = SimConfig {
            screen_width: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_platform_kind_from_str() {
        assert_eq!(PlatformKind::from_str("TANK"), Some(PlatformKind::Tank));
        assert_eq!(PlatformKind::from_str("gun"), Some(PlatformKind::Cannon));
        assert_eq!(PlatformKind::from_str("boat"), None);
        assert_eq!(PlatformKind::Tank.as_str(), "Tank");
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: SimConfig = serde_json::from_str(r#"{"wave_targets": 7}"#).unwrap();
        assert_eq!(config.wave_targets, 7);
        assert_eq!(config.rect_targets, 5);
        assert_eq!(config.gravity, GRAVITY);
    }
}
