//! Construction-time configuration errors.
//!
//! A tick never fails: every transition is a total function of valid state.
//! The only rejection happens up front, when a [`crate::SimConfig`] describes a
//! game the simulation cannot run.

use std::fmt;

/// Reasons a [`crate::SimConfig`] is rejected by [`crate::SimConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Playfield width or height is zero, negative or not finite.
    InvalidScreen { width: f32, height: f32 },

    /// A physics or gameplay constant is outside its usable range.
    OutOfRange {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },

    /// `min_pow` exceeds `max_pow` for a platform.
    InvertedPowerRange { min_pow: f32, max_pow: f32 },

    /// A wave would contain no targets, so every tick would clear and respawn it.
    EmptyWave,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScreen { width, height } => {
                write!(f, "invalid playfield size {}x{}", width, height)
            }
            ConfigError::OutOfRange { name, value, range } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, range
            ),
            ConfigError::InvertedPowerRange { min_pow, max_pow } => write!(
                f,
                "platform power range is inverted: min {} > max {}",
                min_pow, max_pow
            ),
            ConfigError::EmptyWave => {
                write!(f, "wave must contain at least one circle or rectangle target")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type SimResult<T> = Result<T, ConfigError>;
