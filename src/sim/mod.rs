//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entities kept in spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod platform;
pub mod state;
pub mod target;
pub mod tick;

pub use body::{BodyKind, MovingBody, Restitution};
pub use collision::{CollisionReport, CollisionShape, detect};
pub use geometry::{Aabb, Playfield};
pub use platform::Platform;
pub use state::{GameState, ScoreTable};
pub use target::{Target, TargetKind};
pub use tick::{Direction, InputEvent, TickInput, TickOutcome, spawn_wave, tick};
